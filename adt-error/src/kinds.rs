// ADT - adt-error
// Module: List Error Kinds
// SW-REQ-ID: REQ_LIST_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Marker error kinds.
//!
//! Zero-sized values naming each failure condition. They convert into
//! [`Error`] with the default code and message of their category.

use core::fmt;

use crate::{codes, Error, ErrorCategory, ToErrorCategory};

/// Positional operation on a list holding zero elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyListError;

/// Position outside the valid range of the operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadIndexError;

/// Insertion into a list with no free slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RanOutOfSpaceError;

/// Backing store slot access outside `[0, capacity)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOutOfBoundsError;

impl fmt::Display for EmptyListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List is empty")
    }
}

impl fmt::Display for BadIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bad index")
    }
}

impl fmt::Display for RanOutOfSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List ran out of space")
    }
}

impl fmt::Display for StorageOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Storage slot out of bounds")
    }
}

impl From<EmptyListError> for Error {
    fn from(_e: EmptyListError) -> Self {
        Error::EMPTY_LIST
    }
}

impl From<BadIndexError> for Error {
    fn from(_e: BadIndexError) -> Self {
        Error::new(ErrorCategory::Index, codes::BAD_INDEX, "Bad index")
    }
}

impl From<RanOutOfSpaceError> for Error {
    fn from(_e: RanOutOfSpaceError) -> Self {
        Error::RAN_OUT_OF_SPACE
    }
}

impl From<StorageOutOfBoundsError> for Error {
    fn from(_e: StorageOutOfBoundsError) -> Self {
        Error::new(
            ErrorCategory::Storage,
            codes::STORAGE_OUT_OF_BOUNDS,
            "Storage slot out of bounds",
        )
    }
}

impl ToErrorCategory for EmptyListError {
    fn to_category(&self) -> ErrorCategory {
        ErrorCategory::Empty
    }
}

impl ToErrorCategory for BadIndexError {
    fn to_category(&self) -> ErrorCategory {
        ErrorCategory::Index
    }
}

impl ToErrorCategory for RanOutOfSpaceError {
    fn to_category(&self) -> ErrorCategory {
        ErrorCategory::Capacity
    }
}

impl ToErrorCategory for StorageOutOfBoundsError {
    fn to_category(&self) -> ErrorCategory {
        ErrorCategory::Storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_conversions_keep_category() {
        let empty: Error = EmptyListError.into();
        let index: Error = BadIndexError.into();
        let space: Error = RanOutOfSpaceError.into();
        let storage: Error = StorageOutOfBoundsError.into();

        assert_eq!(empty.category, EmptyListError.to_category());
        assert_eq!(index.category, BadIndexError.to_category());
        assert_eq!(space.category, RanOutOfSpaceError.to_category());
        assert_eq!(storage.category, StorageOutOfBoundsError.to_category());
    }
}
