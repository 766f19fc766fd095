// ADT - adt-error
// Module: List Error Types
// SW-REQ-ID: REQ_LIST_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Unified error handling for the list ADTs
///
/// Errors carry a category, a numeric code and a static message. They are
/// `Copy` so they can be returned from `no_std` code without allocation.
use core::fmt;

use crate::{codes, ToErrorCategory};

/// `Error` categories for list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// The list holds zero elements
    Empty      = 1,
    /// A position is outside the operation's valid range
    Index      = 2,
    /// The list is already full
    Capacity   = 3,
    /// The backing store was addressed outside its slots
    Storage    = 4,
    /// Construction input was rejected
    Validation = 5,
}

/// The three conditions a list caller distinguishes, plus storage faults.
///
/// Obtained from [`Error::kind`] for exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `EmptyError`: positional operation on an empty list
    Empty,
    /// `IndexError`: position outside the valid range
    Index,
    /// `CapacityError`: insertion into a full list
    Capacity,
    /// Backing store fault
    Storage,
    /// Rejected construction input
    Validation,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// List `Error` type
///
/// Categorized error with a code and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Positional access on an empty list
    pub const EMPTY_LIST: Self = Self::new(
        ErrorCategory::Empty,
        codes::EMPTY_LIST,
        "List is empty",
    );
    /// Insertion into a full list
    pub const RAN_OUT_OF_SPACE: Self = Self::new(
        ErrorCategory::Capacity,
        codes::RAN_OUT_OF_SPACE,
        "List ran out of space",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an empty list error
    #[must_use]
    pub const fn empty_list(message: &'static str) -> Self {
        Self::new(ErrorCategory::Empty, codes::EMPTY_LIST, message)
    }

    /// Create an empty list error for a front access
    #[must_use]
    pub const fn empty_list_front(message: &'static str) -> Self {
        Self::new(ErrorCategory::Empty, codes::EMPTY_LIST_FRONT, message)
    }

    /// Create an empty list error for a back access
    #[must_use]
    pub const fn empty_list_back(message: &'static str) -> Self {
        Self::new(ErrorCategory::Empty, codes::EMPTY_LIST_BACK, message)
    }

    /// Create a generic bad index error
    #[must_use]
    pub const fn bad_index(message: &'static str) -> Self {
        Self::new(ErrorCategory::Index, codes::BAD_INDEX, message)
    }

    /// Create a bad index error for the exclusive range `[0, count)`
    #[must_use]
    pub const fn bad_index_exclusive(message: &'static str) -> Self {
        Self::new(ErrorCategory::Index, codes::BAD_INDEX_EXCLUSIVE, message)
    }

    /// Create a bad index error for the inclusive range `[0, count]`
    #[must_use]
    pub const fn bad_index_inclusive(message: &'static str) -> Self {
        Self::new(ErrorCategory::Index, codes::BAD_INDEX_INCLUSIVE, message)
    }

    /// Create a capacity error
    #[must_use]
    pub const fn ran_out_of_space(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::RAN_OUT_OF_SPACE, message)
    }

    /// Create a storage out of bounds error
    #[must_use]
    pub const fn storage_out_of_bounds(message: &'static str) -> Self {
        Self::new(ErrorCategory::Storage, codes::STORAGE_OUT_OF_BOUNDS, message)
    }

    /// Create a vacant slot error
    #[must_use]
    pub const fn storage_slot_vacant(message: &'static str) -> Self {
        Self::new(ErrorCategory::Storage, codes::STORAGE_SLOT_VACANT, message)
    }

    /// Create an input exceeds capacity error
    #[must_use]
    pub const fn input_exceeds_capacity(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::INPUT_EXCEEDS_CAPACITY, message)
    }

    /// Check if this is an empty list error
    #[must_use]
    pub fn is_empty_error(&self) -> bool {
        self.category == ErrorCategory::Empty
    }

    /// Check if this is an index error
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        self.category == ErrorCategory::Index
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a storage error
    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        self.category == ErrorCategory::Storage
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// The kind of failure, for exhaustive matching
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self.category {
            ErrorCategory::Empty => ErrorKind::Empty,
            ErrorCategory::Index => ErrorKind::Index,
            ErrorCategory::Capacity => ErrorKind::Capacity,
            ErrorCategory::Storage => ErrorKind::Storage,
            ErrorCategory::Validation => ErrorKind::Validation,
        }
    }

    /// Check that the code lies in the range owned by the category
    #[must_use]
    pub const fn validate_integrity(&self) -> bool {
        let start = match self.category {
            ErrorCategory::Empty => codes::EMPTY_RANGE_START,
            ErrorCategory::Index => codes::INDEX_RANGE_START,
            ErrorCategory::Capacity => codes::CAPACITY_RANGE_START,
            ErrorCategory::Storage => codes::STORAGE_RANGE_START,
            ErrorCategory::Validation => codes::VALIDATION_RANGE_START,
        };
        self.code >= start && self.code < start + codes::RANGE_WIDTH
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "EmptyError",
            Self::Index => "IndexError",
            Self::Capacity => "CapacityError",
            Self::Storage => "StorageError",
            Self::Validation => "ValidationError",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_category() {
        assert_eq!(Error::EMPTY_LIST.kind(), ErrorKind::Empty);
        assert_eq!(Error::RAN_OUT_OF_SPACE.kind(), ErrorKind::Capacity);
        assert_eq!(Error::bad_index("x").kind(), ErrorKind::Index);
        assert_eq!(Error::storage_out_of_bounds("x").kind(), ErrorKind::Storage);
        assert_eq!(
            Error::input_exceeds_capacity("x").kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_predicates_are_exclusive() {
        let err = Error::bad_index_inclusive("Insert position past end");
        assert!(err.is_index_error());
        assert!(!err.is_empty_error());
        assert!(!err.is_capacity_error());
        assert!(!err.is_storage_error());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_constructors_validate_integrity() {
        let all = [
            Error::EMPTY_LIST,
            Error::RAN_OUT_OF_SPACE,
            Error::empty_list_front("front"),
            Error::empty_list_back("back"),
            Error::bad_index("index"),
            Error::bad_index_exclusive("exclusive"),
            Error::bad_index_inclusive("inclusive"),
            Error::storage_out_of_bounds("storage"),
            Error::storage_slot_vacant("vacant"),
            Error::input_exceeds_capacity("input"),
        ];
        for err in all {
            assert!(err.validate_integrity(), "{err:?}");
        }
        let mismatched = Error::new(ErrorCategory::Empty, codes::RAN_OUT_OF_SPACE, "x");
        assert!(!mismatched.validate_integrity());
    }

    #[test]
    fn test_error_source_accessors() {
        let err = Error::ran_out_of_space("Full");
        assert_eq!(ErrorSource::code(&err), codes::RAN_OUT_OF_SPACE);
        assert_eq!(ErrorSource::message(&err), "Full");
        assert_eq!(ErrorSource::category(&err), ErrorCategory::Capacity);
        assert_eq!(err.to_category(), ErrorCategory::Capacity);
    }
}
