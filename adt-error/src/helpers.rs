// ADT - adt-error
// Module: List Error Helpers
// SW-REQ-ID: REQ_LIST_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helpers for the checks every positional list operation shares.
//!
//! Emptiness is always checked before the index range, so an empty list
//! reports [`ErrorCategory::Empty`] even for an index that a non-empty list
//! would accept.

use crate::{Error, ErrorCategory, Result};

/// Fail with an empty list error when `count == 0`.
///
/// # Errors
///
/// Returns an [`ErrorCategory::Empty`] error if `count` is zero.
pub const fn check_not_empty(count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::EMPTY_LIST);
    }
    Ok(())
}

/// Validate `index` against the exclusive range `[0, count)`.
///
/// # Errors
///
/// Returns an [`ErrorCategory::Index`] error if `index >= count`.
pub const fn check_exclusive_index(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(Error::bad_index_exclusive("Index outside [0, count)"));
    }
    Ok(())
}

/// Validate `index` against the inclusive range `[0, count]`.
///
/// # Errors
///
/// Returns an [`ErrorCategory::Index`] error if `index > count`.
pub const fn check_inclusive_index(index: usize, count: usize) -> Result<()> {
    if index > count {
        return Err(Error::bad_index_inclusive("Index outside [0, count]"));
    }
    Ok(())
}

/// Fail with a capacity error when `count == capacity`.
///
/// # Errors
///
/// Returns an [`ErrorCategory::Capacity`] error if no slot is free.
pub const fn check_has_space(count: usize, capacity: usize) -> Result<()> {
    if count >= capacity {
        return Err(Error::RAN_OUT_OF_SPACE);
    }
    Ok(())
}

/// Emptiness first, then the exclusive range.
///
/// # Errors
///
/// Returns an [`ErrorCategory::Empty`] or [`ErrorCategory::Index`] error.
pub const fn check_element_index(index: usize, count: usize) -> Result<()> {
    if let Err(e) = check_not_empty(count) {
        return Err(e);
    }
    check_exclusive_index(index, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_precedes_index() {
        let err = check_element_index(0, 0).unwrap_err();
        assert_eq!(err.category, ErrorCategory::Empty);

        let err = check_element_index(5, 0).unwrap_err();
        assert_eq!(err.category, ErrorCategory::Empty);
    }

    #[test]
    fn test_exclusive_bounds() {
        assert!(check_exclusive_index(0, 1).is_ok());
        assert!(check_exclusive_index(2, 3).is_ok());
        assert!(check_exclusive_index(3, 3).unwrap_err().is_index_error());
    }

    #[test]
    fn test_inclusive_bounds() {
        assert!(check_inclusive_index(0, 0).is_ok());
        assert!(check_inclusive_index(3, 3).is_ok());
        assert!(check_inclusive_index(4, 3).unwrap_err().is_index_error());
    }

    #[test]
    fn test_space() {
        assert!(check_has_space(2, 3).is_ok());
        assert!(check_has_space(3, 3).unwrap_err().is_capacity_error());
        assert!(check_has_space(0, 0).unwrap_err().is_capacity_error());
    }
}
