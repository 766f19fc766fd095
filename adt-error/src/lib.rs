// ADT - adt-error
// Module: List Error Handling
// SW-REQ-ID: REQ_LIST_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the fixed-capacity list ADTs.
//!
//! Every failing list operation reports one of a small set of categorized
//! errors. Each category owns its own range of error codes:
//!
//! ## Empty Errors (1000-1099)
//! - Positional access on a list holding zero elements
//!
//! ## Index Errors (2000-2099)
//! - Position outside `[0, count)` for access and removal
//! - Position outside `[0, count]` for insertion
//!
//! ## Capacity Errors (3000-3099)
//! - Insertion into a full list
//!
//! ## Storage Errors (4000-4099)
//! - Backing store slot access outside `[0, capacity)`
//!
//! ## Validation Errors (5000-5099)
//! - Construction input that does not fit the target storage
//!
//! # Usage
//!
//! ```
//! use adt_error::{kinds, Error, ErrorCategory, ErrorKind};
//!
//! let error = Error::new(
//!     ErrorCategory::Index,
//!     adt_error::codes::BAD_INDEX,
//!     "Index 7 outside list bounds",
//! );
//! assert!(error.is_index_error());
//!
//! let empty: Error = kinds::EmptyListError.into();
//! assert_eq!(empty.kind(), ErrorKind::Empty);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for the list ADTs
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod helpers;

pub use errors::{Error, ErrorCategory, ErrorKind, ErrorSource};
pub use helpers::*;

/// A specialized `Result` type for list operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Conversion trait for mapping any error to its category.
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
