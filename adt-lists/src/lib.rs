// ADT - adt-lists
// SW-REQ-ID: REQ_LIST_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity positional lists.
//!
//! This crate provides a list with a maximum size set at construction,
//! backed by a contiguous store of exactly that many slots. Elements can be
//! inserted and removed at any position; the remaining elements are shifted
//! so that they always occupy a gap-free prefix of the store.
//!
//! It supports two storage configurations:
//! - [`ArrayStore`]: heap slots sized at runtime
//! - [`InlineStore`]: inline slots sized at compile time, no heap
//!
//! # Feature Flags
//!
//! - `std` (default): implements `std::error::Error` for list errors
//! - `tracing`: structured logging of shifts and failed operations
//!
//! # Example
//!
//! ```
//! use adt_lists::prelude::*;
//!
//! let mut list = FixedCapacityList::new(3);
//! list.add_back(1)?;
//! list.add_back(2)?;
//! list.add_back(3)?;
//! assert!(list.is_full());
//!
//! let err = list.add_index(3, 4).unwrap_err();
//! assert!(err.is_capacity_error());
//!
//! assert_eq!(list.remove_index(1)?, 2);
//! list.add_front(9)?;
//! assert_eq!(list, [9, 1, 3]);
//! # Ok::<(), adt_lists::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Logging macros must be declared before the modules that use them
#[macro_use]
mod macros;

/// Fixed-capacity collections
pub mod collections;
pub mod prelude;
/// Backing store collaborators
pub mod storage;
/// The abstract list contract
pub mod traits;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use adt_error::{codes, kinds, Error, ErrorCategory, ErrorKind};
pub use collections::{FixedCapacityList, Iter, StaticFixedList};
pub use storage::{ArrayStore, InlineStore, SlotStorage};
pub use traits::ListAdt;

/// Result type alias for list operations using `adt_error::Error`
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(kani)]
mod verification;
