// ADT - adt-lists
// Module: Abstract list contract
// SW-REQ-ID: REQ_LIST_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The positional list contract shared by list implementations.
//!
//! # Error precedence
//!
//! - Positional reads, writes and removals check emptiness first and report
//!   [`ErrorKind::Empty`](crate::ErrorKind::Empty) on an empty list, then
//!   validate the index against `[0, size)`.
//! - Insertion validates the index against `[0, size]` first, then reports
//!   [`ErrorKind::Capacity`](crate::ErrorKind::Capacity) if the list is full.
//! - A failed operation leaves the list unchanged.

use crate::Result;

/// A sequence addressed by position, `0` being the front.
pub trait ListAdt<T> {
    /// Number of elements in the list.
    fn size(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if no further element can be inserted.
    fn is_full(&self) -> bool;

    /// The element at position 0.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty.
    fn get_front(&self) -> Result<&T>;

    /// The element at position `size() - 1`.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty.
    fn get_back(&self) -> Result<&T>;

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty, index error if `index >= size()`.
    fn get_index(&self, index: usize) -> Result<&T>;

    /// Overwrite the element at `index`, returning the replaced element.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty, index error if `index >= size()`.
    fn set_index(&mut self, index: usize, value: T) -> Result<T>;

    /// Insert `value` so it ends up at `index`, shifting later elements
    /// one position towards the back.
    ///
    /// # Errors
    ///
    /// Index error if `index > size()`, then capacity error if full.
    fn add_index(&mut self, index: usize, value: T) -> Result<()>;

    /// Insert `value` at the front.
    ///
    /// # Errors
    ///
    /// Capacity error if the list is full.
    fn add_front(&mut self, value: T) -> Result<()> {
        self.add_index(0, value)
    }

    /// Append `value` at the back.
    ///
    /// # Errors
    ///
    /// Capacity error if the list is full.
    fn add_back(&mut self, value: T) -> Result<()>;

    /// Remove and return the element at `index`, shifting later elements
    /// one position towards the front.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty, index error if `index >= size()`.
    fn remove_index(&mut self, index: usize) -> Result<T>;

    /// Remove and return the front element.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty.
    fn remove_front(&mut self) -> Result<T> {
        self.remove_index(0)
    }

    /// Remove and return the back element.
    ///
    /// # Errors
    ///
    /// Empty error if the list is empty.
    fn remove_back(&mut self) -> Result<T>;
}
