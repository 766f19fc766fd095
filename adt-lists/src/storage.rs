// ADT - adt-lists
// Module: Slot storage for fixed-capacity lists
// SW-REQ-ID: REQ_LIST_STORAGE_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Backing stores for fixed-capacity lists.
//!
//! A store is a fixed run of `capacity` slots addressed by `0..capacity`.
//! Each slot holds `Option<T>`; `None` marks a slot with no live element.
//! Accessing a slot outside the run fails with a
//! [`Storage`](adt_error::ErrorCategory::Storage) error instead of
//! touching memory it does not own.

use alloc::boxed::Box;
use core::iter;

use adt_error::Error;

use crate::Result;

/// A fixed-size run of optional slots.
///
/// # Invariants
///
/// 1. `capacity()` never changes for the lifetime of the store
/// 2. Indices `>= capacity()` are rejected by every accessor
pub trait SlotStorage<T> {
    /// Number of slots in the store.
    fn capacity(&self) -> usize;

    /// Borrow the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if `index >= capacity()`.
    fn get(&self, index: usize) -> Result<Option<&T>>;

    /// Mutably borrow the slot at `index`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if `index >= capacity()`.
    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>>;

    /// Write `value` into the slot at `index`, returning what it held.
    ///
    /// # Errors
    ///
    /// Returns a storage error if `index >= capacity()`.
    fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>>;

    /// Move the element out of the slot at `index`, leaving it vacant.
    ///
    /// # Errors
    ///
    /// Returns a storage error if `index >= capacity()`.
    fn take(&mut self, index: usize) -> Result<Option<T>> {
        self.set(index, None)
    }
}

fn slot<T>(slots: &[Option<T>], index: usize) -> Result<&Option<T>> {
    slots.get(index).ok_or_else(|| {
        trace_event!(debug, index, capacity = slots.len(), "slot read out of bounds");
        Error::storage_out_of_bounds("Slot index outside storage")
    })
}

fn slot_mut<T>(slots: &mut [Option<T>], index: usize) -> Result<&mut Option<T>> {
    if index >= slots.len() {
        trace_event!(debug, index, capacity = slots.len(), "slot write out of bounds");
        return Err(Error::storage_out_of_bounds("Slot index outside storage"));
    }
    Ok(&mut slots[index])
}

/// Heap-allocated store sized at runtime.
///
/// The slots are allocated once in [`ArrayStore::new`] and never grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStore<T> {
    slots: Box<[Option<T>]>,
}

impl<T> ArrayStore<T> {
    /// Allocate `capacity` vacant slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: iter::repeat_with(|| None).take(capacity).collect(),
        }
    }
}

impl<T> SlotStorage<T> for ArrayStore<T> {
    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Option<&T>> {
        Ok(slot(&self.slots, index)?.as_ref())
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        Ok(slot_mut(&mut self.slots, index)?.as_mut())
    }

    #[inline]
    fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>> {
        Ok(core::mem::replace(slot_mut(&mut self.slots, index)?, value))
    }
}

/// Inline store with compile-time capacity.
///
/// All `N` slots live inside the value itself; no heap allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineStore<T, const N: usize> {
    slots: [Option<T>; N],
}

impl<T, const N: usize> InlineStore<T, N> {
    /// Create a store of `N` vacant slots.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }
}

impl<T, const N: usize> Default for InlineStore<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> SlotStorage<T> for InlineStore<T, N> {
    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Result<Option<&T>> {
        Ok(slot(&self.slots, index)?.as_ref())
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>> {
        Ok(slot_mut(&mut self.slots, index)?.as_mut())
    }

    #[inline]
    fn set(&mut self, index: usize, value: Option<T>) -> Result<Option<T>> {
        Ok(core::mem::replace(slot_mut(&mut self.slots, index)?, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_store_starts_vacant() -> Result<()> {
        let store = ArrayStore::<u32>::new(4);
        assert_eq!(store.capacity(), 4);
        for i in 0..4 {
            assert_eq!(store.get(i)?, None);
        }
        Ok(())
    }

    #[test]
    fn test_set_returns_previous() -> Result<()> {
        let mut store = ArrayStore::new(2);
        assert_eq!(store.set(0, Some(7))?, None);
        assert_eq!(store.set(0, Some(8))?, Some(7));
        assert_eq!(store.take(0)?, Some(8));
        assert_eq!(store.get(0)?, None);
        Ok(())
    }

    #[test]
    fn test_out_of_bounds_fails_loudly() {
        let mut store = ArrayStore::<u32>::new(2);
        assert!(store.get(2).unwrap_err().is_storage_error());
        assert!(store.get_mut(2).unwrap_err().is_storage_error());
        assert!(store.set(5, Some(1)).unwrap_err().is_storage_error());
        assert!(store.take(2).unwrap_err().is_storage_error());
    }

    #[test]
    fn test_zero_capacity_store() {
        let store = ArrayStore::<u32>::new(0);
        assert_eq!(store.capacity(), 0);
        assert!(store.get(0).is_err());
    }

    #[test]
    fn test_inline_store() -> Result<()> {
        let mut store = InlineStore::<u8, 3>::new();
        assert_eq!(store.capacity(), 3);
        store.set(2, Some(42))?;
        if let Some(value) = store.get_mut(2)? {
            *value += 1;
        }
        assert_eq!(store.get(2)?, Some(&43));
        assert!(store.set(3, Some(1)).is_err());
        Ok(())
    }
}
