// ADT - adt-lists
// Module: FixedCapacityList - positional list with a maximum size
// SW-REQ-ID: REQ_LIST_001, REQ_LIST_SHIFT_001, REQ_LIST_ERROR_001
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity list with array-list shifting semantics.
//!
//! `FixedCapacityList<T, S>` stores up to `capacity` elements in a backing
//! store of exactly `capacity` slots. Elements always occupy the first
//! `len()` slots with no gaps; inserting or removing in the middle shifts
//! the trailing elements by one slot.
//!
//! # Characteristics
//!
//! - **No growth**: the store is sized once at construction
//! - **Move-only shifting**: elements are moved slot to slot, never cloned
//! - **O(1) back operations**: `add_back()`, `remove_back()`, `get_back()`
//! - **O(n) positional operations**: `add_index()`, `remove_index()`
//! - **No stale elements**: vacated slots are left `None`

use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use adt_error::helpers::{check_element_index, check_has_space, check_inclusive_index};

use crate::storage::{ArrayStore, InlineStore, SlotStorage};
use crate::traits::ListAdt;
use crate::{Error, Result};

/// A positional list that never holds more than `capacity` elements.
///
/// # Invariants
///
/// 1. `len <= capacity` always holds
/// 2. Slots `0..len` hold elements, slots `len..capacity` are `None`
/// 3. `capacity` never changes after construction
///
/// # Examples
///
/// ```
/// use adt_lists::{FixedCapacityList, ListAdt};
///
/// let mut list = FixedCapacityList::new(4);
/// list.add_back('b')?;
/// list.add_front('a')?;
/// list.add_index(2, 'c')?;
///
/// assert_eq!(list, ['a', 'b', 'c']);
/// assert_eq!(list.remove_front()?, 'a');
/// assert_eq!(*list.get_front()?, 'b');
/// # Ok::<(), adt_lists::Error>(())
/// ```
#[derive(Clone)]
pub struct FixedCapacityList<T, S = ArrayStore<T>> {
    /// Backing store, exclusively owned
    storage: S,

    /// Number of elements currently in the list
    /// Invariant: len <= storage.capacity()
    len: usize,

    _marker: PhantomData<T>,
}

/// A [`FixedCapacityList`] with inline storage and compile-time capacity.
///
/// ```
/// use adt_lists::{ListAdt, StaticFixedList};
///
/// let mut list = StaticFixedList::<u32, 2>::default();
/// list.add_back(1)?;
/// list.add_back(2)?;
/// assert!(list.add_back(3).unwrap_err().is_capacity_error());
/// # Ok::<(), adt_lists::Error>(())
/// ```
pub type StaticFixedList<T, const N: usize> = FixedCapacityList<T, InlineStore<T, N>>;

const VACANT_SLOT: Error = Error::storage_slot_vacant("Occupied slot holds no element");

impl<T> FixedCapacityList<T> {
    /// Creates an empty list with heap storage for `capacity` elements.
    ///
    /// A capacity of zero yields a list that is both empty and full.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_storage(ArrayStore::new(capacity))
    }

    /// Creates a list of the given capacity holding the items of `iter` in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `iter` yields more than `capacity`
    /// items.
    pub fn try_from_iter<I>(capacity: usize, iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new(capacity);
        list.fill_from(iter)?;
        Ok(list)
    }
}

impl<T, S: SlotStorage<T>> FixedCapacityList<T, S> {
    /// Creates an empty list over `storage`.
    ///
    /// Any element already held by the store is dropped.
    #[must_use]
    pub fn with_storage(mut storage: S) -> Self {
        for index in 0..storage.capacity() {
            drop(storage.take(index));
        }
        Self {
            storage,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the list holds `capacity` elements.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter {
            list:  self,
            front: 0,
            back:  self.len,
        }
    }

    /// Removes every element, leaving all slots vacant.
    ///
    /// # Time Complexity
    ///
    /// O(n) where n = len.
    pub fn clear(&mut self) {
        enter_span!(_span = crate::tracing::ListTrace::clearing(self.len));
        while self.len > 0 {
            self.len -= 1;
            drop(self.storage.take(self.len));
        }
    }

    /// Copies the elements into a `Vec`, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn element(&self, index: usize) -> Result<&T> {
        self.storage.get(index)?.ok_or(VACANT_SLOT)
    }

    fn fill_from<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            if self.is_full() {
                return Err(self.rejected(
                    "fill_from",
                    Error::input_exceeds_capacity("Input longer than list capacity"),
                ));
            }
            self.add_back(item)?;
        }
        Ok(())
    }

    #[inline]
    fn rejected(&self, operation: &'static str, error: Error) -> Error {
        trace_event!(
            debug,
            operation,
            len = self.len,
            capacity = self.capacity(),
            code = error.code,
            "list operation rejected"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = operation;
        error
    }
}

impl<T, const N: usize> Default for StaticFixedList<T, N> {
    fn default() -> Self {
        Self::with_storage(InlineStore::new())
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticFixedList<T, N> {
    type Error = Error;

    fn try_from(items: &[T]) -> Result<Self> {
        let mut list = Self::default();
        list.fill_from(items.iter().cloned())?;
        Ok(list)
    }
}

impl<T, S: SlotStorage<T>> ListAdt<T> for FixedCapacityList<T, S> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn is_empty(&self) -> bool {
        FixedCapacityList::is_empty(self)
    }

    #[inline]
    fn is_full(&self) -> bool {
        FixedCapacityList::is_full(self)
    }

    fn get_front(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(self.rejected("get_front", Error::empty_list_front("List is empty")));
        }
        self.element(0)
    }

    fn get_back(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(self.rejected("get_back", Error::empty_list_back("List is empty")));
        }
        self.element(self.len - 1)
    }

    fn get_index(&self, index: usize) -> Result<&T> {
        check_element_index(index, self.len).map_err(|e| self.rejected("get_index", e))?;
        self.element(index)
    }

    fn set_index(&mut self, index: usize, value: T) -> Result<T> {
        check_element_index(index, self.len).map_err(|e| self.rejected("set_index", e))?;
        self.storage.set(index, Some(value))?.ok_or(VACANT_SLOT)
    }

    /// Insert `value` at `index`, shifting `index..len` one slot right.
    ///
    /// The index is validated against `[0, len]` before the capacity check,
    /// and both happen before any slot is touched.
    fn add_index(&mut self, index: usize, value: T) -> Result<()> {
        check_inclusive_index(index, self.len).map_err(|e| self.rejected("add_index", e))?;
        check_has_space(self.len, self.capacity()).map_err(|e| self.rejected("add_index", e))?;

        enter_span!(_span = crate::tracing::ListTrace::shifting_right(index, self.len));
        // Highest slot first: slot + 1 is always vacant when written
        for slot in (index..self.len).rev() {
            let moved = self.storage.take(slot)?;
            let displaced = self.storage.set(slot + 1, moved)?;
            debug_assert!(displaced.is_none());
        }
        self.storage.set(index, Some(value))?;
        self.len += 1;
        Ok(())
    }

    fn add_back(&mut self, value: T) -> Result<()> {
        if self.len >= self.capacity() {
            return Err(self.rejected("add_back", Error::RAN_OUT_OF_SPACE));
        }
        self.storage.set(self.len, Some(value))?;
        self.len += 1;
        Ok(())
    }

    /// Remove the element at `index`, shifting `index + 1..len` one slot
    /// left. The trailing slot vacated by the shift is left `None`.
    fn remove_index(&mut self, index: usize) -> Result<T> {
        check_element_index(index, self.len).map_err(|e| self.rejected("remove_index", e))?;

        enter_span!(_span = crate::tracing::ListTrace::shifting_left(index, self.len));
        let removed = self.storage.take(index)?.ok_or(VACANT_SLOT)?;
        // Lowest slot first: slot - 1 is always vacant when written
        for slot in index + 1..self.len {
            let moved = self.storage.take(slot)?;
            let displaced = self.storage.set(slot - 1, moved)?;
            debug_assert!(displaced.is_none());
        }
        self.len -= 1;
        debug_assert!(matches!(self.storage.get(self.len), Ok(None)));
        Ok(removed)
    }

    fn remove_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(self.rejected("remove_back", Error::empty_list_back("List is empty")));
        }
        let last = self.len - 1;
        let removed = self.storage.take(last)?.ok_or(VACANT_SLOT)?;
        self.len = last;
        Ok(removed)
    }
}

impl<T: fmt::Debug, S: SlotStorage<T>> fmt::Debug for FixedCapacityList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality is by content; capacity and storage type are ignored
impl<T, U, S, S2> PartialEq<FixedCapacityList<U, S2>> for FixedCapacityList<T, S>
where
    T: PartialEq<U>,
    S: SlotStorage<T>,
    S2: SlotStorage<U>,
{
    fn eq(&self, other: &FixedCapacityList<U, S2>) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, S: SlotStorage<T>> Eq for FixedCapacityList<T, S> {}

impl<T, U, S> PartialEq<[U]> for FixedCapacityList<T, S>
where
    T: PartialEq<U>,
    S: SlotStorage<T>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, S, const M: usize> PartialEq<[U; M]> for FixedCapacityList<T, S>
where
    T: PartialEq<U>,
    S: SlotStorage<T>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        *self == other[..]
    }
}

impl<T: Hash, S: SlotStorage<T>> Hash for FixedCapacityList<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

/// Iterator over the elements of a [`FixedCapacityList`], front to back.
pub struct Iter<'a, T, S> {
    list:  &'a FixedCapacityList<T, S>,
    front: usize,
    back:  usize,
}

impl<'a, T, S: SlotStorage<T>> Iterator for Iter<'a, T, S> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let list = self.list;
        self.front += 1;
        list.storage.get(self.front - 1).ok().flatten()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, S: SlotStorage<T>> DoubleEndedIterator for Iter<'_, T, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let list = self.list;
        self.back -= 1;
        list.storage.get(self.back).ok().flatten()
    }
}

impl<T, S: SlotStorage<T>> ExactSizeIterator for Iter<'_, T, S> {}

impl<'a, T, S: SlotStorage<T>> IntoIterator for &'a FixedCapacityList<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
