// ADT - adt-lists
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collections.
//!
//! - [`FixedCapacityList`]: positional list over any [`SlotStorage`](crate::SlotStorage)
//! - [`StaticFixedList`]: the same list over inline storage, no heap

mod fixed_list;

pub use fixed_list::{FixedCapacityList, Iter, StaticFixedList};
