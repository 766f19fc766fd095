// ADT - adt-lists
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for adt-lists
//!
//! Re-exports the list types, the list contract and the error types so a
//! single glob import is enough to use any list.

pub use adt_error::{Error, ErrorCategory, ErrorKind};

pub use crate::collections::{FixedCapacityList, StaticFixedList};
pub use crate::storage::{ArrayStore, InlineStore, SlotStorage};
pub use crate::traits::ListAdt;
pub use crate::Result;
