// ADT - adt-lists
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for the list ADTs
//!
//! This module provides structured tracing that works in both std and
//! `no_std` environments. It wraps the `tracing` crate and provides
//! list-specific span constructors for the shifting operations.

pub use tracing::{debug, error, info, trace, warn};
pub use tracing::{debug_span, trace_span, Level, Span};

/// Spans for list operations
#[derive(Debug, Clone)]
pub struct ListTrace;

impl ListTrace {
    /// Create a span for a right shift opening a gap at `index`
    #[inline]
    #[must_use]
    pub fn shifting_right(index: usize, count: usize) -> Span {
        trace_span!("list_shift_right", index = %index, count = %count)
    }

    /// Create a span for a left shift closing the gap at `index`
    #[inline]
    #[must_use]
    pub fn shifting_left(index: usize, count: usize) -> Span {
        trace_span!("list_shift_left", index = %index, count = %count)
    }

    /// Create a span for clearing every occupied slot
    #[inline]
    #[must_use]
    pub fn clearing(count: usize) -> Span {
        debug_span!("list_clear", count = %count)
    }
}
