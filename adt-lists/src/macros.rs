// ADT - adt-lists
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Internal logging macros.
//!
//! Each macro forwards to the `tracing` crate when the `tracing` feature is
//! enabled and expands to nothing otherwise.

/// Emit a tracing event at the given level.
///
/// `trace_event!(debug, index, count, "message")`
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)*);
        }
    };
}

/// Enter a span for the rest of the enclosing block.
macro_rules! enter_span {
    ($guard:ident = $span:expr) => {
        #[cfg(feature = "tracing")]
        let $guard = $span.entered();
    };
}
