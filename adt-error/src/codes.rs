// ADT - adt-error
// Module: List Error Codes
// SW-REQ-ID: REQ_LIST_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for the list ADTs

// Empty error codes (1000-1099)
/// Positional access on an empty list
pub const EMPTY_LIST: u16 = 1000;
/// Front access on an empty list
pub const EMPTY_LIST_FRONT: u16 = 1001;
/// Back access on an empty list
pub const EMPTY_LIST_BACK: u16 = 1002;

// Index error codes (2000-2099)
/// Index outside the valid range of the operation
pub const BAD_INDEX: u16 = 2000;
/// Index outside the exclusive range `[0, count)`
pub const BAD_INDEX_EXCLUSIVE: u16 = 2001;
/// Index outside the inclusive range `[0, count]`
pub const BAD_INDEX_INCLUSIVE: u16 = 2002;

// Capacity error codes (3000-3099)
/// Insertion into a full list
pub const RAN_OUT_OF_SPACE: u16 = 3000;

// Storage error codes (4000-4099)
/// Slot access outside the backing store
pub const STORAGE_OUT_OF_BOUNDS: u16 = 4000;
/// Occupied slot found empty (broken prefix invariant)
pub const STORAGE_SLOT_VACANT: u16 = 4001;

// Validation error codes (5000-5099)
/// Input larger than the target capacity
pub const INPUT_EXCEEDS_CAPACITY: u16 = 5000;

/// Lower bound of the empty error code range
pub const EMPTY_RANGE_START: u16 = 1000;
/// Lower bound of the index error code range
pub const INDEX_RANGE_START: u16 = 2000;
/// Lower bound of the capacity error code range
pub const CAPACITY_RANGE_START: u16 = 3000;
/// Lower bound of the storage error code range
pub const STORAGE_RANGE_START: u16 = 4000;
/// Lower bound of the validation error code range
pub const VALIDATION_RANGE_START: u16 = 5000;
/// Width of every category code range
pub const RANGE_WIDTH: u16 = 100;
