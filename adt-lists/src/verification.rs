// ADT - adt-lists
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! KANI proof harnesses for the shifting operations.

use crate::prelude::*;

#[kani::proof]
#[kani::unwind(6)]
fn verify_add_index_places_value() {
    let mut list = StaticFixedList::<u8, 4>::default();
    let len: usize = kani::any();
    kani::assume(len < 4);
    for i in 0..len {
        assert!(list.add_back(i as u8).is_ok());
    }

    let index: usize = kani::any();
    kani::assume(index <= len);
    assert!(list.add_index(index, 0xFF).is_ok());

    assert!(list.len() == len + 1);
    assert!(matches!(list.get_index(index), Ok(&0xFF)));
    if index < len {
        assert!(matches!(list.get_index(index + 1), Ok(v) if *v == index as u8));
    }
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_index_closes_gap() {
    let mut list = StaticFixedList::<u8, 4>::default();
    for i in 0..4 {
        assert!(list.add_back(i).is_ok());
    }

    let index: usize = kani::any();
    kani::assume(index < 4);
    assert!(matches!(list.remove_index(index), Ok(v) if v as usize == index));
    assert!(list.len() == 3);

    for i in index..3 {
        assert!(matches!(list.get_index(i), Ok(v) if *v as usize == i + 1));
    }
}

#[kani::proof]
#[kani::unwind(6)]
fn verify_full_insert_is_rejected_unchanged() {
    let mut list = StaticFixedList::<u8, 3>::default();
    for i in 0..3 {
        assert!(list.add_back(i).is_ok());
    }

    let index: usize = kani::any();
    kani::assume(index <= 3);
    assert!(list.add_index(index, 9).is_err());
    assert!(list.len() == 3);
    assert!(list == [0, 1, 2]);
}
