//! Integration tests for the positional list operations

use adt_lists::codes;
use adt_lists::prelude::*;

fn list_of(capacity: usize, items: &[i32]) -> FixedCapacityList<i32> {
    FixedCapacityList::try_from_iter(capacity, items.iter().copied()).unwrap()
}

#[test]
fn test_capacity_three_scenario() {
    let mut list = FixedCapacityList::new(3);
    list.add_back(1).unwrap();
    list.add_back(2).unwrap();
    list.add_back(3).unwrap();
    assert_eq!(list.size(), 3);
    assert!(list.is_full());

    let err = list.add_index(3, 4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert_eq!(list, [1, 2, 3]);

    assert_eq!(list.remove_index(1).unwrap(), 2);
    assert_eq!(list, [1, 3]);
    assert_eq!(list.size(), 2);

    list.add_front(9).unwrap();
    assert_eq!(list, [9, 1, 3]);
    assert_eq!(*list.get_back().unwrap(), 3);
}

#[test]
fn test_capacity_zero_scenario() {
    let mut list: FixedCapacityList<&str> = FixedCapacityList::new(0);
    assert!(list.is_empty());
    assert!(list.is_full());
    assert_eq!(list.add_back("x").unwrap_err().kind(), ErrorKind::Capacity);
    assert_eq!(list.get_front().unwrap_err().kind(), ErrorKind::Empty);
}

#[test]
fn test_front_and_back_access() {
    let mut list = list_of(4, &[5, 6, 7]);
    assert_eq!(*list.get_front().unwrap(), 5);
    assert_eq!(*list.get_back().unwrap(), 7);

    assert_eq!(list.remove_front().unwrap(), 5);
    assert_eq!(list.remove_back().unwrap(), 7);
    assert_eq!(*list.get_front().unwrap(), 6);
    assert_eq!(*list.get_back().unwrap(), 6);

    assert_eq!(list.remove_back().unwrap(), 6);
    assert!(list.is_empty());
    assert_eq!(list.get_back().unwrap_err().kind(), ErrorKind::Empty);
}

#[test]
fn test_failed_insert_leaves_list_unchanged() {
    let mut list = list_of(3, &[1, 2, 3]);
    for index in 0..=3 {
        assert!(list.add_index(index, 0).unwrap_err().is_capacity_error());
    }
    assert!(list.add_front(0).unwrap_err().is_capacity_error());
    assert!(list.add_back(0).unwrap_err().is_capacity_error());
    assert_eq!(list.size(), 3);
    assert_eq!(list, [1, 2, 3]);
}

#[test]
fn test_error_codes_distinguish_front_and_back() {
    let list: FixedCapacityList<i32> = FixedCapacityList::new(1);
    assert_eq!(list.get_front().unwrap_err().code, codes::EMPTY_LIST_FRONT);
    assert_eq!(list.get_back().unwrap_err().code, codes::EMPTY_LIST_BACK);
    assert_eq!(list.get_index(0).unwrap_err().code, codes::EMPTY_LIST);
}

#[test]
fn test_insert_index_range_is_inclusive() {
    let mut list = list_of(5, &[1, 2]);
    assert_eq!(list.add_index(3, 0).unwrap_err().code, codes::BAD_INDEX_INCLUSIVE);
    list.add_index(2, 3).unwrap();
    assert_eq!(list, [1, 2, 3]);
    assert_eq!(list.get_index(3).unwrap_err().code, codes::BAD_INDEX_EXCLUSIVE);
}

#[test]
fn test_owned_elements_move_through_shifts() {
    let mut list = FixedCapacityList::new(4);
    list.add_back(String::from("b")).unwrap();
    list.add_back(String::from("d")).unwrap();
    list.add_front(String::from("a")).unwrap();
    list.add_index(2, String::from("c")).unwrap();
    assert_eq!(list, ["a", "b", "c", "d"]);

    assert_eq!(list.remove_index(1).unwrap(), "b");
    let old = list.set_index(0, String::from("z")).unwrap();
    assert_eq!(old, "a");
    assert_eq!(list.to_vec(), vec!["z", "c", "d"]);
}

#[test]
fn test_static_and_heap_lists_share_contract() {
    fn exercise<L: ListAdt<u16>>(list: &mut L) -> Result<u16> {
        list.add_back(2)?;
        list.add_front(1)?;
        list.add_index(2, 3)?;
        list.remove_index(1)
    }

    let mut heap = FixedCapacityList::new(3);
    let mut inline = StaticFixedList::<u16, 3>::default();
    assert_eq!(exercise(&mut heap).unwrap(), 2);
    assert_eq!(exercise(&mut inline).unwrap(), 2);
    assert_eq!(heap, inline);
    assert_eq!(heap, [1, 3]);
}

#[test]
fn test_debug_and_clone() {
    let list = list_of(4, &[1, 2]);
    let copy = list.clone();
    assert_eq!(format!("{:?}", copy), "[1, 2]");
    assert_eq!(copy.capacity(), 4);
    assert_eq!(list, copy);
}

#[test]
fn test_hash_follows_content() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let small = list_of(2, &[1, 2]);
    let large = list_of(9, &[1, 2]);
    assert_eq!(hash_of(&small), hash_of(&large));
    assert_ne!(hash_of(&small), hash_of(&list_of(2, &[2, 1])));
}

#[test]
fn test_errors_display_category() {
    let mut list = list_of(1, &[1]);
    let err = list.add_back(2).unwrap_err();
    assert!(err.to_string().starts_with("[Capacity]"));
}
