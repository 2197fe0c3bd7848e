//! The ordering trio and `PartialOrd` built from a single less-than.

mod common;

use std::cmp::Ordering;

use common::{GrowVec, SlotList};
use proptest::prelude::*;
use tola_container::prelude::*;

#[test]
fn test_proper_prefix_is_less() {
    let short = GrowVec::from(vec![1, 2, 3]);
    let long = GrowVec::from(vec![1, 2, 3, 4]);
    assert!(short.less_than(&long));
    assert!(short < long);
    assert!(long > short);
    assert!(short <= long && long >= short);
    assert!(!long.less_equal(&short));
}

#[test]
fn test_first_difference_decides() {
    let a: SlotList<i32> = [1, 9, 9].into_iter().collect();
    let b: SlotList<i32> = [2].into_iter().collect();
    assert!(a < b);
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
}

#[test]
fn test_equal_contents() {
    let a: SlotList<i32> = (0..4).collect();
    let mut b: SlotList<i32> = (1..4).collect();
    b.push_front(0);
    assert_eq!(a, b);
    assert!(a.less_equal(&b) && a.greater_equal(&b));
    assert!(!a.greater_than(&b));
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
}

#[test]
fn test_empty_is_least() {
    let empty: GrowVec<i32> = GrowVec::new();
    let one = GrowVec::from(vec![i32::MIN]);
    assert!(empty < one);
    assert!(!(empty < empty.clone()));
}

#[test]
fn test_unordered_elements_stay_unordered() {
    let nan = GrowVec::from(vec![f64::NAN]);
    let one = GrowVec::from(vec![1.0]);
    assert!(nan != one);
    assert_eq!(nan.partial_cmp(&one), None);
    assert_eq!(one.partial_cmp(&nan), None);
    assert!(!(nan < one) && !(nan > one));
    assert!(!(nan <= one) && !(nan >= one));
    assert_eq!(nan.partial_cmp(&nan), None);

    let a = GrowVec::from(vec![0.5, f64::NAN]);
    let b = GrowVec::from(vec![1.5, f64::NAN]);
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
}

proptest! {
    #[test]
    fn prop_matches_slice_order(a in prop::collection::vec(-3i32..3, 0..6), b in prop::collection::vec(-3i32..3, 0..6)) {
        let (ga, gb) = (GrowVec::from(a.clone()), GrowVec::from(b.clone()));
        prop_assert_eq!(ga.less_than(&gb), a < b);
        prop_assert_eq!(ga == gb, a == b);
        prop_assert_eq!(ga.partial_cmp(&gb), Some(a.cmp(&b)));
    }

    #[test]
    fn prop_trichotomy(a in prop::collection::vec(0u8..4, 0..5), b in prop::collection::vec(0u8..4, 0..5)) {
        let (la, lb): (SlotList<u8>, SlotList<u8>) = (a.into_iter().collect(), b.into_iter().collect());
        let outcomes = [la < lb, lb < la, la == lb];
        prop_assert_eq!(outcomes.iter().filter(|&&held| held).count(), 1);
    }

    #[test]
    fn prop_trio_identities(a in prop::collection::vec(any::<i16>(), 0..5), b in prop::collection::vec(any::<i16>(), 0..5)) {
        let (ga, gb) = (GrowVec::from(a), GrowVec::from(b));
        prop_assert_eq!(ga.greater_than(&gb), gb.less_than(&ga));
        prop_assert_eq!(ga.less_equal(&gb), !gb.less_than(&ga));
        prop_assert_eq!(ga.greater_equal(&gb), !ga.less_than(&gb));
        prop_assert_eq!(ga > gb, ga.greater_than(&gb));
        prop_assert_eq!(ga <= gb, ga.less_equal(&gb));
    }
}
