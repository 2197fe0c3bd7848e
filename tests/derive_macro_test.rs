//! `#[derive(Container)]` and its `#[container(...)]` options.

use tola_container::caps::CapabilitySet;
use tola_container::cursor::Category;
use tola_container::prelude::*;
use tola_container::rules::{DerivedOp, OperationSet};
use tola_container::{capabilities, classify};

// =============================================================================
// Non-generic candidate with derived `Clear` and registration
// =============================================================================

/// Random-access but deliberately not contiguous.
#[derive(Debug, Default, Container)]
#[container(index, eq, clear, iter, extend, register)]
struct Bytes {
    raw: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pos(usize);

impl Cursor<Bytes> for Pos {
    type Category = RandomAccessTag;

    fn advance(&mut self, _: &Bytes) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a Bytes) -> &'a u8 {
        &seq.raw[self.0]
    }
}

impl CursorMut<Bytes> for Pos {
    fn get_mut<'a>(&self, seq: &'a mut Bytes) -> &'a mut u8 {
        &mut seq.raw[self.0]
    }
}

impl BidirectionalCursor<Bytes> for Pos {
    fn retreat(&mut self, _: &Bytes) {
        self.0 -= 1;
    }
}

impl RandomAccessCursor<Bytes> for Pos {
    fn offset(&mut self, n: isize) {
        self.0 = self.0.wrapping_add_signed(n);
    }

    fn distance(&self, from: &Self) -> isize {
        self.0 as isize - from.0 as isize
    }
}

impl Sequence for Bytes {
    type Item = u8;
    type Cursor = Pos;
    type Sentinel = Pos;
    type ConstCursor = Pos;
    type ConstSentinel = Pos;

    fn begin(&self) -> Pos {
        Pos(0)
    }

    fn end(&self) -> Pos {
        Pos(self.raw.len())
    }
}

impl EmplaceBack for Bytes {
    fn emplace_back(&mut self, value: u8) {
        self.raw.push(value);
    }
}

impl EraseRange for Bytes {
    fn erase_range(&mut self, first: Pos, last: Pos) -> Pos {
        self.raw.drain(first.0..last.0);
        first
    }
}

impl InsertRange for Bytes {
    fn insert_range<I>(&mut self, pos: Pos, items: I) -> Pos
    where
        I: IntoIterator<Item = u8>,
    {
        drop(self.raw.splice(pos.0..pos.0, items));
        pos
    }
}

#[test]
fn test_derived_clear_is_a_capability() {
    assert!(capabilities!(Bytes).contains(CapabilitySet::CLEAR | CapabilitySet::INSERT_RANGE));
    assert!(<Bytes as Registered>::offers(DerivedOp::Assign));
    assert!(<Bytes as Registered>::OFFERED.contains(OperationSet::TEARDOWN));

    let mut b = Bytes::default();
    b.extend(*b"hello");
    b.clear();
    assert!(b.is_empty());
    b.assign(*b"abc");
    assert_eq!(b.iter().copied().collect::<Vec<_>>(), b"abc");
}

#[test]
fn test_random_access_without_contiguity() {
    assert_eq!(classify!(Bytes, Pos), Category::RandomAccess);
    assert!(offers!(Bytes: nth & at & len & !data & !as_slice));

    let mut b = Bytes::default();
    b.extend([1, 2, 3]);
    assert_eq!(b.len(), 3);
    assert_eq!(b[1], 2);
    b[1] = 20;
    assert_eq!(b.at(1), Ok(&20));
    assert!(b.at(3).is_err());
}

#[test]
fn test_derived_eq_and_iter() {
    let (mut a, mut b) = (Bytes::default(), Bytes::default());
    assert_eq!(a, b);
    a.extend([1, 2]);
    assert_ne!(a, b);
    b.push_back(1);
    b.push_back(2);
    assert_eq!(a, b);
    assert_eq!((&a).into_iter().sum::<u8>(), 3);
}

#[test]
fn test_registered_profile() {
    let profile = <Bytes as Registered>::PROFILE;
    assert_eq!(profile.shared.category, Category::RandomAccess);
    assert!(profile.shared.common);
    assert_eq!(
        profile.capabilities,
        CapabilitySet::EMPLACE_BACK
            | CapabilitySet::ERASE_RANGE
            | CapabilitySet::INSERT_RANGE
            | CapabilitySet::CLEAR
    );
}

// =============================================================================
// Generic candidate whose `Sequence` impl is more constrained than the type
// =============================================================================

#[derive(Debug, Container)]
#[container(eq, lexicographic, ord, iter)]
struct Pairs<T> {
    items: Vec<(T, T)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PairPos(usize);

impl<T: Copy> Cursor<Pairs<T>> for PairPos {
    type Category = ForwardTag;

    fn advance(&mut self, _: &Pairs<T>) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a Pairs<T>) -> &'a (T, T) {
        &seq.items[self.0]
    }
}

impl<T: Copy> CursorMut<Pairs<T>> for PairPos {
    fn get_mut<'a>(&self, seq: &'a mut Pairs<T>) -> &'a mut (T, T) {
        &mut seq.items[self.0]
    }
}

impl<T: Copy> Sequence for Pairs<T> {
    type Item = (T, T);
    type Cursor = PairPos;
    type Sentinel = PairPos;
    type ConstCursor = PairPos;
    type ConstSentinel = PairPos;

    fn begin(&self) -> PairPos {
        PairPos(0)
    }

    fn end(&self) -> PairPos {
        PairPos(self.items.len())
    }
}

#[test]
fn test_generic_with_bounded_sequence() {
    let a = Pairs { items: vec![(1, 2), (3, 4)] };
    let b = Pairs { items: vec![(1, 2), (3, 5)] };
    assert!(a < b);
    assert_ne!(a, b);
    assert_eq!(a.len(), 2);
    assert_eq!(*a.front(), (1, 2));
    assert_eq!((&a).into_iter().count(), 2);
    assert!(!offers!(Pairs<u8>: back & push_back));
}
