//! Candidate types shared by the integration tests.
//!
//! | Candidate | Cursor category | Pair | Primitives |
//! |-----------|-----------------|------|------------|
//! | `GrowVec<T>` | contiguous | common | all eight |
//! | `SlotList<T>` | bidirectional | common | front/back/positional emplace, range erase, clear |
//! | `Stack<T>` | forward | sentinel | front emplace, range erase, clear |
//! | `PushOnly<T>` | bidirectional | common | front/back emplace |
//! | `Window<T>` | random access | sentinel | none |

#![allow(dead_code)]

use std::collections::VecDeque;

use tola_container::prelude::*;

// =============================================================================
// GrowVec: contiguous, everything
// =============================================================================

#[derive(Debug, Clone, Default, Container)]
#[container(index, eq, lexicographic, ord, iter, extend)]
pub struct GrowVec<T> {
    items: Vec<T>,
}

impl<T> GrowVec<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Index position into a `GrowVec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idx(pub usize);

impl<T> Cursor<GrowVec<T>> for Idx {
    type Category = ContiguousTag;

    fn advance(&mut self, _: &GrowVec<T>) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a GrowVec<T>) -> &'a T {
        &seq.items[self.0]
    }
}

impl<T> CursorMut<GrowVec<T>> for Idx {
    fn get_mut<'a>(&self, seq: &'a mut GrowVec<T>) -> &'a mut T {
        &mut seq.items[self.0]
    }
}

impl<T> BidirectionalCursor<GrowVec<T>> for Idx {
    fn retreat(&mut self, _: &GrowVec<T>) {
        self.0 -= 1;
    }
}

impl<T> RandomAccessCursor<GrowVec<T>> for Idx {
    fn offset(&mut self, n: isize) {
        self.0 = self.0.wrapping_add_signed(n);
    }

    fn distance(&self, from: &Self) -> isize {
        self.0 as isize - from.0 as isize
    }
}

impl<T> ContiguousCursor<GrowVec<T>> for Idx {
    fn as_slice<'a>(&self, end: &Self, seq: &'a GrowVec<T>) -> &'a [T] {
        &seq.items[self.0..end.0]
    }

    fn as_mut_slice<'a>(&self, end: &Self, seq: &'a mut GrowVec<T>) -> &'a mut [T] {
        &mut seq.items[self.0..end.0]
    }
}

impl<T> Sequence for GrowVec<T> {
    type Item = T;
    type Cursor = Idx;
    type Sentinel = Idx;
    type ConstCursor = Idx;
    type ConstSentinel = Idx;

    fn begin(&self) -> Idx {
        Idx(0)
    }

    fn end(&self) -> Idx {
        Idx(self.items.len())
    }
}

impl<T> EmplaceFront for GrowVec<T> {
    fn emplace_front(&mut self, value: T) {
        self.items.insert(0, value);
    }
}

impl<T> EmplaceBack for GrowVec<T> {
    fn emplace_back(&mut self, value: T) {
        self.items.push(value);
    }
}

impl<T> Emplace for GrowVec<T> {
    fn emplace(&mut self, pos: Idx, value: T) -> Idx {
        self.items.insert(pos.0, value);
        pos
    }
}

impl<T> EraseRange for GrowVec<T> {
    fn erase_range(&mut self, first: Idx, last: Idx) -> Idx {
        self.items.drain(first.0..last.0);
        first
    }
}

impl<T> InsertRange for GrowVec<T> {
    fn insert_range<I>(&mut self, pos: Idx, items: I) -> Idx
    where
        I: IntoIterator<Item = T>,
    {
        drop(self.items.splice(pos.0..pos.0, items));
        pos
    }
}

impl<T> Clear for GrowVec<T> {
    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Resize for GrowVec<T> {
    fn resize(&mut self, n: usize, value: T) {
        self.items.resize(n, value);
    }
}

tola_container::register!(GrowVec<i32>);

// =============================================================================
// SlotList: arena-backed doubly linked list
// =============================================================================

#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// Slot 0 is the end marker; the list is circular through it.
#[derive(Debug, Container)]
#[container(eq, lexicographic, ord, iter, extend)]
pub struct SlotList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
}

impl<T> SlotList<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node { value: None, prev: 0, next: 0 }],
            free: Vec::new(),
        }
    }

    /// Slots in use, end marker included.
    pub fn live_slots(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    fn link_before(&mut self, at: usize, value: T) -> usize {
        let prev = self.nodes[at].prev;
        let node = Node { value: Some(value), prev, next: at };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[prev].next = slot;
        self.nodes[at].prev = slot;
        slot
    }

    fn unlink(&mut self, slot: usize) -> usize {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[slot].value = None;
        self.free.push(slot);
        next
    }
}

impl<T> Default for SlotList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SlotList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Arena slot of a `SlotList` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link(usize);

impl<T> Cursor<SlotList<T>> for Link {
    type Category = BidirectionalTag;

    fn advance(&mut self, seq: &SlotList<T>) {
        self.0 = seq.nodes[self.0].next;
    }

    fn get<'a>(&self, seq: &'a SlotList<T>) -> &'a T {
        seq.nodes[self.0].value.as_ref().expect("dereferenced the end of a SlotList")
    }
}

impl<T> CursorMut<SlotList<T>> for Link {
    fn get_mut<'a>(&self, seq: &'a mut SlotList<T>) -> &'a mut T {
        seq.nodes[self.0].value.as_mut().expect("dereferenced the end of a SlotList")
    }
}

impl<T> BidirectionalCursor<SlotList<T>> for Link {
    fn retreat(&mut self, seq: &SlotList<T>) {
        self.0 = seq.nodes[self.0].prev;
    }
}

impl<T> Sequence for SlotList<T> {
    type Item = T;
    type Cursor = Link;
    type Sentinel = Link;
    type ConstCursor = Link;
    type ConstSentinel = Link;

    fn begin(&self) -> Link {
        Link(self.nodes[0].next)
    }

    fn end(&self) -> Link {
        Link(0)
    }
}

impl<T> EmplaceFront for SlotList<T> {
    fn emplace_front(&mut self, value: T) {
        let first = self.nodes[0].next;
        self.link_before(first, value);
    }
}

impl<T> EmplaceBack for SlotList<T> {
    fn emplace_back(&mut self, value: T) {
        self.link_before(0, value);
    }
}

impl<T> Emplace for SlotList<T> {
    fn emplace(&mut self, pos: Link, value: T) -> Link {
        Link(self.link_before(pos.0, value))
    }
}

impl<T> EraseRange for SlotList<T> {
    fn erase_range(&mut self, first: Link, last: Link) -> Link {
        let mut at = first.0;
        while at != last.0 {
            at = self.unlink(at);
        }
        last
    }
}

impl<T> Clear for SlotList<T> {
    fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0].prev = 0;
        self.nodes[0].next = 0;
        self.free.clear();
    }
}

tola_container::register!(SlotList<i32>);

// =============================================================================
// Stack: forward cursor, sentinel end
// =============================================================================

/// Top of the stack is the last vector element; traversal runs top-down.
#[derive(Debug, Default, Container)]
#[container(eq, iter, teardown)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

/// Number of elements at or below the designated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth(usize);

/// The bottom of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bottom;

impl PartialEq<Bottom> for Depth {
    fn eq(&self, _: &Bottom) -> bool {
        self.0 == 0
    }
}

impl<T> Cursor<Stack<T>> for Depth {
    type Category = ForwardTag;

    fn advance(&mut self, _: &Stack<T>) {
        self.0 -= 1;
    }

    fn get<'a>(&self, seq: &'a Stack<T>) -> &'a T {
        &seq.items[self.0 - 1]
    }
}

impl<T> CursorMut<Stack<T>> for Depth {
    fn get_mut<'a>(&self, seq: &'a mut Stack<T>) -> &'a mut T {
        &mut seq.items[self.0 - 1]
    }
}

impl<T> Sequence for Stack<T> {
    type Item = T;
    type Cursor = Depth;
    type Sentinel = Bottom;
    type ConstCursor = Depth;
    type ConstSentinel = Bottom;

    fn begin(&self) -> Depth {
        Depth(self.items.len())
    }

    fn end(&self) -> Bottom {
        Bottom
    }
}

impl<T> EmplaceFront for Stack<T> {
    fn emplace_front(&mut self, value: T) {
        self.items.push(value);
    }
}

impl<T> EraseRange for Stack<T> {
    fn erase_range(&mut self, first: Depth, last: Depth) -> Depth {
        self.items.drain(last.0..first.0);
        last
    }
}

impl<T> Clear for Stack<T> {
    fn clear(&mut self) {
        self.items.clear();
    }
}

tola_container::register!(Stack<i32>);

// =============================================================================
// PushOnly: grows at both ends, never shrinks
// =============================================================================

#[derive(Debug, Default, Container)]
#[container(eq, iter)]
pub struct PushOnly<T> {
    items: VecDeque<T>,
}

impl<T> PushOnly<T> {
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(usize);

impl<T> Cursor<PushOnly<T>> for Slot {
    type Category = BidirectionalTag;

    fn advance(&mut self, _: &PushOnly<T>) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a PushOnly<T>) -> &'a T {
        &seq.items[self.0]
    }
}

impl<T> CursorMut<PushOnly<T>> for Slot {
    fn get_mut<'a>(&self, seq: &'a mut PushOnly<T>) -> &'a mut T {
        &mut seq.items[self.0]
    }
}

impl<T> BidirectionalCursor<PushOnly<T>> for Slot {
    fn retreat(&mut self, _: &PushOnly<T>) {
        self.0 -= 1;
    }
}

impl<T> Sequence for PushOnly<T> {
    type Item = T;
    type Cursor = Slot;
    type Sentinel = Slot;
    type ConstCursor = Slot;
    type ConstSentinel = Slot;

    fn begin(&self) -> Slot {
        Slot(0)
    }

    fn end(&self) -> Slot {
        Slot(self.items.len())
    }
}

impl<T> EmplaceFront for PushOnly<T> {
    fn emplace_front(&mut self, value: T) {
        self.items.push_front(value);
    }
}

impl<T> EmplaceBack for PushOnly<T> {
    fn emplace_back(&mut self, value: T) {
        self.items.push_back(value);
    }
}

tola_container::register!(PushOnly<i32>);

// =============================================================================
// Window: random-access cursor, sentinel end
// =============================================================================

/// Exposes only the first `limit` stored elements.
#[derive(Debug, Default, Container)]
#[container(iter)]
pub struct Window<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> Window<T> {
    pub fn new(items: Vec<T>, limit: usize) -> Self {
        assert!(limit <= items.len());
        Self { items, limit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Off(pub usize);

/// First hidden position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(pub usize);

impl PartialEq<Limit> for Off {
    fn eq(&self, limit: &Limit) -> bool {
        self.0 >= limit.0
    }
}

impl<T> Cursor<Window<T>> for Off {
    type Category = RandomAccessTag;

    fn advance(&mut self, _: &Window<T>) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a Window<T>) -> &'a T {
        &seq.items[self.0]
    }
}

impl<T> CursorMut<Window<T>> for Off {
    fn get_mut<'a>(&self, seq: &'a mut Window<T>) -> &'a mut T {
        &mut seq.items[self.0]
    }
}

impl<T> BidirectionalCursor<Window<T>> for Off {
    fn retreat(&mut self, _: &Window<T>) {
        self.0 -= 1;
    }
}

impl<T> RandomAccessCursor<Window<T>> for Off {
    fn offset(&mut self, n: isize) {
        self.0 = self.0.wrapping_add_signed(n);
    }

    fn distance(&self, from: &Self) -> isize {
        self.0 as isize - from.0 as isize
    }
}

impl<T> Sequence for Window<T> {
    type Item = T;
    type Cursor = Off;
    type Sentinel = Limit;
    type ConstCursor = Off;
    type ConstSentinel = Limit;

    fn begin(&self) -> Off {
        Off(0)
    }

    fn end(&self) -> Limit {
        Limit(self.limit)
    }
}

tola_container::register!(Window<i32>);
