//! A singly linked list gets a standard surface from five primitives.
//!
//! The list only walks forward, so everything that steps back from the end
//! (`back`, `pop_back`, `rbegin`) is absent, while the front-side operations,
//! positional insert/erase, bulk assignment and the ordering trio are
//! derived.

use tola_container::prelude::*;
use tola_container::profile;

#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Arena-backed singly linked list. Freed slots are reused.
#[derive(Debug, Container)]
#[container(eq, lexicographic, ord, iter, teardown)]
struct ForwardList<T> {
    slots: Vec<Option<Node<T>>>,
    head: Option<usize>,
    free: Vec<usize>,
}

/// `None` is one past the last node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link(Option<usize>);

impl<T> ForwardList<T> {
    fn new() -> Self {
        Self { slots: Vec::new(), head: None, free: Vec::new() }
    }

    fn node(&self, slot: usize) -> &Node<T> {
        self.slots[slot].as_ref().expect("cursor points at a freed slot")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        self.slots[slot].as_mut().expect("cursor points at a freed slot")
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Some(Node { value, next });
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = node;
                slot
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    /// The slot whose `next` is `target`, or `None` when `target` is the head.
    fn predecessor(&self, target: Option<usize>) -> Option<usize> {
        let mut at = self.head?;
        if Some(at) == target {
            return None;
        }
        loop {
            let next = self.node(at).next;
            if next == target {
                return Some(at);
            }
            at = next?;
        }
    }

    fn relink(&mut self, before: Option<usize>, to: Option<usize>) {
        match before {
            Some(slot) => self.node_mut(slot).next = to,
            None => self.head = to,
        }
    }
}

impl<T> Cursor<ForwardList<T>> for Link {
    type Category = ForwardTag;

    fn advance(&mut self, seq: &ForwardList<T>) {
        self.0 = self.0.and_then(|slot| seq.node(slot).next);
    }

    fn get<'a>(&self, seq: &'a ForwardList<T>) -> &'a T {
        let slot = self.0.expect("dereferenced the end of a ForwardList");
        &seq.node(slot).value
    }
}

impl<T> CursorMut<ForwardList<T>> for Link {
    fn get_mut<'a>(&self, seq: &'a mut ForwardList<T>) -> &'a mut T {
        let slot = self.0.expect("dereferenced the end of a ForwardList");
        &mut seq.node_mut(slot).value
    }
}

impl<T> Sequence for ForwardList<T> {
    type Item = T;
    type Cursor = Link;
    type Sentinel = Link;
    type ConstCursor = Link;
    type ConstSentinel = Link;

    fn begin(&self) -> Link {
        Link(self.head)
    }

    fn end(&self) -> Link {
        Link(None)
    }
}

impl<T> EmplaceFront for ForwardList<T> {
    fn emplace_front(&mut self, value: T) {
        let slot = self.alloc(value, self.head);
        self.head = Some(slot);
    }
}

impl<T> EraseRange for ForwardList<T> {
    fn erase_range(&mut self, first: Link, last: Link) -> Link {
        let before = self.predecessor(first.0);
        let mut at = first.0;
        while at != last.0 {
            let Some(slot) = at else { break };
            at = self.node(slot).next;
            self.slots[slot] = None;
            self.free.push(slot);
        }
        self.relink(before, last.0);
        last
    }
}

impl<T> InsertRange for ForwardList<T> {
    fn insert_range<I>(&mut self, pos: Link, items: I) -> Link
    where
        I: IntoIterator<Item = T>,
    {
        let mut before = self.predecessor(pos.0);
        let mut first = None;
        for value in items {
            let slot = self.alloc(value, pos.0);
            self.relink(before, Some(slot));
            first.get_or_insert(slot);
            before = Some(slot);
        }
        Link(first.or(pos.0))
    }
}

impl<T> Clear for ForwardList<T> {
    fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
    }
}

fn show<T: std::fmt::Debug>(label: &str, list: &ForwardList<T>) {
    let items: Vec<_> = list.iter().collect();
    println!("{label:<18} {items:?} (len {})", list.len());
}

fn main() {
    println!("--- ForwardList: derived surface ---\n");
    println!("{}\n", profile!(ForwardList<i32>));

    let mut list: ForwardList<i32> = ForwardList::new();
    for n in [3, 2, 1] {
        list.push_front(n);
    }
    show("push_front x3", &list);
    assert_eq!(*list.front(), 1);

    let third = list.cbegin().next(&list).next(&list);
    list.insert_n(third, 2, 0);
    show("insert_n(2, 0)", &list);

    list.pop_front();
    show("pop_front", &list);

    let second = list.cbegin().next(&list);
    list.erase(second);
    show("erase(second)", &list);

    let mut other: ForwardList<i32> = ForwardList::new();
    other.assign([2, 0, 3]);
    show("other.assign", &other);
    assert!(list == other);

    other.assign_n(2, 9);
    show("other.assign_n", &other);
    assert!(list < other);
    assert!(other.greater_equal(&list));

    assert!(!offers!(ForwardList<i32>: back | pop_back | rbegin));
    println!("\nback/pop_back/rbegin are not available on a forward list.");
}
