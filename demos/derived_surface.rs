//! A ring-buffer deque supplies seven primitives and a random-access cursor;
//! everything else below is derived.

use std::collections::VecDeque;

use tola_container::prelude::*;

#[derive(Debug, Default, Container)]
#[container(index, eq, lexicographic, ord, iter, extend, register)]
struct Deque {
    ring: VecDeque<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pos(usize);

impl Cursor<Deque> for Pos {
    type Category = RandomAccessTag;

    fn advance(&mut self, _: &Deque) {
        self.0 += 1;
    }

    fn get<'a>(&self, seq: &'a Deque) -> &'a i64 {
        &seq.ring[self.0]
    }
}

impl CursorMut<Deque> for Pos {
    fn get_mut<'a>(&self, seq: &'a mut Deque) -> &'a mut i64 {
        &mut seq.ring[self.0]
    }
}

impl BidirectionalCursor<Deque> for Pos {
    fn retreat(&mut self, _: &Deque) {
        self.0 -= 1;
    }
}

impl RandomAccessCursor<Deque> for Pos {
    fn offset(&mut self, n: isize) {
        self.0 = self.0.wrapping_add_signed(n);
    }

    fn distance(&self, from: &Self) -> isize {
        self.0 as isize - from.0 as isize
    }
}

impl Sequence for Deque {
    type Item = i64;
    type Cursor = Pos;
    type Sentinel = Pos;
    type ConstCursor = Pos;
    type ConstSentinel = Pos;

    fn begin(&self) -> Pos {
        Pos(0)
    }

    fn end(&self) -> Pos {
        Pos(self.ring.len())
    }
}

impl EmplaceFront for Deque {
    fn emplace_front(&mut self, value: i64) {
        self.ring.push_front(value);
    }
}

impl EmplaceBack for Deque {
    fn emplace_back(&mut self, value: i64) {
        self.ring.push_back(value);
    }
}

impl Emplace for Deque {
    fn emplace(&mut self, pos: Pos, value: i64) -> Pos {
        self.ring.insert(pos.0, value);
        pos
    }
}

impl EraseRange for Deque {
    fn erase_range(&mut self, first: Pos, last: Pos) -> Pos {
        self.ring.drain(first.0..last.0);
        first
    }
}

impl InsertRange for Deque {
    fn insert_range<I>(&mut self, pos: Pos, items: I) -> Pos
    where
        I: IntoIterator<Item = i64>,
    {
        let tail = self.ring.split_off(pos.0);
        self.ring.extend(items);
        self.ring.extend(tail);
        pos
    }
}

impl Clear for Deque {
    fn clear(&mut self) {
        self.ring.clear();
    }
}

impl Resize for Deque {
    fn resize(&mut self, n: usize, value: i64) {
        self.ring.resize(n, value);
    }
}

fn show(label: &str, d: &Deque) {
    let items: Vec<_> = d.iter().collect();
    println!("{label:<24} {items:?}");
}

fn main() {
    println!("--- Deque: derived surface ---\n");

    let mut d = Deque::default();
    d.extend([3, 4, 5]);
    d.push_front(2);
    d.push_front(1);
    show("extend + push_front", &d);
    println!("len = {}, front = {}, back = {}", d.len(), d.front(), d.back());

    println!("d[2] = {}, nth(4) = {}", d[2], d.nth(4));
    match d.at(7) {
        Ok(v) => println!("at(7) = {v}"),
        Err(e) => println!("at(7): {e}"),
    }

    d.pop_back();
    d.pop_front();
    show("pop_back + pop_front", &d);

    let at = d.insert(d.cbegin(), 0);
    *at.get_mut(&mut d) -= 1;
    show("insert(begin, 0) - 1", &d);

    let mid = d.cbegin().offset_by(2);
    d.insert_n(mid, 2, 7);
    show("insert_n(2, 2 x 7)", &d);

    let reversed: Vec<_> = d.iter().rev().collect();
    println!("{:<24} {reversed:?}", "iter().rev()");

    d.resize_default(3);
    show("resize_default(3)", &d);

    let parsed = d.try_assign("10 20 x 40".split(' ').map(str::parse::<i64>));
    println!("try_assign(\"10 20 x 40\") = {parsed:?}");
    show("  kept", &d);

    d.assign_n(2, 5);
    let mut other = Deque::default();
    other.assign([5, 6]);
    println!("\n[5, 5] < [5, 6]: {}", d < other);
    println!("[5, 5] >= [5, 6]: {}", d.greater_equal(&other));

    println!("\noffered: {:?}", <Deque as Registered>::OFFERED);
}
