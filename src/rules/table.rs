//! The static Derivation Rule Table.

use core::fmt;

use crate::caps::{CapabilitySet, ElementSet};
use crate::cursor::Category;

use super::profile::{Access, PairShape, TraversalGate};

/// One potentially synthesized operation (or, for `Comparisons`, the
/// inseparable ordering trio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DerivedOp {
    IsEmpty,
    Len,
    Data,
    DataMut,
    Front,
    FrontMut,
    Back,
    BackMut,
    Nth,
    NthMut,
    At,
    AtMut,
    PushFront,
    PopFront,
    PushBack,
    PopBack,
    Insert,
    InsertN,
    Erase,
    Assign,
    AssignN,
    ResizeDefault,
    Reverse,
    ConstReverse,
    Comparisons,
    EraseAll,
    Teardown,
}

bitflags::bitflags! {
    /// A set of derived operations, one bit per [`DerivedOp`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OperationSet: u32 {
        const IS_EMPTY = 1 << 0;
        const LEN = 1 << 1;
        const DATA = 1 << 2;
        const DATA_MUT = 1 << 3;
        const FRONT = 1 << 4;
        const FRONT_MUT = 1 << 5;
        const BACK = 1 << 6;
        const BACK_MUT = 1 << 7;
        const NTH = 1 << 8;
        const NTH_MUT = 1 << 9;
        const AT = 1 << 10;
        const AT_MUT = 1 << 11;
        const PUSH_FRONT = 1 << 12;
        const POP_FRONT = 1 << 13;
        const PUSH_BACK = 1 << 14;
        const POP_BACK = 1 << 15;
        const INSERT = 1 << 16;
        const INSERT_N = 1 << 17;
        const ERASE = 1 << 18;
        const ASSIGN = 1 << 19;
        const ASSIGN_N = 1 << 20;
        const RESIZE_DEFAULT = 1 << 21;
        const REVERSE = 1 << 22;
        const CONST_REVERSE = 1 << 23;
        const COMPARISONS = 1 << 24;
        const ERASE_ALL = 1 << 25;
        const TEARDOWN = 1 << 26;
    }
}

impl DerivedOp {
    pub const COUNT: usize = 27;

    /// Every derived operation, in discriminant order.
    pub const ALL: [DerivedOp; Self::COUNT] = [
        DerivedOp::IsEmpty,
        DerivedOp::Len,
        DerivedOp::Data,
        DerivedOp::DataMut,
        DerivedOp::Front,
        DerivedOp::FrontMut,
        DerivedOp::Back,
        DerivedOp::BackMut,
        DerivedOp::Nth,
        DerivedOp::NthMut,
        DerivedOp::At,
        DerivedOp::AtMut,
        DerivedOp::PushFront,
        DerivedOp::PopFront,
        DerivedOp::PushBack,
        DerivedOp::PopBack,
        DerivedOp::Insert,
        DerivedOp::InsertN,
        DerivedOp::Erase,
        DerivedOp::Assign,
        DerivedOp::AssignN,
        DerivedOp::ResizeDefault,
        DerivedOp::Reverse,
        DerivedOp::ConstReverse,
        DerivedOp::Comparisons,
        DerivedOp::EraseAll,
        DerivedOp::Teardown,
    ];

    /// The method (or method family) the operation surfaces as.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsEmpty => "is_empty",
            Self::Len => "len",
            Self::Data => "data",
            Self::DataMut => "data_mut",
            Self::Front => "front",
            Self::FrontMut => "front_mut",
            Self::Back => "back",
            Self::BackMut => "back_mut",
            Self::Nth => "nth",
            Self::NthMut => "nth_mut",
            Self::At => "at",
            Self::AtMut => "at_mut",
            Self::PushFront => "push_front",
            Self::PopFront => "pop_front",
            Self::PushBack => "push_back",
            Self::PopBack => "pop_back",
            Self::Insert => "insert",
            Self::InsertN => "insert_n",
            Self::Erase => "erase",
            Self::Assign => "assign",
            Self::AssignN => "assign_n",
            Self::ResizeDefault => "resize_default",
            Self::Reverse => "rbegin",
            Self::ConstReverse => "crbegin",
            Self::Comparisons => "comparisons",
            Self::EraseAll => "erase_all",
            Self::Teardown => "teardown",
        }
    }

    #[inline]
    pub const fn as_set(self) -> OperationSet {
        OperationSet::from_bits_retain(1 << self as u32)
    }

    /// The rule gating this operation.
    #[inline]
    pub const fn rule(self) -> Rule {
        RULES[self as usize]
    }
}

impl fmt::Display for DerivedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DerivedOp> for OperationSet {
    fn from(op: DerivedOp) -> Self {
        op.as_set()
    }
}

impl FromIterator<DerivedOp> for OperationSet {
    fn from_iter<I: IntoIterator<Item = DerivedOp>>(iter: I) -> Self {
        let mut set = OperationSet::empty();
        for op in iter {
            set |= op.as_set();
        }
        set
    }
}

impl OperationSet {
    /// The operations in this set, in discriminant order.
    pub fn ops(self) -> impl Iterator<Item = DerivedOp> {
        DerivedOp::ALL.into_iter().filter(move |op| self.contains(op.as_set()))
    }
}

/// The three gates of one derived operation.
///
/// The first gate, "the candidate has not defined it already", is not a
/// table entry: a user definition simply takes precedence over the
/// provided method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub op: DerivedOp,
    /// Primitives that must all be present.
    pub requires: CapabilitySet,
    /// Element-type properties that must all hold.
    pub element: ElementSet,
    /// Traversal conditions that must all hold (empty: none).
    pub traversal: &'static [TraversalGate],
}

impl Rule {
    const fn new(op: DerivedOp) -> Self {
        Self {
            op,
            requires: CapabilitySet::empty(),
            element: ElementSet::empty(),
            traversal: &[],
        }
    }

    const fn requires(mut self, caps: CapabilitySet) -> Self {
        self.requires = caps;
        self
    }

    const fn element(mut self, element: ElementSet) -> Self {
        self.element = element;
        self
    }

    const fn traversal(mut self, gates: &'static [TraversalGate]) -> Self {
        self.traversal = gates;
        self
    }
}

macro_rules! gate {
    ($access:ident, $category:ident, $pair:ident) => {
        TraversalGate {
            access: Access::$access,
            category: Category::$category,
            pair: PairShape::$pair,
        }
    };
}

/// One rule per [`DerivedOp`], indexed by discriminant.
pub const RULES: [Rule; DerivedOp::COUNT] = [
    Rule::new(DerivedOp::IsEmpty).traversal(&[gate!(Shared, Forward, Any)]),
    Rule::new(DerivedOp::Len).traversal(&[gate!(Shared, Forward, Any)]),
    Rule::new(DerivedOp::Data).traversal(&[gate!(Shared, Contiguous, Common)]),
    Rule::new(DerivedOp::DataMut).traversal(&[gate!(Exclusive, Contiguous, Common)]),
    Rule::new(DerivedOp::Front).traversal(&[gate!(Shared, Forward, Any)]),
    Rule::new(DerivedOp::FrontMut).traversal(&[gate!(Exclusive, Forward, Any)]),
    Rule::new(DerivedOp::Back).traversal(&[gate!(Shared, Bidirectional, Common)]),
    Rule::new(DerivedOp::BackMut).traversal(&[gate!(Exclusive, Bidirectional, Common)]),
    Rule::new(DerivedOp::Nth).traversal(&[gate!(Shared, RandomAccess, Any)]),
    Rule::new(DerivedOp::NthMut).traversal(&[gate!(Exclusive, RandomAccess, Any)]),
    Rule::new(DerivedOp::At).traversal(&[gate!(Shared, RandomAccess, Any)]),
    Rule::new(DerivedOp::AtMut).traversal(&[gate!(Exclusive, RandomAccess, Any)]),
    Rule::new(DerivedOp::PushFront).requires(CapabilitySet::EMPLACE_FRONT),
    Rule::new(DerivedOp::PopFront)
        .requires(CapabilitySet::EMPLACE_FRONT.union(CapabilitySet::ERASE_RANGE)),
    Rule::new(DerivedOp::PushBack).requires(CapabilitySet::EMPLACE_BACK),
    Rule::new(DerivedOp::PopBack)
        .requires(CapabilitySet::EMPLACE_BACK.union(CapabilitySet::ERASE_RANGE))
        .traversal(&[gate!(Exclusive, Bidirectional, Common)]),
    Rule::new(DerivedOp::Insert).requires(CapabilitySet::EMPLACE),
    Rule::new(DerivedOp::InsertN)
        .requires(CapabilitySet::INSERT_RANGE)
        .element(ElementSet::CLONE),
    Rule::new(DerivedOp::Erase).requires(CapabilitySet::ERASE_RANGE),
    Rule::new(DerivedOp::Assign).requires(CapabilitySet::CLEAR.union(CapabilitySet::INSERT_RANGE)),
    Rule::new(DerivedOp::AssignN)
        .requires(CapabilitySet::CLEAR.union(CapabilitySet::INSERT_RANGE))
        .element(ElementSet::CLONE),
    Rule::new(DerivedOp::ResizeDefault)
        .requires(CapabilitySet::RESIZE)
        .element(ElementSet::DEFAULT),
    Rule::new(DerivedOp::Reverse).traversal(&[gate!(Exclusive, Bidirectional, Common)]),
    Rule::new(DerivedOp::ConstReverse).traversal(&[gate!(Shared, Bidirectional, Common)]),
    Rule::new(DerivedOp::Comparisons).requires(CapabilitySet::LESS_THAN),
    Rule::new(DerivedOp::EraseAll)
        .requires(CapabilitySet::ERASE_RANGE)
        .traversal(&[gate!(Shared, Forward, Common)]),
    Rule::new(DerivedOp::Teardown).requires(CapabilitySet::CLEAR),
];
