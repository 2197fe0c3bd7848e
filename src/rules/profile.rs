//! Candidate profiles: everything the rule table needs to know about a
//! candidate, as plain `const` data.

use core::fmt;

use crate::caps::{CapabilitySet, ElementSet};
use crate::cursor::Category;

use super::table::{DerivedOp, OperationSet, RULES};

/// Which traversal pair a gate inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The immutable pair (`ConstCursor`, `ConstSentinel`).
    Shared,
    /// The mutable pair (`Cursor`, `Sentinel`).
    Exclusive,
}

/// Constraint on the endpoint types of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairShape {
    Any,
    /// End endpoint has the cursor's type.
    Common,
}

/// "The `access` pair is at least `category`, with endpoints shaped `pair`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraversalGate {
    pub access: Access,
    pub category: Category,
    pub pair: PairShape,
}

/// Classification of one traversal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Traversal {
    pub category: Category,
    pub common: bool,
}

impl Traversal {
    pub const fn new(category: Category, common: bool) -> Self {
        Self { category, common }
    }

    pub const fn passes(self, gate: &TraversalGate) -> bool {
        if !self.category.includes(gate.category) {
            return false;
        }
        match gate.pair {
            PairShape::Any => true,
            PairShape::Common => self.common,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = if self.common { "common" } else { "sentinel-terminated" };
        write!(f, "{} ({shape})", self.category)
    }
}

/// Detected shape of a candidate: primitives, element properties and the
/// classification of both traversal pairs (checked independently).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub capabilities: CapabilitySet,
    pub element: ElementSet,
    pub shared: Traversal,
    pub exclusive: Traversal,
}

impl Profile {
    pub const fn traversal(&self, access: Access) -> Traversal {
        match access {
            Access::Shared => self.shared,
            Access::Exclusive => self.exclusive,
        }
    }

    /// Whether the rule table licenses `op` for this profile.
    pub const fn offers(&self, op: DerivedOp) -> bool {
        let rule = RULES[op as usize];
        if !self.capabilities.contains(rule.requires) || !self.element.contains(rule.element) {
            return false;
        }
        let mut i = 0;
        while i < rule.traversal.len() {
            let gate = &rule.traversal[i];
            if !self.traversal(gate.access).passes(gate) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Every operation the rule table licenses.
    pub const fn offered(&self) -> OperationSet {
        let mut set = OperationSet::empty();
        let mut i = 0;
        while i < DerivedOp::ALL.len() {
            let op = DerivedOp::ALL[i];
            if self.offers(op) {
                set = set.union(op.as_set());
            }
            i += 1;
        }
        set
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("capabilities:")?;
        if self.capabilities.is_empty() {
            f.write_str(" none")?;
        }
        for cap in self.capabilities.capabilities() {
            write!(f, " {cap}")?;
        }
        writeln!(f)?;
        writeln!(f, "shared:       {}", self.shared)?;
        writeln!(f, "exclusive:    {}", self.exclusive)?;
        f.write_str("offers:")?;
        for op in self.offered().ops() {
            write!(f, " {op}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD_ONLY: Profile = Profile {
        capabilities: CapabilitySet::empty(),
        element: ElementSet::empty(),
        shared: Traversal::new(Category::Forward, false),
        exclusive: Traversal::new(Category::Forward, false),
    };

    #[test]
    fn test_forward_only_gets_basics() {
        let offered = FORWARD_ONLY.offered();
        assert_eq!(
            offered,
            OperationSet::IS_EMPTY | OperationSet::LEN | OperationSet::FRONT | OperationSet::FRONT_MUT
        );
    }

    #[test]
    fn test_random_access_with_sentinel_keeps_count() {
        let mut p = FORWARD_ONLY;
        p.shared = Traversal::new(Category::RandomAccess, false);
        assert!(p.offers(DerivedOp::Len));
        assert!(p.offers(DerivedOp::Nth));
        assert!(p.offers(DerivedOp::At));
        assert!(!p.offers(DerivedOp::AtMut));
        assert!(!p.offers(DerivedOp::Back));
        p.exclusive = p.shared;
        assert!(p.offers(DerivedOp::AtMut));
    }

    #[test]
    fn test_pairs_are_checked_independently() {
        let mut p = FORWARD_ONLY;
        p.shared = Traversal::new(Category::Bidirectional, true);
        assert!(p.offers(DerivedOp::Back));
        assert!(p.offers(DerivedOp::ConstReverse));
        assert!(!p.offers(DerivedOp::BackMut));
        assert!(!p.offers(DerivedOp::Reverse));
    }

    #[test]
    fn test_push_only() {
        let mut p = FORWARD_ONLY;
        p.capabilities = CapabilitySet::EMPLACE_FRONT | CapabilitySet::EMPLACE_BACK;
        p.shared = Traversal::new(Category::Bidirectional, true);
        p.exclusive = p.shared;
        assert!(p.offers(DerivedOp::PushFront));
        assert!(p.offers(DerivedOp::PushBack));
        assert!(p.offers(DerivedOp::IsEmpty));
        assert!(p.offers(DerivedOp::Len));
        assert!(!p.offers(DerivedOp::PopFront));
        assert!(!p.offers(DerivedOp::PopBack));
    }

    #[test]
    fn test_element_gates() {
        let mut p = FORWARD_ONLY;
        p.capabilities = CapabilitySet::CLEAR | CapabilitySet::INSERT_RANGE | CapabilitySet::RESIZE;
        assert!(p.offers(DerivedOp::Assign));
        assert!(!p.offers(DerivedOp::AssignN));
        assert!(!p.offers(DerivedOp::ResizeDefault));
        p.element = ElementSet::CLONE | ElementSet::DEFAULT;
        assert!(p.offers(DerivedOp::AssignN));
        assert!(p.offers(DerivedOp::InsertN));
        assert!(p.offers(DerivedOp::ResizeDefault));
    }

    #[test]
    fn test_display() {
        let text = FORWARD_ONLY.to_string();
        assert!(text.starts_with("capabilities: none\n"));
        assert!(text.contains("shared:       forward (sentinel-terminated)"));
        assert!(text.ends_with("offers: is_empty len front front_mut"));
    }
}
