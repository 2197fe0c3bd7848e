//! Capability names and capability sets.

use core::fmt;

/// A primitive operation a candidate may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// `EmplaceFront::emplace_front`.
    FrontEmplace,
    /// `EmplaceBack::emplace_back`.
    BackEmplace,
    /// `Emplace::emplace` at an arbitrary position.
    Emplace,
    /// `EraseRange::erase_range`.
    RangeErase,
    /// `InsertRange::insert_range`.
    RangeInsert,
    /// `Clear::clear`.
    FullClear,
    /// `LessThan::less_than`.
    OrderingCompare,
    /// Two-argument `Resize::resize`.
    Resize,
}

bitflags::bitflags! {
    /// A set of detected (or required) capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CapabilitySet: u16 {
        const EMPLACE_FRONT = 1 << 0;
        const EMPLACE_BACK = 1 << 1;
        const EMPLACE = 1 << 2;
        const ERASE_RANGE = 1 << 3;
        const INSERT_RANGE = 1 << 4;
        const CLEAR = 1 << 5;
        const LESS_THAN = 1 << 6;
        const RESIZE = 1 << 7;
    }
}

bitflags::bitflags! {
    /// Element-type properties some derived operations depend on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ElementSet: u8 {
        /// `Item: Clone` (insert/assign N copies).
        const CLONE = 1 << 0;
        /// `Item: Default` (one-argument resize).
        const DEFAULT = 1 << 1;
    }
}

impl Capability {
    /// Every capability, in bit order.
    pub const ALL: [Capability; 8] = [
        Capability::FrontEmplace,
        Capability::BackEmplace,
        Capability::Emplace,
        Capability::RangeErase,
        Capability::RangeInsert,
        Capability::FullClear,
        Capability::OrderingCompare,
        Capability::Resize,
    ];

    /// Returns the bitflag for this capability.
    pub const fn as_set(self) -> CapabilitySet {
        match self {
            Self::FrontEmplace => CapabilitySet::EMPLACE_FRONT,
            Self::BackEmplace => CapabilitySet::EMPLACE_BACK,
            Self::Emplace => CapabilitySet::EMPLACE,
            Self::RangeErase => CapabilitySet::ERASE_RANGE,
            Self::RangeInsert => CapabilitySet::INSERT_RANGE,
            Self::FullClear => CapabilitySet::CLEAR,
            Self::OrderingCompare => CapabilitySet::LESS_THAN,
            Self::Resize => CapabilitySet::RESIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::FrontEmplace => "front-emplace",
            Self::BackEmplace => "back-emplace",
            Self::Emplace => "emplace",
            Self::RangeErase => "range-erase",
            Self::RangeInsert => "range-insert",
            Self::FullClear => "full-clear",
            Self::OrderingCompare => "ordering-compare",
            Self::Resize => "resize",
        }
    }

    /// Name of the primitive trait that supplies this capability.
    pub const fn trait_name(self) -> &'static str {
        match self {
            Self::FrontEmplace => "EmplaceFront",
            Self::BackEmplace => "EmplaceBack",
            Self::Emplace => "Emplace",
            Self::RangeErase => "EraseRange",
            Self::RangeInsert => "InsertRange",
            Self::FullClear => "Clear",
            Self::OrderingCompare => "LessThan",
            Self::Resize => "Resize",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Capability> for CapabilitySet {
    fn from(cap: Capability) -> Self {
        cap.as_set()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = CapabilitySet::empty();
        for cap in iter {
            set |= cap.as_set();
        }
        set
    }
}

impl CapabilitySet {
    /// Build a set from one witness result per capability, in
    /// [`Capability::ALL`] order.
    pub const fn from_witnesses(witnesses: [bool; 8]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < witnesses.len() {
            if witnesses[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self::from_bits_truncate(bits)
    }

    /// The capabilities in this set, in bit order.
    pub fn capabilities(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |cap| self.contains(cap.as_set()))
    }
}

impl ElementSet {
    pub const fn from_witnesses(clone: bool, default: bool) -> Self {
        let mut bits = 0u8;
        if clone {
            bits |= Self::CLONE.bits();
        }
        if default {
            bits |= Self::DEFAULT.bits();
        }
        Self::from_bits_truncate(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order_matches_all() {
        for (i, cap) in Capability::ALL.iter().enumerate() {
            assert_eq!(cap.as_set().bits(), 1 << i, "{cap}");
        }
    }

    #[test]
    fn test_from_witnesses() {
        let set = CapabilitySet::from_witnesses([true, true, false, false, false, false, false, false]);
        assert_eq!(set, CapabilitySet::EMPLACE_FRONT | CapabilitySet::EMPLACE_BACK);
        assert!(set.contains(CapabilitySet::EMPLACE_BACK));
        assert!(!set.contains(CapabilitySet::EMPLACE_FRONT | CapabilitySet::ERASE_RANGE));
        assert!(set.contains(CapabilitySet::empty()));
    }

    #[test]
    fn test_collect_and_iterate() {
        let set: CapabilitySet = [Capability::FullClear, Capability::RangeInsert].into_iter().collect();
        let back: Vec<_> = set.capabilities().collect();
        assert_eq!(back, [Capability::RangeInsert, Capability::FullClear]);
    }

    #[test]
    fn test_element_set() {
        let e = ElementSet::from_witnesses(true, false);
        assert!(e.contains(ElementSet::CLONE));
        assert!(!e.contains(ElementSet::CLONE | ElementSet::DEFAULT));
    }
}
