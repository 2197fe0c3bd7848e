//! Type-level booleans for category predicates.
//!
//! `Present` answers "this traversal guarantee holds", `Absent` that it
//! does not. `If` lets a category tag pick an implementation type in a
//! `where` clause without going through `const` values.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// `Then` when present, `Else` when absent.
    type If<Then, Else>;
}

/// The guarantee holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// The guarantee does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_if_selects() {
        assert!(Present::VALUE && !Absent::VALUE);
        let picked: <Present as Bool>::If<u8, &'static str> = 7;
        assert_eq!(picked, 7);
        let picked: <Absent as Bool>::If<u8, &'static str> = "else";
        assert_eq!(picked, "else");
    }
}
