//! Procedural macros for the tola-container derivation engine
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Container)]` | struct/enum | Opt into the derived surface |
//! | `caps_check!` | - | Which capability traits a type has |
//! | `offers!` | - | Which derived operations a type gets |
//!
//! Every expansion refers to the runtime crate as `::tola_container`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

use common::CheckList;

/// Give a [`Sequence`] implementor the derived container surface.
///
/// The plain derive emits `impl Container for T {}`; each method of
/// `Container` then exists exactly when its capability and traversal
/// requirements hold. `#[container(...)]` adds the operators that live on
/// separate traits:
///
/// ```ignore
/// #[derive(Container)]
/// #[container(index, eq, lexicographic, ord, clear, iter, extend, register)]
/// struct Ring { /* ... */ }
/// ```
///
/// - `index`: `Index<usize>` and `IndexMut<usize>` (random-access cursors)
/// - `eq`: element-wise `PartialEq`
/// - `lexicographic`: `LessThan` from the elements' `PartialOrd`
/// - `ord`: `PartialOrd` built from `LessThan` and `PartialEq`
/// - `clear`: `Clear` by erasing the whole range
/// - `teardown`: `Drop` that clears the contents first
/// - `iter`: `IntoIterator for &T`
/// - `extend`: `Extend<Item>` through `push_back`
/// - `register`: `Registered`, with the category and capabilities verified
///   at compile time (non-generic types only)
///
/// [`Sequence`]: ../tola_container/trait.Sequence.html
#[proc_macro_derive(Container, attributes(container))]
pub fn derive_container(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_container(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Check at compile time whether types implement capability traits.
///
/// Capability trait names (`EmplaceBack`, `EraseRange`, ...) read the
/// crate's detection table; any other trait is witnessed inline, which only
/// gives a meaningful answer for concrete types.
///
/// ```ignore
/// use tola_container::caps_check;
///
/// assert!(caps_check!(Vec<u8>: Clone));
/// assert!(caps_check!(MyList<i32>: EmplaceFront & EmplaceBack & !EraseRange));
/// assert!(caps_check!(MyList<i32>: EmplaceBack, Stack<i32>: !Resize));
/// ```
#[proc_macro]
pub fn caps_check(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CheckList);
    user::expand_caps_check(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Check at compile time whether types get derived operations.
///
/// Atoms are method names of `Container`; an unknown name is a compile
/// error listing the valid ones.
///
/// ```ignore
/// use tola_container::offers;
///
/// assert!(offers!(MyList<i32>: push_front & push_back & !pop_back));
/// assert!(offers!(GrowVec<i32>: nth & at & as_slice));
/// ```
#[proc_macro]
pub fn offers(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CheckList);
    user::expand_offers(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
