//! `caps_check!` and `offers!`: boolean witnesses over concrete candidates.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Type;

use crate::common::{CheckList, atom_ident, bool_expr_to_string, lower_bool_expr};
use crate::inner::names;

// =============================================================================
// caps_check!
// =============================================================================

/// Capability traits read the crate's `Detect` witnesses; any other trait gets
/// an inline witness of its own.
pub fn expand_caps_check(input: CheckList) -> syn::Result<TokenStream> {
    let mut parts = Vec::with_capacity(input.checks.len());
    for check in &input.checks {
        let ty = &check.ty;
        parts.push(lower_bool_expr(&check.expr, &mut |atom| Ok(capability_atom(atom, ty)))?);
    }
    Ok(quote! {
        {
            #[allow(unused_imports)]
            use ::tola_container::detect::fallback::*;
            (#(#parts)&&*)
        }
    })
}

fn capability_atom(trait_ty: &Type, ty: &Type) -> TokenStream {
    if let Some(witness) = atom_ident(trait_ty).and_then(|id| names::capability_witness(&id.to_string())) {
        let witness = format_ident!("{}", witness);
        return quote! { ::tola_container::detect::Detect::<#ty>::#witness };
    }
    generate_single_witness(trait_ty, ty)
}

/// Generate a single witness check for one trait
fn generate_single_witness(trait_ty: &Type, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __WitnessFallback { const VAL: bool = false; }
            struct __Witness<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __WitnessFallback for __Witness<X> {}
            impl<X: ?Sized + #trait_ty> __Witness<X> { const VAL: bool = true; }
            __Witness::<#ty>::VAL
        }
    }
}

// =============================================================================
// offers!
// =============================================================================

/// Each atom names a derived method; unknown names are a compile error.
pub fn expand_offers(input: CheckList) -> syn::Result<TokenStream> {
    let mut parts = Vec::with_capacity(input.checks.len());
    for check in &input.checks {
        let ty = &check.ty;
        let lowered = lower_bool_expr(&check.expr, &mut |atom| operation_atom(atom, ty))
            .map_err(|e| syn::Error::new(e.span(), format!("{e} (in `{}`)", bool_expr_to_string(&check.expr))))?;
        parts.push(lowered);
    }
    Ok(quote! {
        {
            #[allow(unused_imports)]
            use ::tola_container::detect::fallback::*;
            (#(#parts)&&*)
        }
    })
}

fn operation_atom(atom: &Type, ty: &Type) -> syn::Result<TokenStream> {
    let Some(ident) = atom_ident(atom) else {
        return Err(syn::Error::new_spanned(atom, "expected a derived method name, e.g. `pop_back`"));
    };
    let name = ident.to_string();
    let Some(witness) = names::operation_witness(&name) else {
        let known: Vec<_> = names::operation_names().collect();
        return Err(syn::Error::new(
            ident.span(),
            format!("`{name}` is not a derived operation; expected one of: {}", known.join(", ")),
        ));
    };
    let witness = format_ident!("{}", witness);
    Ok(quote! { ::tola_container::detect::Offers::<#ty>::#witness })
}
