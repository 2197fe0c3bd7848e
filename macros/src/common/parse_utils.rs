//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Type Check Parsing: `Type: Expr`
// =============================================================================

/// Single type check: `Type: Expr`
pub struct TypeCheck {
    pub ty: Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// One or more type checks, comma separated (trailing comma allowed).
pub struct CheckList {
    pub checks: Vec<TypeCheck>,
}

impl Parse for CheckList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = vec![input.parse()?];

        while input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(CheckList { checks })
    }
}

// =============================================================================
// Keyword Lists
// =============================================================================

/// Parse a comma-separated list of bare keywords, rejecting unknown ones.
pub fn parse_keywords(input: ParseStream, allowed: &[&str]) -> syn::Result<Vec<Ident>> {
    let idents = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
    for ident in &idents {
        let name = ident.to_string();
        if !allowed.contains(&name.as_str()) {
            return Err(syn::Error::new(
                ident.span(),
                format!("unknown option `{name}`; expected one of: {}", allowed.join(", ")),
            ));
        }
    }
    Ok(idents.into_iter().collect())
}
