// Boolean expression parsing and lowering for witness macros

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Atom(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        // A trait path (caps_check!) or a method name (offers!)
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Atom(ty))
    }
}

// =============================================================================
// BoolExpr Utilities
// =============================================================================

/// Convert BoolExpr to human-readable string
pub fn bool_expr_to_string(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Atom(ty) => quote!(#ty).to_string().replace(' ', ""),
        BoolExpr::And(lhs, rhs) => {
            format!("({} & {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Or(lhs, rhs) => {
            format!("({} | {})", bool_expr_to_string(lhs), bool_expr_to_string(rhs))
        }
        BoolExpr::Not(operand) => format!("!{}", bool_expr_to_string(operand)),
    }
}

/// The single identifier an atom names, if it is a bare identifier.
pub fn atom_ident(ty: &Type) -> Option<&syn::Ident> {
    match ty {
        Type::Path(p) if p.qself.is_none() => p.path.get_ident(),
        _ => None,
    }
}

/// Lower to a `bool` expression, mapping each atom with `atom`.
///
/// NOT is applied to the lowered operand, so `!X` means "witness for X
/// failed" (for concrete types, "X is not implemented").
pub fn lower_bool_expr<F>(expr: &BoolExpr, atom: &mut F) -> syn::Result<TokenStream>
where
    F: FnMut(&Type) -> syn::Result<TokenStream>,
{
    Ok(match expr {
        BoolExpr::Atom(ty) => atom(ty)?,
        BoolExpr::And(lhs, rhs) => {
            let l = lower_bool_expr(lhs, atom)?;
            let r = lower_bool_expr(rhs, atom)?;
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = lower_bool_expr(lhs, atom)?;
            let r = lower_bool_expr(rhs, atom)?;
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = lower_bool_expr(operand, atom)?;
            quote! { (!#o) }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        let expr: BoolExpr = syn::parse_str("A | B & !C").unwrap();
        assert_eq!(bool_expr_to_string(&expr), "(A | (B & !C))");
    }

    #[test]
    fn test_parens() {
        let expr: BoolExpr = syn::parse_str("!(push_front | push_back) & len").unwrap();
        assert_eq!(bool_expr_to_string(&expr), "(!(push_front | push_back) & len)");
    }
}
