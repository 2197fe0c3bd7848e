//! `#[derive(Container)]`
//!
//! Always registers the type with the derived surface (`impl Container`).
//! `#[container(...)]` options opt into the free-standing operators and
//! lifetime hooks that Rust expresses as separate trait impls:
//!
//! | Option | Generates | Requires |
//! |--------|-----------|----------|
//! | `index` | `Index<usize>` / `IndexMut<usize>` | random-access cursors |
//! | `eq` | `PartialEq` (element-wise) | `Item: PartialEq` |
//! | `lexicographic` | `LessThan` (element-wise) | `Item: PartialOrd` |
//! | `ord` | `PartialOrd` from `LessThan`, unordered when neither is less but `!=` | `LessThan + PartialEq` |
//! | `clear` | `Clear` via range erase | `EraseRange` + common const pair |
//! | `teardown` | `Drop` calling `clear` | `Clear` for every instantiation |
//! | `iter` | `IntoIterator for &T` | - |
//! | `extend` | `Extend<Item>` via `push_back` | `EmplaceBack` |
//! | `register` | `Registered` (non-generic types only) | `detect` feature |

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{DeriveInput, Generics, Ident, parse_quote};

use crate::common::parse_keywords;

const OPTIONS: &[&str] = &[
    "index",
    "eq",
    "lexicographic",
    "ord",
    "clear",
    "teardown",
    "iter",
    "extend",
    "register",
];

#[derive(Default)]
struct Options {
    index: bool,
    eq: bool,
    lexicographic: bool,
    ord: bool,
    clear: bool,
    teardown: bool,
    iter: bool,
    extend: bool,
    register: Option<Span>,
}

impl Options {
    fn from_attrs(input: &DeriveInput) -> syn::Result<Self> {
        let mut opts = Options::default();
        for attr in input.attrs.iter().filter(|a| a.path().is_ident("container")) {
            let idents = attr.parse_args_with(|s: syn::parse::ParseStream| parse_keywords(s, OPTIONS))?;
            for ident in idents {
                match ident.to_string().as_str() {
                    "index" => opts.index = true,
                    "eq" => opts.eq = true,
                    "lexicographic" => opts.lexicographic = true,
                    "ord" => opts.ord = true,
                    "clear" => opts.clear = true,
                    "teardown" => opts.teardown = true,
                    "iter" => opts.iter = true,
                    "extend" => opts.extend = true,
                    "register" => opts.register = Some(ident.span()),
                    _ => unreachable!("parse_keywords rejects unknown options"),
                }
            }
        }
        Ok(opts)
    }
}

/// Generics of `input` with extra `where` predicates appended.
fn with_predicates(generics: &Generics, predicates: Vec<syn::WherePredicate>) -> Generics {
    let mut generics = generics.clone();
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

pub fn expand_derive_container(input: DeriveInput) -> syn::Result<TokenStream> {
    let opts = Options::from_attrs(&input)?;
    let name: &Ident = &input.ident;
    let (_, ty_g, _) = input.generics.split_for_impl();
    let this = quote! { #name #ty_g };
    let krate = quote! { ::tola_container };

    // Every generated impl except `Drop` restates the `Sequence` impl, so a
    // generic candidate whose `Sequence` impl carries extra bounds still works.
    let base = with_predicates(&input.generics, vec![parse_quote! { #this: #krate::Sequence }]);
    let (impl_g, _, where_c) = base.split_for_impl();

    let mut out = quote! {
        impl #impl_g #krate::Container for #this #where_c {}
    };

    if opts.index {
        let g = with_predicates(
            &base,
            vec![parse_quote! {
                <#this as #krate::Sequence>::ConstCursor: #krate::cursor::RandomAccessCursor<#this>
            }],
        );
        let (impl_g, _, where_c) = g.split_for_impl();
        let gm = with_predicates(
            &g,
            vec![parse_quote! {
                <#this as #krate::Sequence>::Cursor: #krate::cursor::RandomAccessCursor<#this>
            }],
        );
        let (impl_gm, _, where_cm) = gm.split_for_impl();
        out.extend(quote! {
            impl #impl_g ::core::ops::Index<usize> for #this #where_c {
                type Output = <#this as #krate::Sequence>::Item;

                #[inline]
                fn index(&self, n: usize) -> &Self::Output {
                    #krate::derive::nth(self, n)
                }
            }

            impl #impl_gm ::core::ops::IndexMut<usize> for #this #where_cm {
                #[inline]
                fn index_mut(&mut self, n: usize) -> &mut Self::Output {
                    #krate::derive::nth_mut(self, n)
                }
            }
        });
    }

    if opts.eq {
        let g = with_predicates(
            &base,
            vec![parse_quote! { <#this as #krate::Sequence>::Item: ::core::cmp::PartialEq }],
        );
        let (impl_g, _, where_c) = g.split_for_impl();
        out.extend(quote! {
            impl #impl_g ::core::cmp::PartialEq for #this #where_c {
                #[inline]
                fn eq(&self, other: &Self) -> bool {
                    #krate::derive::sequence_eq(self, other)
                }
            }
        });
    }

    if opts.lexicographic {
        let g = with_predicates(
            &base,
            vec![parse_quote! { <#this as #krate::Sequence>::Item: ::core::cmp::PartialOrd }],
        );
        let (impl_g, _, where_c) = g.split_for_impl();
        out.extend(quote! {
            impl #impl_g #krate::caps::LessThan for #this #where_c {
                #[inline]
                fn less_than(&self, other: &Self) -> bool {
                    #krate::derive::lexicographic_less(self, other)
                }
            }
        });
    }

    if opts.ord {
        let g = with_predicates(
            &base,
            vec![parse_quote! { #this: #krate::caps::LessThan + ::core::cmp::PartialEq }],
        );
        let (impl_g, _, where_c) = g.split_for_impl();
        out.extend(quote! {
            impl #impl_g ::core::cmp::PartialOrd for #this #where_c {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    #krate::derive::partial_cmp_by_less(self, other)
                }

                #[inline]
                fn lt(&self, other: &Self) -> bool {
                    #krate::caps::LessThan::less_than(self, other)
                }

                #[inline]
                fn gt(&self, other: &Self) -> bool {
                    #krate::derive::Comparisons::greater_than(self, other)
                }
            }
        });
    }

    if opts.clear {
        let g = with_predicates(
            &base,
            vec![
                parse_quote! { #this: #krate::caps::EraseRange },
                parse_quote! {
                    <#this as #krate::Sequence>::ConstSentinel:
                        #krate::cursor::Common<<#this as #krate::Sequence>::ConstCursor>
                },
            ],
        );
        let (impl_g, _, where_c) = g.split_for_impl();
        out.extend(quote! {
            impl #impl_g #krate::caps::Clear for #this #where_c {
                #[inline]
                fn clear(&mut self) {
                    #krate::derive::erase_all(self)
                }
            }
        });
    }

    if opts.teardown {
        // `Drop` may not add bounds beyond the type's own.
        let (impl_g, _, where_c) = input.generics.split_for_impl();
        out.extend(quote! {
            impl #impl_g ::core::ops::Drop for #this #where_c {
                fn drop(&mut self) {
                    #krate::derive::teardown(self)
                }
            }
        });
    }

    if opts.iter {
        let mut g = base.clone();
        g.params.insert(0, parse_quote! { '__seq });
        let (impl_g, _, where_c) = g.split_for_impl();
        out.extend(quote! {
            impl #impl_g ::core::iter::IntoIterator for &'__seq #this #where_c {
                type Item = &'__seq <#this as #krate::Sequence>::Item;
                type IntoIter = #krate::cursor::Iter<'__seq, #this>;

                #[inline]
                fn into_iter(self) -> Self::IntoIter {
                    #krate::cursor::Iter::new(self)
                }
            }
        });
    }

    if opts.extend {
        let g = with_predicates(&base, vec![parse_quote! { #this: #krate::caps::EmplaceBack }]);
        let (impl_g, _, where_c) = g.split_for_impl();
        out.extend(quote! {
            impl #impl_g ::core::iter::Extend<<#this as #krate::Sequence>::Item> for #this #where_c {
                fn extend<__I>(&mut self, items: __I)
                where
                    __I: ::core::iter::IntoIterator<Item = <#this as #krate::Sequence>::Item>,
                {
                    for item in items {
                        #krate::derive::push_back(self, item);
                    }
                }
            }
        });
    }

    if let Some(span) = opts.register {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                span,
                "`register` needs a concrete type; use `register!(Type<Args>)` per instantiation",
            ));
        }
        out.extend(quote! {
            #krate::register!(#name);
        });
    }

    Ok(out)
}
