//! Procedural macros which generate the arity-indexed trait impls of the `typelist` crate.
//!
//! Rust has no variadic generics, so every impl that depends on the arity of a tuple or on the
//! magnitude of a constant has to be written out once per arity. These macros write them out. The
//! generated impls mention their traits and types unqualified, so they must be invoked in a scope
//! where those names resolve.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::LitInt,
};

/// Parse the single integer literal bounding a generator macro.
fn parse_bound(input: TokenStream) -> syn::Result<usize> {
    syn::parse::<LitInt>(input)?.base10_parse::<usize>()
}

/// Generate `Tuple` and `List` impls converting between every flat tuple `(T0, ..., Tn)` with
/// `n` less than or equal to the given bound and its inductive list `(T0, (..., (Tn, ())))`.
///
/// The traits `Tuple` (with associated type `AsList`) and `List` (with associated type `AsTuple`)
/// must be in scope.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    for arity in 0..=max {
        let params: Vec<_> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
        let tuple = quote!((#(#params,)*));
        let list = params
            .iter()
            .rev()
            .fold(quote!(()), |tail, param| quote!((#param, #tail)));
        impls.extend(quote! {
            impl<#(#params),*> Tuple for #tuple {
                type AsList = #list;
            }

            impl<#(#params),*> List for #list {
                type AsTuple = #tuple;
            }
        });
    }
    impls.into()
}

/// Generate `ToUnary` impls for `Number<N>` and `ToConstant` impls for the unary number of the
/// same magnitude, for every `N` less than or equal to the given bound.
///
/// The traits `ToUnary` and `ToConstant`, and the types `Number`, `Z` and `S`, must be in scope.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    let mut unary = quote!(Z);
    for n in 0..=max {
        let constant = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#constant>;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls.into()
}
