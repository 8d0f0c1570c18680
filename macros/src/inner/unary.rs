//! Tally number generation macros.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct NatsInput {
    pub max: usize,
}

impl Parse for NatsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(NatsInput { max })
    }
}

pub fn expand_nats(input: NatsInput) -> TokenStream {
    let max = input.max;

    // N0 = Z
    let mut types = vec![quote! { pub type N0 = ::typebits::Z; }];

    // N1..Nmax = S<N(n-1)>
    for n in 1..=max {
        let curr = syn::Ident::new(&format!("N{}", n), proc_macro2::Span::call_site());
        let prev = syn::Ident::new(&format!("N{}", n - 1), proc_macro2::Span::call_site());
        types.push(quote! { pub type #curr = ::typebits::S<#prev>; });
    }

    quote! { #(#types)* }
}

pub struct NatInput {
    pub value: usize,
}

impl Parse for NatInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let value = lit.base10_parse::<usize>()?;
        Ok(NatInput { value })
    }
}

pub fn expand_nat(input: NatInput) -> TokenStream {
    let mut ty = quote! { ::typebits::Z };
    for _ in 0..input.value {
        ty = quote! { ::typebits::S<#ty> };
    }
    ty
}
