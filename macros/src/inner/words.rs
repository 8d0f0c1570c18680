//! Fixed-width word literal macros.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct WordInput {
    pub value: LitInt,
}

impl Parse for WordInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let value: LitInt = input.parse()?;
        Ok(WordInput { value })
    }
}

pub fn expand_w4(input: WordInput) -> syn::Result<TokenStream> {
    expand_word(&input.value, 4)
}

pub fn expand_w8(input: WordInput) -> syn::Result<TokenStream> {
    expand_word(&input.value, 8)
}

/// W4<b3, b2, b1, b0> or W8<b7, ..., b0>, most significant bit first.
fn expand_word(lit: &LitInt, width: u32) -> syn::Result<TokenStream> {
    let value = lit.base10_parse::<u16>()?;
    let max = (1u16 << width) - 1;

    if value > max {
        return Err(syn::Error::new_spanned(
            lit,
            format!("value {} does not fit in {} bits (0..={})", value, width, max),
        ));
    }

    let bits: Vec<TokenStream> = (0..width)
        .rev()
        .map(|i| {
            if (value >> i) & 1 == 1 {
                quote! { ::typebits::B1 }
            } else {
                quote! { ::typebits::B0 }
            }
        })
        .collect();

    Ok(match width {
        4 => quote! { ::typebits::W4<#(#bits),*> },
        _ => quote! { ::typebits::W8<#(#bits),*> },
    })
}
