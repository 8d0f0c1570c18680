//! Bit-string literal macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, LitInt, Token};

pub struct BitsInput {
    pub value: LitInt,
    pub width: LitInt,
}

impl Parse for BitsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let value: LitInt = input.parse()?;
        let _comma: Token![,] = input.parse()?;
        let width: LitInt = input.parse()?;
        Ok(BitsInput { value, width })
    }
}

pub fn expand_bits(input: BitsInput) -> syn::Result<TokenStream> {
    let value = input.value.base10_parse::<u64>()?;
    let width = input.width.base10_parse::<u32>()?;

    if width == 0 || width > 64 {
        return Err(syn::Error::new_spanned(
            &input.width,
            "width must be between 1 and 64",
        ));
    }
    if width < 64 && value >> width != 0 {
        return Err(syn::Error::new_spanned(
            &input.value,
            format!(
                "value {} does not fit in {} bits\n\
                 \n\
                 The widest value at this width is {}.",
                value,
                width,
                (1u64 << width) - 1
            ),
        ));
    }

    Ok(build_bits(value, width))
}

/// Lsb<b0, Lsb<b1, ... Nil>>, least significant bit outermost.
fn build_bits(value: u64, width: u32) -> TokenStream {
    if width == 0 {
        return quote! { ::typebits::Nil };
    }

    let head = bit_to_tokens(value & 1);
    let tail = build_bits(value >> 1, width - 1);

    quote! { ::typebits::Lsb<#head, #tail> }
}

fn bit_to_tokens(bit: u64) -> TokenStream {
    if bit == 1 {
        quote! { ::typebits::B1 }
    } else {
        quote! { ::typebits::B0 }
    }
}
