//! Procedural macros for the typebits type-level arithmetic crate.
//!
//! Every macro here converts an integer literal into the type that
//! represents it, so the conversion cost is paid once at macro expansion
//! instead of being re-derived by the trait solver.
//!
//! # Macro API
//!
//! | Macro | Purpose |
//! |-------|---------|
//! | `nats!(n)` | Generate tally aliases `N0..Nn` |
//! | `nat!(v)` | A single tally literal as a nested type |
//! | `bits!(v, w)` | A bit-string literal at width `w` |
//! | `w4!(v)` | A 4-bit word literal |
//! | `w8!(v)` | An 8-bit word literal |
//!
//! All output uses absolute `::typebits::` paths, so the macros work from
//! any scope of any crate that depends on `typebits`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inner;

// =============================================================================
// Tally numbers
// =============================================================================

/// Generate tally number type aliases N0..Nn.
///
/// # Usage
/// ```ignore
/// nats!(16);  // Generates N0 = Z, N1 = S<N0>, ..., N16 = S<N15>
/// ```
#[proc_macro]
pub fn nats(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::unary::NatsInput);
    inner::unary::expand_nats(input).into()
}

/// Convert an integer literal to its tally type: `nat!(3)` is `S<S<S<Z>>>`.
#[proc_macro]
pub fn nat(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::unary::NatInput);
    inner::unary::expand_nat(input).into()
}

// =============================================================================
// Bit strings
// =============================================================================

/// Convert an integer literal to a bit string of the given width.
///
/// # Usage
/// ```ignore
/// type Answer = bits!(42, 8);  // Lsb<B0, Lsb<B1, ...>>, 8 positions
/// ```
///
/// The value must fit in the width; anything else is rejected with a
/// compile error at the literal's span.
#[proc_macro]
pub fn bits(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::bits::BitsInput);
    inner::bits::expand_bits(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

// =============================================================================
// Fixed-width words
// =============================================================================

/// Convert an integer literal (0..=15) to a 4-bit word type.
///
/// `w4!(0b1010)` is `W4<B1, B0, B1, B0>`, most significant bit first.
#[proc_macro]
pub fn w4(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::words::WordInput);
    inner::words::expand_w4(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Convert an integer literal (0..=255) to an 8-bit word type.
///
/// `w8!(0xA3)` is `W8<B1, B0, B1, B0, B0, B0, B1, B1>`.
#[proc_macro]
pub fn w8(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::words::WordInput);
    inner::words::expand_w8(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
