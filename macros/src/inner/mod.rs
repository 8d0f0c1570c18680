// Code generation behind the public macros.
//
// This module contains:
// - unary: tally alias families and tally literals
// - bits: bit-string literals
// - words: fixed-width word literals

pub mod bits;
pub mod unary;
pub mod words;
