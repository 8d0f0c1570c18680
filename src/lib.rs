#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std

//! # typebits
//!
//! Boolean algebra and binary arithmetic evaluated entirely by the type
//! checker.
//!
//! **No value in this crate is ever computed at runtime.** Every number
//! is a type, every operation is a trait projection or type alias, and
//! every test is a compile-time assertion that two types are equal. A
//! green build is the whole test suite passing; there is nothing left to
//! execute.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Bits                                                    |
//! |  - B1 / B0, If, And, Or, Not, Xor, the one-bit full adder         |
//! +-------------------------------------------------------------------+
//!                                |
//!              +-----------------+------------------+
//!              v                                    v
//! +---------------------------+   +---------------------------------+
//! |  Layer 1a: Words          |   |  Layer 1b: Bit strings          |
//! |  - W4 / W8 (fixed width)  |   |  - Nil / Lsb (any width)        |
//! |  - ripple add, bitwise,   |   |  - add, neg, sub, mul, shifts,  |
//! |    shifts, halves, Pow2   |   |    factorial, width bridge      |
//! +---------------------------+   +---------------------------------+
//!                                                  |
//!                                                  v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Tally numbers                                           |
//! |  - Z / S<N>, comparisons, shift counts, bit positions             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! The numeric layers meet in two places: shift counts and bit positions
//! are tally numbers, and [`binary::WidthOf`] turns a bit string's width
//! into one.
//!
//! ## Quick Start
//!
//! ```
//! use typebits::prelude::*;
//! use typebits::static_assert;
//!
//! // Arithmetic happens while this compiles.
//! static_assert!(Sum<bits!(19, 8), bits!(23, 8)>, bits!(42, 8));
//!
//! // Comparisons produce bits, and bits compose.
//! static_assert!(And<IsLt<N3, N7>, IsEven<w8!(42)>>);
//! ```

// Allow `::typebits` to work inside the crate itself
extern crate self as typebits;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Bits (no dependencies)
// =============================================================================
pub mod bit;

// =============================================================================
// Layer 1: Numbers
// =============================================================================
pub mod binary;
pub mod word;

// =============================================================================
// Layer 2: Tally numbers and assertions
// =============================================================================
pub mod assert;
pub mod unary;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use assert::*;
pub use binary::*;
pub use bit::*;
pub use unary::*;
pub use word::*;

// Re-export proc-macros
pub use macros::{bits, nat, nats, w4, w8};

/// Common items, in one import.
pub mod prelude {
    pub use crate::assert::{assert_same, assert_true, Same, Truthy};
    pub use crate::bit::{
        AdderCarry, AdderSum, And, Bit, False, FromBool, FullAdd, If, IfNot, Not, Or, True, Xor,
        B0, B1,
    };
    pub use crate::binary::{
        BAnd, BNot, BOr, BXor, BitAt, Bits, Dec, Diff, Fact, Inc, IsZero, Lsb, Neg, Nil, OneLike,
        Prod, Shl, ShlBy, Shr, ShrBy, Sum, WidthOf, Zeroed,
    };
    pub use crate::unary::{
        IsEq, IsGe, IsGt, IsLe, IsLt, Nat, NatSum, Pred, Succ, N0, N1, N10, N11, N12, N13, N14,
        N15, N16, N2, N3, N4, N5, N6, N7, N8, N9, S, Z,
    };
    pub use crate::word::{
        And8, HighHalf, IsEven, IsOdd, LowHalf, Max4, Max8, Not8, One4, One8, Or8, Pow2, Pow2_0,
        Pow2_1, Pow2_2, Pow2_3, Pow2_4, Pow2_5, Pow2_6, Pow2_7, Shl1, ShlN, Shr1, ShrN, Sum4,
        Sum8, Widen, Word, Xor8, Zero4, Zero8, W4, W8,
    };
    pub use crate::static_assert;
    pub use macros::{bits, nat, nats, w4, w8};
}
