//! Truth tables for the bit layer.
//!
//! Everything here is checked by the type checker; the few `#[test]`
//! functions only reify results that were already decided at compile time.

use typebits::prelude::*;
use typebits::static_assert;
use typebits::{BitAnd, BitNot, BitOr, BitXor};

// =============================================================================
// NOT / AND / OR
// =============================================================================

static_assert!(Not<B1>, B0);
static_assert!(Not<B0>, B1);
static_assert!(Not<Not<B1>>, B1);

static_assert!(And<B1, B1>, B1);
static_assert!(And<B1, B0>, B0);
static_assert!(And<B0, B1>, B0);
static_assert!(And<B0, B0>, B0);

static_assert!(Or<B1, B1>, B1);
static_assert!(Or<B1, B0>, B1);
static_assert!(Or<B0, B1>, B1);
static_assert!(Or<B0, B0>, B0);

// =============================================================================
// XOR, composed from AND / OR / NOT
// =============================================================================

static_assert!(Xor<B1, B1>, B0);
static_assert!(Xor<B1, B0>, B1);
static_assert!(Xor<B0, B1>, B1);
static_assert!(Xor<B0, B0>, B0);

// De Morgan, spot checked.
static_assert!(Not<And<B1, B0>>, Or<Not<B1>, Not<B0>>);
static_assert!(Not<Or<B0, B0>>, And<Not<B0>, Not<B0>>);

// =============================================================================
// Conditional selection
// =============================================================================

#[allow(dead_code)]
struct Left;
#[allow(dead_code)]
struct Right;

static_assert!(If<B1, Left, Right>, Left);
static_assert!(If<B0, Left, Right>, Right);
static_assert!(IfNot<B1, Left, Right>, Right);
static_assert!(IfNot<B0, Left, Right>, Left);

// The condition may itself be computed.
static_assert!(If<And<B1, Or<B0, B1>>, Left, Right>, Left);
static_assert!(If<Xor<B1, B1>, Left, Right>, Right);

// =============================================================================
// Const bool bridge
// =============================================================================

static_assert!(FromBool<true>, B1);
static_assert!(FromBool<false>, B0);
static_assert!(FromBool<{ 8 % 2 == 0 }>, B1);

// =============================================================================
// Full adder, all eight rows
// =============================================================================

static_assert!(AdderSum<B0, B0, B0>, B0);
static_assert!(AdderCarry<B0, B0, B0>, B0);
static_assert!(AdderSum<B0, B0, B1>, B1);
static_assert!(AdderCarry<B0, B0, B1>, B0);
static_assert!(AdderSum<B0, B1, B0>, B1);
static_assert!(AdderCarry<B0, B1, B0>, B0);
static_assert!(AdderSum<B0, B1, B1>, B0);
static_assert!(AdderCarry<B0, B1, B1>, B1);
static_assert!(AdderSum<B1, B0, B0>, B1);
static_assert!(AdderCarry<B1, B0, B0>, B0);
static_assert!(AdderSum<B1, B0, B1>, B0);
static_assert!(AdderCarry<B1, B0, B1>, B1);
static_assert!(AdderSum<B1, B1, B0>, B0);
static_assert!(AdderCarry<B1, B1, B0>, B1);
static_assert!(AdderSum<B1, B1, B1>, B1);
static_assert!(AdderCarry<B1, B1, B1>, B1);

// =============================================================================
// Generic contexts
// =============================================================================

// The adder's sum bit, usable with the operands still abstract.
fn sum_bit<A: Bit, B: Bit, C: Bit>() -> u8 {
    <AdderSum<A, B, C>>::VALUE
}

fn xor_value<L, R>() -> u8
where
    L: BitXor<R>,
    R: Bit,
{
    <L as BitXor<R>>::Out::VALUE
}

fn nand_value<L, R>() -> u8
where
    L: BitAnd<R>,
    R: Bit,
    <L as BitAnd<R>>::Out: BitNot,
{
    <<L as BitAnd<R>>::Out as BitNot>::Out::VALUE
}

#[test]
fn test_reified_constants() {
    assert_eq!(B1::VALUE, 1);
    assert_eq!(B0::VALUE, 0);
    assert!(B1::BOOL);
    assert!(!B0::BOOL);
    assert_eq!(<And<B1, B0>>::VALUE, 0);
    assert_eq!(<Xor<B1, B0>>::VALUE, 1);
}

#[test]
fn test_generic_projections() {
    assert_eq!(sum_bit::<B1, B0, B0>(), 1);
    assert_eq!(sum_bit::<B1, B1, B0>(), 0);
    assert_eq!(sum_bit::<B1, B1, B1>(), 1);
    assert_eq!(xor_value::<B1, B0>(), 1);
    assert_eq!(xor_value::<B1, B1>(), 0);
    assert_eq!(nand_value::<B1, B1>(), 0);
    assert_eq!(nand_value::<B0, B1>(), 1);
}

#[test]
fn test_boolean_reading() {
    // `True` and `False` are the same types as `B1` and `B0`.
    assert_eq!(True::VALUE, 1);
    assert_eq!(False::VALUE, 0);
    let _: &dyn std::fmt::Debug = &B1;
}

#[test]
fn test_projection_traits_agree_with_aliases() {
    fn both_or<L, R>() -> (u8, u8)
    where
        L: BitOr<R>,
        R: Bit,
    {
        (<Or<L, R>>::VALUE, <L as BitOr<R>>::Out::VALUE)
    }
    assert_eq!(both_or::<B0, B1>(), (1, 1));
    assert_eq!(both_or::<B0, B0>(), (0, 0));
}
