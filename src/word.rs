//! Fixed-width binary words (4 and 8 bits).
//!
//! A word is a struct with one type parameter per bit position, written
//! most significant first. Arithmetic is the one-bit full adder from
//! [`crate::bit`] composed positionally, with the carry rippling from
//! position 0 upward and the final carry dropped, so every operation
//! wraps at the word width.

use core::marker::PhantomData;

use crate::bit::{AdderCarry, AdderSum, And, Bit, Not, Or, Xor, B0, B1};
use crate::unary::{Nat, S, Z};

// =============================================================================
// Word types
// =============================================================================

/// 4-bit word; parameters are most significant first.
pub struct W4<A3, A2, A1, A0>(PhantomData<(A3, A2, A1, A0)>);

/// 8-bit word; parameters are most significant first.
pub struct W8<A7, A6, A5, A4, A3, A2, A1, A0>(
    PhantomData<(A7, A6, A5, A4, A3, A2, A1, A0)>,
);

/// Fixed-width word reification.
pub trait Word: 'static {
    const WIDTH: u32;
    const VALUE: u8;
}

impl<A3: Bit, A2: Bit, A1: Bit, A0: Bit> Word for W4<A3, A2, A1, A0> {
    const WIDTH: u32 = 4;
    const VALUE: u8 = (A3::VALUE << 3) | (A2::VALUE << 2) | (A1::VALUE << 1) | A0::VALUE;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> Word
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    const WIDTH: u32 = 8;
    const VALUE: u8 = (A7::VALUE << 7)
        | (A6::VALUE << 6)
        | (A5::VALUE << 5)
        | (A4::VALUE << 4)
        | (A3::VALUE << 3)
        | (A2::VALUE << 2)
        | (A1::VALUE << 1)
        | A0::VALUE;
}

pub type Zero4 = W4<B0, B0, B0, B0>;
pub type One4 = W4<B0, B0, B0, B1>;
pub type Max4 = W4<B1, B1, B1, B1>;
pub type Zero8 = W8<B0, B0, B0, B0, B0, B0, B0, B0>;
pub type One8 = W8<B0, B0, B0, B0, B0, B0, B0, B1>;
pub type Max8 = W8<B1, B1, B1, B1, B1, B1, B1, B1>;

// =============================================================================
// Addition - positional carry ripple
// =============================================================================

// Carry into position k, computed from the operand bits below k.
type Carry1<L0, R0> = AdderCarry<L0, R0, B0>;
type Carry2<L1, R1, L0, R0> = AdderCarry<L1, R1, Carry1<L0, R0>>;
type Carry3<L2, R2, L1, R1, L0, R0> = AdderCarry<L2, R2, Carry2<L1, R1, L0, R0>>;
type Carry4<L3, R3, L2, R2, L1, R1, L0, R0> =
    AdderCarry<L3, R3, Carry3<L2, R2, L1, R1, L0, R0>>;
type Carry5<L4, R4, L3, R3, L2, R2, L1, R1, L0, R0> =
    AdderCarry<L4, R4, Carry4<L3, R3, L2, R2, L1, R1, L0, R0>>;
type Carry6<L5, R5, L4, R4, L3, R3, L2, R2, L1, R1, L0, R0> =
    AdderCarry<L5, R5, Carry5<L4, R4, L3, R3, L2, R2, L1, R1, L0, R0>>;
type Carry7<L6, R6, L5, R5, L4, R4, L3, R3, L2, R2, L1, R1, L0, R0> =
    AdderCarry<L6, R6, Carry6<L5, R5, L4, R4, L3, R3, L2, R2, L1, R1, L0, R0>>;

/// Word addition. The carry out of the top position is dropped, so the
/// sum wraps modulo 2^WIDTH.
pub trait WordAdd<Rhs: Word>: Word {
    type Out: Word;
}

impl<L3, L2, L1, L0, R3, R2, R1, R0> WordAdd<W4<R3, R2, R1, R0>> for W4<L3, L2, L1, L0>
where
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W4<
        AdderSum<L3, R3, Carry3<L2, R2, L1, R1, L0, R0>>,
        AdderSum<L2, R2, Carry2<L1, R1, L0, R0>>,
        AdderSum<L1, R1, Carry1<L0, R0>>,
        AdderSum<L0, R0, B0>,
    >;
}

impl<L7, L6, L5, L4, L3, L2, L1, L0, R7, R6, R5, R4, R3, R2, R1, R0>
    WordAdd<W8<R7, R6, R5, R4, R3, R2, R1, R0>> for W8<L7, L6, L5, L4, L3, L2, L1, L0>
where
    L7: Bit,
    L6: Bit,
    L5: Bit,
    L4: Bit,
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R7: Bit,
    R6: Bit,
    R5: Bit,
    R4: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W8<
        AdderSum<L7, R7, Carry7<L6, R6, L5, R5, L4, R4, L3, R3, L2, R2, L1, R1, L0, R0>>,
        AdderSum<L6, R6, Carry6<L5, R5, L4, R4, L3, R3, L2, R2, L1, R1, L0, R0>>,
        AdderSum<L5, R5, Carry5<L4, R4, L3, R3, L2, R2, L1, R1, L0, R0>>,
        AdderSum<L4, R4, Carry4<L3, R3, L2, R2, L1, R1, L0, R0>>,
        AdderSum<L3, R3, Carry3<L2, R2, L1, R1, L0, R0>>,
        AdderSum<L2, R2, Carry2<L1, R1, L0, R0>>,
        AdderSum<L1, R1, Carry1<L0, R0>>,
        AdderSum<L0, R0, B0>,
    >;
}

/// Addition at width 4.
pub type Sum4<L, R> = <L as WordAdd<R>>::Out;

/// Addition at width 8.
pub type Sum8<L, R> = <L as WordAdd<R>>::Out;

// =============================================================================
// Bitwise operations
// =============================================================================

/// Bitwise AND over matching positions.
pub trait WordAnd<Rhs: Word>: Word {
    type Out: Word;
}

impl<L3, L2, L1, L0, R3, R2, R1, R0> WordAnd<W4<R3, R2, R1, R0>> for W4<L3, L2, L1, L0>
where
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W4<And<L3, R3>, And<L2, R2>, And<L1, R1>, And<L0, R0>>;
}

impl<L7, L6, L5, L4, L3, L2, L1, L0, R7, R6, R5, R4, R3, R2, R1, R0>
    WordAnd<W8<R7, R6, R5, R4, R3, R2, R1, R0>> for W8<L7, L6, L5, L4, L3, L2, L1, L0>
where
    L7: Bit,
    L6: Bit,
    L5: Bit,
    L4: Bit,
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R7: Bit,
    R6: Bit,
    R5: Bit,
    R4: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W8<
        And<L7, R7>,
        And<L6, R6>,
        And<L5, R5>,
        And<L4, R4>,
        And<L3, R3>,
        And<L2, R2>,
        And<L1, R1>,
        And<L0, R0>,
    >;
}

/// Bitwise OR over matching positions.
pub trait WordOr<Rhs: Word>: Word {
    type Out: Word;
}

impl<L3, L2, L1, L0, R3, R2, R1, R0> WordOr<W4<R3, R2, R1, R0>> for W4<L3, L2, L1, L0>
where
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W4<Or<L3, R3>, Or<L2, R2>, Or<L1, R1>, Or<L0, R0>>;
}

impl<L7, L6, L5, L4, L3, L2, L1, L0, R7, R6, R5, R4, R3, R2, R1, R0>
    WordOr<W8<R7, R6, R5, R4, R3, R2, R1, R0>> for W8<L7, L6, L5, L4, L3, L2, L1, L0>
where
    L7: Bit,
    L6: Bit,
    L5: Bit,
    L4: Bit,
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R7: Bit,
    R6: Bit,
    R5: Bit,
    R4: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W8<
        Or<L7, R7>,
        Or<L6, R6>,
        Or<L5, R5>,
        Or<L4, R4>,
        Or<L3, R3>,
        Or<L2, R2>,
        Or<L1, R1>,
        Or<L0, R0>,
    >;
}

/// Bitwise XOR over matching positions.
pub trait WordXor<Rhs: Word>: Word {
    type Out: Word;
}

impl<L3, L2, L1, L0, R3, R2, R1, R0> WordXor<W4<R3, R2, R1, R0>> for W4<L3, L2, L1, L0>
where
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W4<Xor<L3, R3>, Xor<L2, R2>, Xor<L1, R1>, Xor<L0, R0>>;
}

impl<L7, L6, L5, L4, L3, L2, L1, L0, R7, R6, R5, R4, R3, R2, R1, R0>
    WordXor<W8<R7, R6, R5, R4, R3, R2, R1, R0>> for W8<L7, L6, L5, L4, L3, L2, L1, L0>
where
    L7: Bit,
    L6: Bit,
    L5: Bit,
    L4: Bit,
    L3: Bit,
    L2: Bit,
    L1: Bit,
    L0: Bit,
    R7: Bit,
    R6: Bit,
    R5: Bit,
    R4: Bit,
    R3: Bit,
    R2: Bit,
    R1: Bit,
    R0: Bit,
{
    type Out = W8<
        Xor<L7, R7>,
        Xor<L6, R6>,
        Xor<L5, R5>,
        Xor<L4, R4>,
        Xor<L3, R3>,
        Xor<L2, R2>,
        Xor<L1, R1>,
        Xor<L0, R0>,
    >;
}

/// Bitwise complement.
pub trait WordNot: Word {
    type Out: Word;
}

impl<A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordNot for W4<A3, A2, A1, A0> {
    type Out = W4<Not<A3>, Not<A2>, Not<A1>, Not<A0>>;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordNot
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    type Out = W8<Not<A7>, Not<A6>, Not<A5>, Not<A4>, Not<A3>, Not<A2>, Not<A1>, Not<A0>>;
}

/// Bitwise AND at width 8.
pub type And8<L, R> = <L as WordAnd<R>>::Out;

/// Bitwise OR at width 8.
pub type Or8<L, R> = <L as WordOr<R>>::Out;

/// Bitwise XOR at width 8.
pub type Xor8<L, R> = <L as WordXor<R>>::Out;

/// Bitwise complement at width 8.
pub type Not8<W> = <W as WordNot>::Out;

// =============================================================================
// Shifts
// =============================================================================

/// Left shift by one: the top bit leaves, the bottom fills with zero.
pub trait WordShl: Word {
    type Out: Word;
}

impl<A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordShl for W4<A3, A2, A1, A0> {
    type Out = W4<A2, A1, A0, B0>;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordShl
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    type Out = W8<A6, A5, A4, A3, A2, A1, A0, B0>;
}

/// Right shift by one: the bottom bit leaves, the top fills with zero.
pub trait WordShr: Word {
    type Out: Word;
}

impl<A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordShr for W4<A3, A2, A1, A0> {
    type Out = W4<B0, A3, A2, A1>;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordShr
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    type Out = W8<B0, A7, A6, A5, A4, A3, A2, A1>;
}

pub type Shl1<W> = <W as WordShl>::Out;
pub type Shr1<W> = <W as WordShr>::Out;

/// Left shift by a tally count.
pub trait WordShlBy<D: Nat>: Word {
    type Out: Word;
}

impl<W: Word> WordShlBy<Z> for W {
    type Out = W;
}

impl<W, D: Nat> WordShlBy<S<D>> for W
where
    W: WordShl,
    <W as WordShl>::Out: WordShlBy<D>,
{
    type Out = <<W as WordShl>::Out as WordShlBy<D>>::Out;
}

/// Right shift by a tally count.
pub trait WordShrBy<D: Nat>: Word {
    type Out: Word;
}

impl<W: Word> WordShrBy<Z> for W {
    type Out = W;
}

impl<W, D: Nat> WordShrBy<S<D>> for W
where
    W: WordShr,
    <W as WordShr>::Out: WordShrBy<D>,
{
    type Out = <<W as WordShr>::Out as WordShrBy<D>>::Out;
}

/// Left shift by `D` positions.
pub type ShlN<W, D> = <W as WordShlBy<D>>::Out;

/// Right shift by `D` positions.
pub type ShrN<W, D> = <W as WordShrBy<D>>::Out;

// =============================================================================
// Halves
// =============================================================================

/// The low four bits of an 8-bit word.
pub trait WordLow: Word {
    type Out: Word;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordLow
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    type Out = W4<A3, A2, A1, A0>;
}

/// The high four bits of an 8-bit word.
pub trait WordHigh: Word {
    type Out: Word;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordHigh
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    type Out = W4<A7, A6, A5, A4>;
}

/// Join two 4-bit halves into an 8-bit word, high half first.
pub trait WordJoin<Lo: Word>: Word {
    type Out: Word;
}

impl<A7, A6, A5, A4, A3, A2, A1, A0> WordJoin<W4<A3, A2, A1, A0>> for W4<A7, A6, A5, A4>
where
    A7: Bit,
    A6: Bit,
    A5: Bit,
    A4: Bit,
    A3: Bit,
    A2: Bit,
    A1: Bit,
    A0: Bit,
{
    type Out = W8<A7, A6, A5, A4, A3, A2, A1, A0>;
}

pub type LowHalf<W> = <W as WordLow>::Out;
pub type HighHalf<W> = <W as WordHigh>::Out;
pub type Widen<Hi, Lo> = <Hi as WordJoin<Lo>>::Out;

// =============================================================================
// Powers of two
// =============================================================================

/// `2^D` as an 8-bit word: one, shifted left `D` times.
pub type Pow2<D> = ShlN<One8, D>;

macro_rules! pow2_aliases {
    ($($n:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("Bit ", stringify!($n), " set, all others clear.")]
                pub type [<Pow2_ $n>] = Pow2<crate::unary::[<N $n>]>;
            )*
        }
    };
}

pow2_aliases!(0, 1, 2, 3, 4, 5, 6, 7);

// =============================================================================
// Parity
// =============================================================================

/// The low bit of a word, read as a boolean.
pub trait WordParity: Word {
    type Odd: Bit;
}

impl<A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordParity for W4<A3, A2, A1, A0> {
    type Odd = A0;
}

impl<A7: Bit, A6: Bit, A5: Bit, A4: Bit, A3: Bit, A2: Bit, A1: Bit, A0: Bit> WordParity
    for W8<A7, A6, A5, A4, A3, A2, A1, A0>
{
    type Odd = A0;
}

/// `B1` when the word is odd.
pub type IsOdd<W> = <W as WordParity>::Odd;

/// `B1` when the word is even.
pub type IsEven<W> = Not<IsOdd<W>>;
