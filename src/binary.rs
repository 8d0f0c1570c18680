//! Variable-width binary numbers.
//!
//! A number is a cons list of bits with the least significant bit at the
//! head, terminated by `Nil`. The list's length is the width, and every
//! operation preserves it: addition and its derivatives wrap at the
//! operand width, and the bitwise zips are only defined when both
//! operands have the same width, so a mismatch fails to resolve at all.
//!
//! Recursive operations follow one of two shapes. Structural recursion
//! (`Nil` base, `Lsb` step) covers the maps and folds; value recursion
//! (multiplication, factorial) tests the operand with [`IsZero`] and
//! dispatches on the resulting bit through a helper trait implemented for
//! `B1` and `B0`.

use core::marker::PhantomData;

use crate::bit::{AdderCarry, AdderSum, And, Bit, Not, Or, Xor, B0, B1};
use crate::unary::{Nat, S, Z};

// =============================================================================
// Bits trait and types
// =============================================================================

/// The empty bit string (width 0).
pub struct Nil;

/// One bit and the rest; the head is the least significant bit.
pub struct Lsb<B, Rest>(PhantomData<(B, Rest)>);

/// Bit-string reification.
pub trait Bits: 'static {
    const WIDTH: u32;
    const VALUE: u64;
}

impl Bits for Nil {
    const WIDTH: u32 = 0;
    const VALUE: u64 = 0;
}

impl<B: Bit, Rest: Bits> Bits for Lsb<B, Rest> {
    const WIDTH: u32 = 1 + Rest::WIDTH;
    const VALUE: u64 = B::VALUE as u64 | (Rest::VALUE << 1);
}

// =============================================================================
// Shape-preserving constants
// =============================================================================

/// All-zero value of the same width.
pub trait BitsZero: Bits {
    type Out: Bits;
}

impl BitsZero for Nil {
    type Out = Nil;
}

impl<B: Bit, Rest: Bits + BitsZero> BitsZero for Lsb<B, Rest> {
    type Out = Lsb<B0, <Rest as BitsZero>::Out>;
}

/// One, at the same width. Width zero stays empty.
pub trait BitsOne: Bits {
    type Out: Bits;
}

impl BitsOne for Nil {
    type Out = Nil;
}

impl<B: Bit, Rest: Bits + BitsZero> BitsOne for Lsb<B, Rest> {
    type Out = Lsb<B1, <Rest as BitsZero>::Out>;
}

pub type Zeroed<N> = <N as BitsZero>::Out;
pub type OneLike<N> = <N as BitsOne>::Out;

// =============================================================================
// Bitwise operations
// =============================================================================

/// Bitwise complement, width preserving.
pub trait BitsNot: Bits {
    type Out: Bits;
}

impl BitsNot for Nil {
    type Out = Nil;
}

impl<B: Bit, Rest: Bits + BitsNot> BitsNot for Lsb<B, Rest> {
    type Out = Lsb<Not<B>, <Rest as BitsNot>::Out>;
}

/// Bitwise AND. Only equal widths zip; a mismatch does not resolve.
#[diagnostic::on_unimplemented(
    message = "cannot AND `{Self}` with `{Rhs}`",
    label = "bitwise operations require two bit strings of the same width"
)]
pub trait BitsAnd<Rhs: Bits>: Bits {
    type Out: Bits;
}

impl BitsAnd<Nil> for Nil {
    type Out = Nil;
}

impl<LB: Bit, LR, RB: Bit, RR: Bits> BitsAnd<Lsb<RB, RR>> for Lsb<LB, LR>
where
    LR: BitsAnd<RR>,
{
    type Out = Lsb<And<LB, RB>, <LR as BitsAnd<RR>>::Out>;
}

/// Bitwise OR. Only equal widths zip; a mismatch does not resolve.
#[diagnostic::on_unimplemented(
    message = "cannot OR `{Self}` with `{Rhs}`",
    label = "bitwise operations require two bit strings of the same width"
)]
pub trait BitsOr<Rhs: Bits>: Bits {
    type Out: Bits;
}

impl BitsOr<Nil> for Nil {
    type Out = Nil;
}

impl<LB: Bit, LR, RB: Bit, RR: Bits> BitsOr<Lsb<RB, RR>> for Lsb<LB, LR>
where
    LR: BitsOr<RR>,
{
    type Out = Lsb<Or<LB, RB>, <LR as BitsOr<RR>>::Out>;
}

/// Bitwise XOR. Only equal widths zip; a mismatch does not resolve.
#[diagnostic::on_unimplemented(
    message = "cannot XOR `{Self}` with `{Rhs}`",
    label = "bitwise operations require two bit strings of the same width"
)]
pub trait BitsXor<Rhs: Bits>: Bits {
    type Out: Bits;
}

impl BitsXor<Nil> for Nil {
    type Out = Nil;
}

impl<LB: Bit, LR, RB: Bit, RR: Bits> BitsXor<Lsb<RB, RR>> for Lsb<LB, LR>
where
    LR: BitsXor<RR>,
{
    type Out = Lsb<Xor<LB, RB>, <LR as BitsXor<RR>>::Out>;
}

pub type BNot<N> = <N as BitsNot>::Out;
pub type BAnd<L, R> = <L as BitsAnd<R>>::Out;
pub type BOr<L, R> = <L as BitsOr<R>>::Out;
pub type BXor<L, R> = <L as BitsXor<R>>::Out;

// =============================================================================
// Addition
// =============================================================================

/// Ripple addition with an explicit carry-in. Heads go through the full
/// adder, tails recurse with the head's carry; the carry out of the last
/// position is consumed, so the sum wraps at the operand width.
pub trait AddCarry<Rhs: Bits, Cin: Bit>: Bits {
    type Out: Bits;
}

impl<Cin: Bit> AddCarry<Nil, Cin> for Nil {
    type Out = Nil;
}

impl<LB: Bit, LR, RB: Bit, RR: Bits, Cin: Bit> AddCarry<Lsb<RB, RR>, Cin> for Lsb<LB, LR>
where
    LR: AddCarry<RR, AdderCarry<LB, RB, Cin>>,
{
    type Out = Lsb<AdderSum<LB, RB, Cin>, <LR as AddCarry<RR, AdderCarry<LB, RB, Cin>>>::Out>;
}

/// Addition, modular at the operand width.
pub trait BitsAdd<Rhs: Bits>: Bits {
    type Out: Bits;
}

impl<L: Bits, R: Bits> BitsAdd<R> for L
where
    L: AddCarry<R, B0>,
{
    type Out = <L as AddCarry<R, B0>>::Out;
}

pub type Sum<L, R> = <L as BitsAdd<R>>::Out;

// =============================================================================
// Increment / decrement
// =============================================================================

/// Add one: ripple a carry up from the bottom.
pub trait BitsInc: Bits {
    type Out: Bits;
}

impl BitsInc for Nil {
    type Out = Nil;
}

impl<Rest: Bits> BitsInc for Lsb<B0, Rest> {
    type Out = Lsb<B1, Rest>;
}

impl<Rest: Bits + BitsInc> BitsInc for Lsb<B1, Rest> {
    type Out = Lsb<B0, <Rest as BitsInc>::Out>;
}

/// Subtract one: ripple a borrow up from the bottom. Zero wraps to the
/// all-ones value.
pub trait BitsDec: Bits {
    type Out: Bits;
}

impl BitsDec for Nil {
    type Out = Nil;
}

impl<Rest: Bits> BitsDec for Lsb<B1, Rest> {
    type Out = Lsb<B0, Rest>;
}

impl<Rest: Bits + BitsDec> BitsDec for Lsb<B0, Rest> {
    type Out = Lsb<B1, <Rest as BitsDec>::Out>;
}

pub type Inc<N> = <N as BitsInc>::Out;
pub type Dec<N> = <N as BitsDec>::Out;

// =============================================================================
// Negation and subtraction
// =============================================================================

/// Two's complement: bitwise NOT, plus one.
pub trait BitsNeg: Bits {
    type Out: Bits;
}

impl<N: Bits> BitsNeg for N
where
    N: BitsNot,
    <N as BitsNot>::Out: BitsInc,
{
    type Out = <<N as BitsNot>::Out as BitsInc>::Out;
}

/// Subtraction: add the two's complement of the right operand.
pub trait BitsSub<Rhs: Bits>: Bits {
    type Out: Bits;
}

impl<L: Bits, R: Bits> BitsSub<R> for L
where
    R: BitsNeg,
    L: BitsAdd<<R as BitsNeg>::Out>,
{
    type Out = <L as BitsAdd<<R as BitsNeg>::Out>>::Out;
}

pub type Neg<N> = <N as BitsNeg>::Out;
pub type Diff<L, R> = <L as BitsSub<R>>::Out;

// =============================================================================
// Zero test
// =============================================================================

/// `B1` exactly when every bit is clear.
pub trait BitsIsZero: Bits {
    type Out: Bit;
}

impl BitsIsZero for Nil {
    type Out = B1;
}

impl<B: Bit, Rest: Bits + BitsIsZero> BitsIsZero for Lsb<B, Rest> {
    type Out = And<Not<B>, <Rest as BitsIsZero>::Out>;
}

pub type IsZero<N> = <N as BitsIsZero>::Out;

// =============================================================================
// Multiplication
// =============================================================================

/// Multiplication by repeated addition: `L * R = L + L * (R - 1)`,
/// recursing until an operand reaches zero.
pub trait BitsMul<Rhs: Bits>: Bits {
    type Out: Bits;
}

impl<L: Bits, R: Bits> BitsMul<R> for L
where
    L: BitsIsZero,
    <L as BitsIsZero>::Out: MulLhsDispatch<L, R>,
{
    type Out = <<L as BitsIsZero>::Out as MulLhsDispatch<L, R>>::Out;
}

pub type Prod<L, R> = <L as BitsMul<R>>::Out;

/// Step selected by the zero test on the left operand: zero
/// short-circuits, anything else moves on to the right operand.
pub trait MulLhsDispatch<L, R> {
    type Out: Bits;
}

impl<L: Bits + BitsZero, R> MulLhsDispatch<L, R> for B1 {
    type Out = <L as BitsZero>::Out;
}

impl<L, R> MulLhsDispatch<L, R> for B0
where
    R: BitsIsZero,
    <R as BitsIsZero>::Out: MulRhsDispatch<L, R>,
{
    type Out = <<R as BitsIsZero>::Out as MulRhsDispatch<L, R>>::Out;
}

/// Step selected by the zero test on the right operand: zero ends the
/// recursion, anything else adds `L` once and recurses on `R - 1`.
pub trait MulRhsDispatch<L, R> {
    type Out: Bits;
}

impl<L: Bits + BitsZero, R> MulRhsDispatch<L, R> for B1 {
    type Out = <L as BitsZero>::Out;
}

impl<L, R> MulRhsDispatch<L, R> for B0
where
    R: BitsDec,
    L: BitsMul<<R as BitsDec>::Out>,
    L: BitsAdd<<L as BitsMul<<R as BitsDec>::Out>>::Out>,
{
    type Out = <L as BitsAdd<<L as BitsMul<<R as BitsDec>::Out>>::Out>>::Out;
}

// =============================================================================
// Shifts
// =============================================================================

/// Everything below the top bit.
pub trait AllButMsb: Bits {
    type Out: Bits;
}

impl<B: Bit> AllButMsb for Lsb<B, Nil> {
    type Out = Nil;
}

impl<B: Bit, B2: Bit, R: Bits> AllButMsb for Lsb<B, Lsb<B2, R>>
where
    Lsb<B2, R>: AllButMsb,
{
    type Out = Lsb<B, <Lsb<B2, R> as AllButMsb>::Out>;
}

/// Append a bit above the top position.
pub trait PushMsb<B: Bit>: Bits {
    type Out: Bits;
}

impl<B: Bit> PushMsb<B> for Nil {
    type Out = Lsb<B, Nil>;
}

impl<B: Bit, H: Bit, R: Bits> PushMsb<B> for Lsb<H, R>
where
    R: PushMsb<B>,
{
    type Out = Lsb<H, <R as PushMsb<B>>::Out>;
}

/// Left shift by one: a zero enters at the bottom, the top bit leaves.
pub trait BitsShl: Bits {
    type Out: Bits;
}

impl BitsShl for Nil {
    type Out = Nil;
}

impl<B: Bit, R: Bits> BitsShl for Lsb<B, R>
where
    Lsb<B, R>: AllButMsb,
{
    type Out = Lsb<B0, <Lsb<B, R> as AllButMsb>::Out>;
}

/// Right shift by one: the bottom bit leaves, a zero enters at the top.
pub trait BitsShr: Bits {
    type Out: Bits;
}

impl BitsShr for Nil {
    type Out = Nil;
}

impl<B: Bit, R: Bits> BitsShr for Lsb<B, R>
where
    R: PushMsb<B0>,
{
    type Out = <R as PushMsb<B0>>::Out;
}

pub type Shl<N> = <N as BitsShl>::Out;
pub type Shr<N> = <N as BitsShr>::Out;

/// Left shift by a tally count.
pub trait BitsShlBy<D: Nat>: Bits {
    type Out: Bits;
}

impl<N: Bits> BitsShlBy<Z> for N {
    type Out = N;
}

impl<N: Bits, D: Nat> BitsShlBy<S<D>> for N
where
    N: BitsShl,
    <N as BitsShl>::Out: BitsShlBy<D>,
{
    type Out = <<N as BitsShl>::Out as BitsShlBy<D>>::Out;
}

/// Right shift by a tally count.
pub trait BitsShrBy<D: Nat>: Bits {
    type Out: Bits;
}

impl<N: Bits> BitsShrBy<Z> for N {
    type Out = N;
}

impl<N: Bits, D: Nat> BitsShrBy<S<D>> for N
where
    N: BitsShr,
    <N as BitsShr>::Out: BitsShrBy<D>,
{
    type Out = <<N as BitsShr>::Out as BitsShrBy<D>>::Out;
}

pub type ShlBy<N, D> = <N as BitsShlBy<D>>::Out;
pub type ShrBy<N, D> = <N as BitsShrBy<D>>::Out;

// =============================================================================
// Indexing
// =============================================================================

/// The bit at a tally-indexed position, counting from the bottom.
/// Positions at or past the width do not resolve.
#[diagnostic::on_unimplemented(
    message = "no bit at position `{D}` of `{Self}`",
    label = "positions at or past the width do not resolve"
)]
pub trait BitsAt<D: Nat>: Bits {
    type Out: Bit;
}

impl<B: Bit, R: Bits> BitsAt<Z> for Lsb<B, R> {
    type Out = B;
}

impl<B: Bit, R: Bits, D: Nat> BitsAt<S<D>> for Lsb<B, R>
where
    R: BitsAt<D>,
{
    type Out = <R as BitsAt<D>>::Out;
}

pub type BitAt<N, D> = <N as BitsAt<D>>::Out;

// =============================================================================
// Factorial
// =============================================================================

/// Factorial by repeated multiplication, recursing until zero.
pub trait BitsFact: Bits {
    type Out: Bits;
}

impl<N: Bits> BitsFact for N
where
    N: BitsIsZero,
    <N as BitsIsZero>::Out: FactDispatch<N>,
{
    type Out = <<N as BitsIsZero>::Out as FactDispatch<N>>::Out;
}

pub type Fact<N> = <N as BitsFact>::Out;

/// Step selected by the zero test: zero gives one, anything else gives
/// `N * (N - 1)!`.
pub trait FactDispatch<N> {
    type Out: Bits;
}

impl<N: Bits + BitsOne> FactDispatch<N> for B1 {
    type Out = <N as BitsOne>::Out;
}

impl<N> FactDispatch<N> for B0
where
    N: BitsDec,
    <N as BitsDec>::Out: BitsFact,
    N: BitsMul<<<N as BitsDec>::Out as BitsFact>::Out>,
{
    type Out = <N as BitsMul<<<N as BitsDec>::Out as BitsFact>::Out>>::Out;
}

// =============================================================================
// Width
// =============================================================================

/// The width as a tally number.
pub trait BitsWidth: Bits {
    type Out: Nat;
}

impl BitsWidth for Nil {
    type Out = Z;
}

impl<B: Bit, R: Bits + BitsWidth> BitsWidth for Lsb<B, R> {
    type Out = S<<R as BitsWidth>::Out>;
}

pub type WidthOf<N> = <N as BitsWidth>::Out;
