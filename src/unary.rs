//! Tally-encoded natural numbers.
//!
//! A number is its nesting depth: `Z` is zero, `S<N>` is one more than
//! `N`. Comparisons return the bits from [`crate::bit`], so boolean
//! algebra composes directly with comparison results.

use core::marker::PhantomData;

use crate::bit::{Bit, Or, B0, B1};

// =============================================================================
// Nat trait and types
// =============================================================================

/// Type-level natural number.
pub trait Nat: 'static {
    const VALUE: usize;
}

/// Zero (base case).
pub struct Z;
impl Nat for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1).
pub struct S<N>(PhantomData<N>);
impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Successor alias.
pub type Succ<N> = S<N>;

// Generate N0..N16 using proc-macro
macros::nats!(16);

// =============================================================================
// Predecessor
// =============================================================================

/// Predecessor. Defined for successors only: `Pred<Z>` does not resolve,
/// and a use of it is a compile error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no predecessor",
    label = "tally numbers stop at zero; only a successor can step down"
)]
pub trait NatPred: Nat {
    type Out: Nat;
}

impl<N: Nat> NatPred for S<N> {
    type Out = N;
}

pub type Pred<N> = <N as NatPred>::Out;

// =============================================================================
// Addition
// =============================================================================

/// Addition by structural recursion on the left operand.
pub trait NatAdd<Rhs: Nat>: Nat {
    type Out: Nat;
}

impl<R: Nat> NatAdd<R> for Z {
    type Out = R;
}

impl<L, R: Nat> NatAdd<R> for S<L>
where
    L: NatAdd<R>,
{
    type Out = S<<L as NatAdd<R>>::Out>;
}

pub type NatSum<L, R> = <L as NatAdd<R>>::Out;

// =============================================================================
// Comparison
// =============================================================================

/// Strict less-than by simultaneous structural descent.
pub trait NatLt<Rhs: Nat>: Nat {
    type Out: Bit;
}

impl NatLt<Z> for Z {
    type Out = B0;
}

impl<R: Nat> NatLt<S<R>> for Z {
    type Out = B1;
}

impl<L: Nat> NatLt<Z> for S<L> {
    type Out = B0;
}

impl<L: Nat, R: Nat> NatLt<S<R>> for S<L>
where
    L: NatLt<R>,
{
    type Out = <L as NatLt<R>>::Out;
}

/// Structural equality.
pub trait NatEq<Rhs: Nat>: Nat {
    type Out: Bit;
}

impl NatEq<Z> for Z {
    type Out = B1;
}

impl<R: Nat> NatEq<S<R>> for Z {
    type Out = B0;
}

impl<L: Nat> NatEq<Z> for S<L> {
    type Out = B0;
}

impl<L: Nat, R: Nat> NatEq<S<R>> for S<L>
where
    L: NatEq<R>,
{
    type Out = <L as NatEq<R>>::Out;
}

/// `B1` when `L < R`.
pub type IsLt<L, R> = <L as NatLt<R>>::Out;

/// `B1` when `L > R`; less-than with the arguments swapped.
pub type IsGt<L, R> = IsLt<R, L>;

/// `B1` when `L == R`.
pub type IsEq<L, R> = <L as NatEq<R>>::Out;

/// `B1` when `L <= R`.
pub type IsLe<L, R> = Or<IsLt<L, R>, IsEq<L, R>>;

/// `B1` when `L >= R`.
pub type IsGe<L, R> = Or<IsGt<L, R>, IsEq<L, R>>;
