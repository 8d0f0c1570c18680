//! Type-level bits and boolean logic.
//!
//! Core types: `B1` (true), `B0` (false), the `Bit` trait, and the one-bit
//! full adder every arithmetic layer is built from.
//!
//! The same two types serve both readings: `B1`/`B0` are the boolean
//! constants of the logic layer and the bit literals of the numeric layers.

// =============================================================================
// Bit trait and types
// =============================================================================

/// Type-level bit.
///
/// The conditional selectors live on the trait as generic associated types;
/// the `: Bit` bounds on the operator outputs are what let nested
/// compositions (`Xor`, the full adder) resolve in fully generic contexts.
pub trait Bit: 'static {
    const VALUE: u8;
    const BOOL: bool;

    /// Conditional selector: `B1` picks `Then`, `B0` picks `Else`.
    type If<Then, Else>;

    /// The swapped selector: `B1` picks `Else`, `B0` picks `Then`.
    type IfNot<Then, Else>;

    /// Logical NOT.
    type Not: Bit;

    /// Logical AND: `If<Self, Rhs, False>`.
    type And<Rhs: Bit>: Bit;

    /// Logical OR: `If<Self, True, Rhs>`.
    type Or<Rhs: Bit>: Bit;
}

/// The set bit; type-level true.
#[derive(Debug)]
pub struct B1;

/// The clear bit; type-level false.
#[derive(Debug)]
pub struct B0;

impl Bit for B1 {
    const VALUE: u8 = 1;
    const BOOL: bool = true;

    type If<Then, Else> = Then;
    type IfNot<Then, Else> = Else;
    type Not = B0;
    type And<Rhs: Bit> = Rhs;
    type Or<Rhs: Bit> = B1;
}

impl Bit for B0 {
    const VALUE: u8 = 0;
    const BOOL: bool = false;

    type If<Then, Else> = Else;
    type IfNot<Then, Else> = Then;
    type Not = B1;
    type And<Rhs: Bit> = B0;
    type Or<Rhs: Bit> = Rhs;
}

/// Boolean reading of `B1`.
pub type True = B1;

/// Boolean reading of `B0`.
pub type False = B0;

// =============================================================================
// Operator aliases
// =============================================================================

/// Conditional type alias: `If<C, T, E>` is `T` when `C` is `B1`.
pub type If<C, T, E> = <C as Bit>::If<T, E>;

/// Negated conditional: `IfNot<C, T, E>` is `T` when `C` is `B0`.
pub type IfNot<C, T, E> = <C as Bit>::IfNot<T, E>;

/// Logical NOT.
pub type Not<C> = <C as Bit>::Not;

/// Logical AND.
pub type And<L, R> = <L as Bit>::And<R>;

/// Logical OR.
pub type Or<L, R> = <L as Bit>::Or<R>;

/// Exclusive OR, composed from the other operators:
/// `(L AND NOT R) OR (R AND NOT L)`.
pub type Xor<L, R> = Or<And<L, Not<R>>, And<R, Not<L>>>;

// =============================================================================
// Projection traits
// =============================================================================
//
// Operator-per-trait forms of the same operations, for code that wants a
// single where-clause bound and an `::Out` to project.

pub trait BitAnd<Rhs: Bit>: Bit {
    type Out: Bit;
}
impl<L: Bit, R: Bit> BitAnd<R> for L {
    type Out = L::And<R>;
}

pub trait BitOr<Rhs: Bit>: Bit {
    type Out: Bit;
}
impl<L: Bit, R: Bit> BitOr<R> for L {
    type Out = L::Or<R>;
}

pub trait BitXor<Rhs: Bit>: Bit {
    type Out: Bit;
}
impl<L: Bit, R: Bit> BitXor<R> for L {
    type Out = Xor<L, R>;
}

/// Type-level NOT, per variant.
pub trait BitNot: Bit {
    type Out: Bit;
}

impl BitNot for B1 {
    type Out = B0;
}

impl BitNot for B0 {
    type Out = B1;
}

// =============================================================================
// Const to type mapping
// =============================================================================

/// Convert a const bool to a type-level bit.
pub trait SelectBit<const B: bool> {
    type Out: Bit;
}

impl SelectBit<true> for () {
    type Out = B1;
}

impl SelectBit<false> for () {
    type Out = B0;
}

/// The bit corresponding to a const bool.
pub type FromBool<const B: bool> = <() as SelectBit<B>>::Out;

// =============================================================================
// Full adder
// =============================================================================

/// One-bit full adder: two operand bits plus a carry-in give a sum bit and
/// a carry-out. Multi-bit addition chains this positionally.
pub trait FullAdd<Rhs: Bit, Cin: Bit>: Bit {
    type Sum: Bit;
    type Carry: Bit;
}

impl<A: Bit, B: Bit, C: Bit> FullAdd<B, C> for A {
    type Sum = Xor<Xor<A, B>, C>;
    type Carry = Or<And<Xor<A, B>, C>, And<A, B>>;
}

/// The sum bit of `A + B + Cin`.
pub type AdderSum<A, B, Cin> = <A as FullAdd<B, Cin>>::Sum;

/// The carry bit out of `A + B + Cin`.
pub type AdderCarry<A, B, Cin> = <A as FullAdd<B, Cin>>::Carry;
