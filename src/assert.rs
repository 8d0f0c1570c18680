//! Compile-time assertions.
//!
//! There is nothing to run: an assertion here is a `const` item whose
//! well-formedness the type checker has to establish. If it resolves,
//! the property holds; if it does not, the build fails at the assertion.

use crate::bit::{Bit, B1};

/// Implemented exactly when the two types unify.
#[diagnostic::on_unimplemented(
    message = "type mismatch: `{Self}` is not the same type as `{Rhs}`",
    label = "these two types were asserted to be equal"
)]
pub trait Same<Rhs: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Assert at compile time that `A` and `B` are the same type.
///
/// Usable as an item (`const _: () = assert_same::<X, Y>();`) or inside a
/// test body.
pub const fn assert_same<A, B>()
where
    A: Same<B> + ?Sized,
    B: ?Sized,
{
}

/// Implemented for `B1` only.
#[diagnostic::on_unimplemented(
    message = "asserted condition evaluated to `B0`",
    label = "this type-level condition must evaluate to `B1`"
)]
pub trait Truthy: Bit {}

impl Truthy for B1 {}

/// Assert at compile time that a bit-valued expression is `B1`.
pub const fn assert_true<C: Truthy>() {}

/// Compile-time assertion items.
///
/// `static_assert!(A, B)` requires the two types to be identical;
/// `static_assert!(C)` requires the bit `C` to be `B1`.
#[macro_export]
macro_rules! static_assert {
    ($lhs:ty, $rhs:ty $(,)?) => {
        const _: () = $crate::assert::assert_same::<$lhs, $rhs>();
    };
    ($cond:ty $(,)?) => {
        const _: () = $crate::assert::assert_true::<$cond>();
    };
}
