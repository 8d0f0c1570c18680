//! Tally numbers: construction, arithmetic, comparisons.

use typebits::prelude::*;
use typebits::static_assert;
use typebits::{nat, Nat};

// =============================================================================
// Construction
// =============================================================================

static_assert!(Succ<Z>, N1);
static_assert!(Succ<Succ<Z>>, N2);
static_assert!(S<S<S<Z>>>, N3);
static_assert!(nat!(0), Z);
static_assert!(nat!(5), N5);
static_assert!(nat!(16), N16);

// =============================================================================
// Predecessor
// =============================================================================

static_assert!(Pred<N1>, Z);
static_assert!(Pred<N3>, N2);
static_assert!(Pred<Succ<N9>>, N9);
// `Pred<Z>` has no impl at all; see rejection_demonstration.rs.

// =============================================================================
// Addition
// =============================================================================

static_assert!(NatSum<Z, Z>, Z);
static_assert!(NatSum<N0, N7>, N7);
static_assert!(NatSum<N7, N0>, N7);
static_assert!(NatSum<N2, N3>, N5);
static_assert!(NatSum<N8, N8>, N16);

// Addition associates.
static_assert!(NatSum<NatSum<N1, N2>, N3>, NatSum<N1, NatSum<N2, N3>>);

// =============================================================================
// Comparisons
// =============================================================================

static_assert!(IsLt<N3, N7>, B1);
static_assert!(IsLt<N7, N3>, B0);
static_assert!(IsLt<N4, N4>, B0);
static_assert!(IsLt<Z, N1>, B1);

static_assert!(IsGt<N7, N3>, B1);
static_assert!(IsGt<N3, N7>, B0);

static_assert!(IsEq<N4, N4>, B1);
static_assert!(IsEq<N4, N5>, B0);
static_assert!(IsEq<Z, Z>, B1);

static_assert!(IsLe<N3, N7>, B1);
static_assert!(IsLe<N4, N4>, B1);
static_assert!(IsLe<N7, N3>, B0);

static_assert!(IsGe<N7, N7>, B1);
static_assert!(IsGe<N9, N2>, B1);
static_assert!(IsGe<N2, N9>, B0);

// Comparison results are ordinary bits and compose with the logic layer.
static_assert!(And<IsLt<N2, N5>, IsEq<N3, N3>>);
static_assert!(Or<IsGt<N1, N6>, IsLe<N1, N6>>);
static_assert!(If<IsLt<N3, N7>, N10, N11>, N10);

// =============================================================================
// Reification
// =============================================================================

fn count<N: Nat>() -> usize {
    N::VALUE
}

#[test]
fn test_reified_values() {
    assert_eq!(Z::VALUE, 0);
    assert_eq!(N16::VALUE, 16);
    assert_eq!(<nat!(12) as Nat>::VALUE, 12);
    assert_eq!(<Succ<N4>>::VALUE, 5);
}

#[test]
fn test_reified_arithmetic() {
    assert_eq!(count::<NatSum<N4, N4>>(), 8);
    assert_eq!(count::<NatSum<N7, N9>>(), 16);
    assert_eq!(count::<Pred<N13>>(), 12);
}
