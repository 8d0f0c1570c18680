#![allow(dead_code, unused)]

//! Forms the type checker rejects.
//!
//! Each commented-out line fails to compile when restored. The partial
//! operations have no impl for the offending shape, so restoring one of
//! those lines yields a missing trait bound, worded by the
//! `on_unimplemented` notes on the traits themselves; the literal macros
//! reject out-of-range input during expansion, before the trait solver
//! is involved.

use typebits::prelude::*;
use typebits::static_assert;

// Scenario 1: Width mismatch. The bitwise zips only pair off equal
// widths, so a 4-bit / 8-bit AND has no impl to resolve to. The zip
// strips the matching low positions first, so the report names the
// point where the narrow operand ran out.
// Error: cannot AND `Nil` with `Lsb<B0, Lsb<B0, Lsb<B0, Lsb<B0, Nil>>>>`.

// type Mixed = BAnd<bits!(3, 4), bits!(3, 8)>;
// static_assert!(Mixed, bits!(3, 8));

#[test]
fn test_same_width_zips_fine() {
    fn width_of<N: Bits>() -> u32 {
        N::WIDTH
    }
    assert_eq!(width_of::<BAnd<bits!(3, 8), bits!(3, 8)>>(), 8);
}

// Scenario 2: Predecessor of zero. `Pred` is only implemented for
// successor shapes; tally numbers stop at zero rather than wrapping.
// An alias alone does not trip it: aliases are expanded only where they
// are used, so the next line is accepted as written.

type Underflow = Pred<Z>;

// Asserting on the alias forces the projection to resolve, and there is
// nothing for it to resolve to.
// Error: `Z` has no predecessor.

// static_assert!(Underflow, Z);

static_assert!(Pred<S<Z>>, Z);

// Scenario 3: Indexing past the width. A 3-bit string has positions
// 0 through 2; position 3 walks off the end of the list, shedding one
// position per step, and the failure surfaces at the exhausted end.
// Error: no bit at position `Z` of `Nil`.

// static_assert!(BitAt<bits!(0b101, 3), N3>, B0);

static_assert!(BitAt<bits!(0b101, 3), N2>, B1);

// Scenario 4: A false equality. Both sides are perfectly well formed;
// they are simply not the same type, and `Same` has no impl crossing
// two distinct types.
// Error: type mismatch: `Lsb<B0, ...>` is not the same type as `Lsb<B1, ...>`.

// static_assert!(Sum<bits!(2, 8), bits!(2, 8)>, bits!(5, 8));

static_assert!(Sum<bits!(2, 8), bits!(2, 8)>, bits!(4, 8));

// Scenario 5: A condition that holds, asserted the wrong way round.
// `assert_true` demands `B1`; `IsLt<N7, N3>` evaluates to `B0`.
// Error: asserted condition evaluated to `B0`.

// static_assert!(IsLt<N7, N3>);

static_assert!(IsLt<N3, N7>);

// Scenario 6: Equal-width operands of different shapes still unify
// bit by bit, so near misses are caught, not just gross ones.

// static_assert!(Inc<bits!(6, 4)>, bits!(8, 4));

static_assert!(Inc<bits!(6, 4)>, bits!(7, 4));

// Scenario 7: Literal too wide for its width. The macros check the
// range during expansion, so these are rejected even in a bare alias
// position the trait solver never looks at.
// Error: value 16 does not fit in 4 bits
//        The widest value at this width is 15.

// type TooWide = bits!(16, 4);

// Error: value 16 does not fit in 4 bits (0..=15)

// type TooWideWord = w4!(16);

static_assert!(WidthOf<bits!(15, 4)>, N4);
static_assert!(w4!(15), Max4);

// Scenario 8: Zero-width literal. There is no zero-width value to
// write; `Nil` is spelled directly when the empty string is meant.
// Error: width must be between 1 and 64

// type NoWidth = bits!(0, 0);

static_assert!(bits!(0, 1), Lsb<B0, Nil>);
