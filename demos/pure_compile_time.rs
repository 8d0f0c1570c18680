//! Pure compile-time arithmetic.
//!
//! No value below is computed at runtime: the type checker does the
//! arithmetic while this file compiles, and `main` only prints constants
//! the compiler already folded.

use typebits::prelude::*;
use typebits::static_assert;
use typebits::WordParity;

// Checked during type checking; nothing of these remains in the binary.

static_assert!(Sum<bits!(19, 8), bits!(23, 8)>, bits!(42, 8));
static_assert!(Prod<bits!(6, 8), bits!(7, 8)>, bits!(42, 8));
static_assert!(Fact<bits!(5, 8)>, bits!(120, 8));
static_assert!(And<IsLt<N3, N7>, IsEven<w8!(42)>>);

// Const Bit Dispatch
//
// `Bit::BOOL` is a `const bool`, so the dead branch is eliminated.

fn parity_report<W: WordParity>() -> &'static str {
    if <IsOdd<W>>::BOOL {
        "odd"
    } else {
        "even"
    }
}

// Type-level selection
//
// A comparison picks one of two policies; the unselected type is never
// referenced by the compiled program.

trait Policy {
    const NAME: &'static str;
}

struct Keep;
impl Policy for Keep {
    const NAME: &'static str = "KEEP (fits the current buffer)";
}

struct Grow;
impl Policy for Grow {
    const NAME: &'static str = "GROW (reallocate first)";
}

type ChosenFor<Len, Cap> = If<IsLt<Len, Cap>, Keep, Grow>;

type WhenHalfFull = ChosenFor<N8, N16>;
type WhenFull = ChosenFor<N16, N16>;

// Compile-time assertions

const _: () = {
    // 8-bit addition wraps.
    assert!(<Sum<bits!(200, 8), bits!(100, 8)> as Bits>::VALUE == 44);

    // Two's complement of 1 is all ones.
    assert!(<Neg<bits!(1, 8)> as Bits>::VALUE == 255);

    // 5! really is 120.
    assert!(<Fact<bits!(5, 8)> as Bits>::VALUE == 120);

    // Tally literals reify to the expected count.
    assert!(<nat!(12) as Nat>::VALUE == 12);
};

fn main() {
    println!("=== Arithmetic the Type Checker Already Did ===\n");

    println!("19 + 23       = {}", <Sum<bits!(19, 8), bits!(23, 8)> as Bits>::VALUE);
    println!("6 * 7         = {}", <Prod<bits!(6, 8), bits!(7, 8)> as Bits>::VALUE);
    println!("5!            = {}", <Fact<bits!(5, 8)> as Bits>::VALUE);
    println!("200 + 100     = {} (mod 256)", <Sum<bits!(200, 8), bits!(100, 8)> as Bits>::VALUE);
    println!("-1 at 8 bits  = {}", <Neg<bits!(1, 8)> as Bits>::VALUE);

    println!("\nParity dispatch:");
    println!("  77 is {}", parity_report::<w8!(77)>());
    println!("  42 is {}", parity_report::<w8!(42)>());

    println!("\nType-level policy selection:");
    println!("  len 8  of 16: {}", <WhenHalfFull as Policy>::NAME);
    println!("  len 16 of 16: {}", <WhenFull as Policy>::NAME);

    println!("\n=== All Checks Passed ===");
}
