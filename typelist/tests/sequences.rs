#![recursion_limit = "512"]
#![allow(dead_code)]

use static_assertions::assert_type_eq_all;
use typelist::func::{Below, MultipleOf, Plus, Snoc, ToTupleFn};
use typelist::prelude::*;
use typelist::{reify, Drop};

struct A;
struct B;
struct C;
struct X;

macro_rules! letter {
    ($($ty:ty => $value:expr),* $(,)?) => {
        $(impl Reify for $ty {
            type Value = &'static str;

            fn reify() -> &'static str {
                $value
            }
        })*
    };
}

letter!(A => "a", B => "b", C => "c");

// The first few elements of the built-in infinite sequences
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<10>, Nats>>,
    VTuple![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
);
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<10>, Fib>>,
    VTuple![0, 1, 1, 2, 3, 5, 8, 13, 21, 34],
);
assert_type_eq_all!(ToTuple<Take<UnaryOf<5>, Primes>>, VTuple![2, 3, 5, 7, 11]);
assert_type_eq_all!(At<UnaryOf<4>, Primes>, UnaryOf<11>);

// Zipping an infinite sequence against finite prefixes
assert_type_eq_all!(
    ToTuple<Zip2<Take<UnaryOf<3>, Nats>, Take<UnaryOf<3>, Fib>>>,
    (VTuple![0, 0], VTuple![1, 1], VTuple![2, 1]),
);
assert_type_eq_all!(
    ToTuple<Zip<(Nats, Fib, Take<UnaryOf<2>, Primes>)>>,
    (VTuple![0, 0, 2], VTuple![1, 1, 3]),
);
assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Zip<()>>>, ((), ()));

// Cycles restart from the whole original sequence
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<7>, Cycle<Replicate<UnaryOf<3>, X>>>>,
    (X, X, X, X, X, X, X),
);
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<5>, Cycle<FromTuple<(A, B)>>>>,
    (A, B, A, B, A),
);
assert_type_eq_all!(ToTuple<Take<UnaryOf<5>, Cycle<()>>>, ());

// Dropping past the end of a finite sequence leaves nothing
assert_type_eq_all!(ToTuple<Drop<UnaryOf<5>, FromTuple<(A, B)>>>, ());
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<2>, Drop<UnaryOf<5>, Nats>>>,
    VTuple![5, 6],
);

// Prefixes and suffixes
assert_type_eq_all!(
    ToTuple<Map<ToTupleFn, Inits<FromTuple<(A, B, C)>>>>,
    ((), (A,), (A, B), (A, B, C)),
);
assert_type_eq_all!(
    ToTuple<Map<ToTupleFn, Take<UnaryOf<3>, Inits<Nats>>>>,
    ((), VTuple![0], VTuple![0, 1]),
);
assert_type_eq_all!(
    ToTuple<Map<ToTupleFn, Tails<FromTuple<(A, B, C)>>>>,
    ((A, B, C), (B, C), (C,), ()),
);

// Filtering
assert_type_eq_all!(
    ToTuple<Filter<Below<UnaryOf<5>>, Take<UnaryOf<10>, Nats>>>,
    VTuple![0, 1, 2, 3, 4],
);
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<4>, Filter<MultipleOf<UnaryOf<3>>, Nats>>>,
    VTuple![0, 3, 6, 9],
);

// Running and final folds
assert_type_eq_all!(
    ToTuple<Scanl<Plus, Z, Take<UnaryOf<5>, Nats>>>,
    VTuple![0, 0, 1, 3, 6, 10],
);
assert_type_eq_all!(
    ToTuple<Take<UnaryOf<4>, Scanl<Plus, Z, Map<Succ, Nats>>>>,
    VTuple![0, 1, 3, 6],
);
assert_type_eq_all!(Foldl<Plus, Z, Take<UnaryOf<6>, Fib>>, UnaryOf<12>);
assert_type_eq_all!(ToTuple<Foldl<Snoc, (), FromTuple<(A, B, C)>>>, (A, B, C));

#[test]
fn fold_visits_elements_left_to_right() {
    let letters = reify::to_vec::<Foldl<Snoc, (), FromTuple<(A, B, C)>>, &'static str>();
    assert_eq!(letters.concat(), "abc");
}

#[test]
fn primes_reify() {
    assert_eq!(
        reify::to_vec::<Take<UnaryOf<8>, Primes>, usize>(),
        vec![2, 3, 5, 7, 11, 13, 17, 19],
    );
}

#[test]
fn cycles_reify() {
    let letters = reify::to_vec::<Take<UnaryOf<7>, Cycle<FromTuple<(A, B, C)>>>, &'static str>();
    assert_eq!(letters.concat(), "abcabca");
}

#[test]
fn lengths_of_derived_sequences() {
    assert_eq!(reify::len::<Inits<FromTuple<(A, B, C)>>>(), 4);
    assert_eq!(reify::len::<Tails<()>>(), 1);
    assert_eq!(reify::len::<Zip2<Nats, FromTuple<(A, B)>>>(), 2);
    assert_eq!(reify::len::<Scanl<Plus, Z, ()>>(), 1);
}
