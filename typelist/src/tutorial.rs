/*! The introductory tutorial for typelist (nothing is exported from this module).

# Getting started with typelist

Every sequence in this crate is a type, and every computation on a sequence is a type synonym
that the compiler expands. There are no values to construct and no functions to call until the
very end, when we ask for a runtime answer.

Let's write our first sequence:

```
use typelist::prelude::*;

type Small = FromTuple<(u8, u16, u32)>;
```

[`FromTuple`] turns a flat tuple into an inductive list, `(u8, (u16, (u32, ())))`. An inductive
list is already a sequence, so we can hand it to any combinator, and [`ToTuple`] turns the
result back into something easy to read:

```
# use typelist::prelude::*;
# use static_assertions::assert_type_eq_all;
# type Small = FromTuple<(u8, u16, u32)>;
assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Small>>, (u8, u16));
assert_type_eq_all!(ToTuple<typelist::Drop<UnaryOf<2>, Small>>, (u32,));
```

(Here and elsewhere in this tutorial, we use the
[`assert_type_eq_all!`](static_assertions::assert_type_eq_all) macro from the
[`static_assertions`] crate to assert that Rust sees these types as equal.)

# Laziness

What makes this crate different from an ordinary heterogeneous list is that a sequence only ever
has to say what its *first cell* is. Its [`Eval`](TypeList::Eval) is either `()` or a pair
`(Head, Tail)`, and `Tail` is left as an unevaluated type. So sequences can go on forever:

```
# use typelist::prelude::*;
# use static_assertions::assert_type_eq_all;
type Forever = Repeat<char>;

assert_type_eq_all!(Head<Forever>, char);
assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Forever>>, (char, char, char));
```

Taking a finite prefix of an infinite sequence is fine. Asking for all of it, with
[`ToTuple`] or [`Collect`] directly, makes the compiler recurse until it hits its recursion
limit, and compilation fails.

# Numbers and functions

Numbers are unary: [`Z`] is zero and [`S<N>`](S) is `N + 1`. Writing them out by hand is
tedious, so [`UnaryOf<N>`](UnaryOf) converts a constant, and the [`VTuple!`](crate::VTuple)
macro writes a whole tuple of them:

```
# use typelist::prelude::*;
# use static_assertions::assert_type_eq_all;
assert_type_eq_all!(UnaryOf<2>, S<S<Z>>);
assert_type_eq_all!(VTuple![0, 2], (Z, S<S<Z>>));
```

A function is a type implementing [`TypeFn`]. [`Iterate`] applies one over and over, which
is all we need for the natural numbers:

```
# use typelist::prelude::*;
# use static_assertions::assert_type_eq_all;
assert_type_eq_all!(ToTuple<Take<UnaryOf<4>, Iterate<Succ, Z>>>, VTuple![0, 1, 2, 3]);
```

That sequence is exported as [`Nats`]. Our own functions work just the same way:

```
# use typelist::prelude::*;
# use static_assertions::assert_type_eq_all;
struct Double;

impl<N: Unary> TypeFn<N> for Double
where
    (N, N): typelist::unary::Add,
{
    type Output = <(N, N) as typelist::unary::Add>::Result;
}

assert_type_eq_all!(ToTuple<Take<UnaryOf<4>, Map<Double, Nats>>>, VTuple![0, 2, 4, 6]);
```

# Predicates

A predicate is a function whose output is [`True`] or [`False`]. [`Filter`] keeps the elements
for which it is [`True`], and [`Primes`] is exactly that, over [`Nats`]:

```
# #![recursion_limit = "512"]
# use typelist::prelude::*;
# use static_assertions::assert_type_eq_all;
assert_type_eq_all!(ToTuple<Take<UnaryOf<5>, Primes>>, VTuple![2, 3, 5, 7, 11]);
```

Be careful filtering an infinite sequence with a predicate that stops being [`True`]: asking for
one more element than there are matches never finishes, and the compiler gives up.

# Getting values back

Eventually we want to use a result in a running program. The [`reify`](crate::reify) module
turns a finite sequence of lifted values into a `Vec`, and [`Reify`] can be implemented for our
own marker types:

```
# use typelist::prelude::*;
use typelist::reify;

assert_eq!(reify::to_vec::<Take<UnaryOf<8>, Fib>, usize>(), vec![0, 1, 1, 2, 3, 5, 8, 13]);
assert_eq!(reify::nth::<Take<UnaryOf<8>, Fib>, usize>(7), Ok(13));
```

# Wrapping up

That's everything you need to get started with typelist! You might now want to...

- Browse the **[combinators](crate::combinators)** for the rest of the toolkit: [`Cycle`],
  [`Inits`], [`Tails`], [`Scanl`], [`Foldl`], [`Zip`] and friends.
- Jump back to the top of **[reference documentation](crate#quick-reference)**?

Thanks for following along, and enjoy!
*/

// Import the whole crate so the docs above can link appropriately.
#![allow(unused_imports)]
use crate::prelude::*;
