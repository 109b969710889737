/*!
> **type list (noun):** An ordered sequence of types, manipulated by the compiler rather than by
> the program.
>
> **typelist (crate):** Lazy, possibly-infinite type-level sequences for Rust.

Most type-level list libraries can only describe lists the compiler can write out in full.
This crate describes sequences the way a lazy functional language does: a sequence is a type
which knows how to compute its *first cell*, and the rest of the sequence stays an unevaluated
type expression until someone asks for it. That makes infinite sequences ordinary citizens:

- the natural numbers are [`Iterate`]`<`[`Succ`]`, `[`Z`]`>`;
- the Fibonacci numbers are a [`Map`] over an [`Iterate`] of pairs;
- the primes are a [`Filter`] over the naturals.

None of this costs anything at runtime, because none of it happens at runtime. Evaluating an
element is trait resolution; asking for the 11th prime is a compile-time computation, and asking
for the last natural number is a compile-time error (the compiler gives up when it reaches its
recursion limit).

## Quick reference

A sequence is any type implementing [`TypeList`]. Evaluated one step, every sequence is either
`()` (empty) or `(Head, Tail)`, where `Tail` is another, still unevaluated, sequence. Inductive
lists like `(A, (B, (C, ())))` are therefore sequences which happen to be fully evaluated
already, and [`FromTuple`] / [`ToTuple`] convert between them and flat tuples like `(A, B, C)`.

| Combinator | Meaning |
| :--------- | :------ |
| [`Repeat<T>`](Repeat) | `T, T, T, ...` |
| [`Take<N, L>`](Take) | the first `N` elements of `L` (or all of them, if there are fewer) |
| [`Drop<N, L>`](Drop) | `L` without its first `N` elements |
| [`Replicate<N, T>`](Replicate) | exactly `N` copies of `T` |
| [`Cycle<L>`](Cycle) | the elements of `L`, over and over |
| [`Inits<L>`](Inits) / [`Tails<L>`](Tails) | every prefix / every suffix of `L` |
| [`Append<L, R>`](Append) | the elements of `L`, then those of `R` |
| [`Map<F, L>`](Map) | `F` applied to every element of `L` |
| [`Filter<P, L>`](Filter) | the elements of `L` for which `P` is [`True`] |
| [`Iterate<F, X>`](Iterate) | `X, F(X), F(F(X)), ...` |
| [`Scanl<Op, Acc, L>`](Scanl) | the running left fold of `L` |
| [`Foldl<Op, Acc, L>`](Foldl) | the left fold of a finite `L` |
| [`Zip2<L, R>`](Zip2) / [`Zip<(L, ...)>`](Zip) | elements paired up position by position |

Numbers are unary ([`Z`], [`S`]), with [`UnaryOf`] for writing them as constants. Functions
applied by the combinators implement [`TypeFn`]; predicates are functions returning [`True`] or
[`False`]. When a runtime answer is wanted, the [`reify`] module turns a finite sequence of
lifted values into a `Vec`.

The [`prelude`] module exports most of what is needed; see the [`tutorial`] for a tour.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod boolean;
pub mod combinators;
pub mod func;
pub mod list;
pub mod reify;
pub mod sequences;
pub mod tuple;
pub mod tutorial;
pub mod unary;

mod error;

pub use boolean::{Bool, False, True};
pub use combinators::*;
pub use error::SequenceError;
pub use func::{Const, First, Id, Second, Succ, TypeFn};
pub use list::{Collect, Cons, Head, Length, Nil, Shape, Tail, TypeList};
pub use sequences::{Fib, IsPrime, Nats, Primes};
pub use tuple::{FromTuple, List, ToTuple, Tuple};
pub use unary::{UnaryOf, S, Z};

/// Write a flat tuple of lifted natural numbers.
///
/// `VTuple![0, 1, 2]` is the type `(UnaryOf<0>, UnaryOf<1>, UnaryOf<2>)`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(VTuple![0, 2], (Z, S<S<Z>>));
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Nats>>, VTuple![0, 1, 2]);
/// ```
#[macro_export]
macro_rules! VTuple {
    ($($n:expr),* $(,)?) => {
        ($($crate::unary::UnaryOf<{ $n }>,)*)
    };
}

/// The prelude module for quickly getting started with typelist.
///
/// This module is designed to be imported as `use typelist::prelude::*;`. It leaves out
/// [`Drop`](crate::Drop), whose name would otherwise shadow [`core::ops::Drop`] in the importing
/// module; name it as `typelist::Drop` instead.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::boolean::{Bool, False, True};
    #[doc(no_inline)]
    pub use crate::combinators::{
        Append, At, Cycle, Filter, Foldl, Inits, Iterate, Map, Repeat, Replicate, Scanl, Tails,
        Take, Zip, Zip2,
    };
    #[doc(no_inline)]
    pub use crate::func::{Const, First, Id, Second, Succ, TypeFn};
    #[doc(no_inline)]
    pub use crate::list::{Collect, Head, Length, Shape, Tail, TypeList};
    #[doc(no_inline)]
    pub use crate::reify::Reify;
    #[doc(no_inline)]
    pub use crate::sequences::{Fib, Nats, Primes};
    #[doc(no_inline)]
    pub use crate::tuple::{FromTuple, List, ToTuple, Tuple};
    #[doc(no_inline)]
    pub use crate::unary::{Unary, UnaryOf, S, Z};
    #[doc(no_inline)]
    pub use crate::VTuple;
}

#[cfg(test)]
mod laws {
    //! Composition laws for the structural combinators, generated by the build script over a
    //! bounded range of counts.
    #![allow(unused_imports)]

    include!(concat!(env!("OUT_DIR"), "/laws.rs"));
}
