//! Type-level functions, and a few that are useful everywhere.
//!
//! A type-level function is a type `F` implementing [`TypeFn<Arg>`](TypeFn) for each argument
//! type it accepts. Binary operators, as used by [`Scanl`](crate::Scanl) and
//! [`Foldl`](crate::Foldl), take their two arguments as a pair: `F: TypeFn<(Acc, Elem)>`.

use std::marker::PhantomData;

use crate::boolean::{False, True};
use crate::combinators::Append;
use crate::list::{Collect, CollectCell, TypeList};
use crate::tuple::{List, ToTuple};
use crate::unary::{Add, Compare, Divides, DivisibleBy, Unary, S, Z};

/// A function from types to types.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// /// Wrap anything in a `Vec`.
/// struct Vectorize;
///
/// impl<T> TypeFn<T> for Vectorize {
///     type Output = Vec<T>;
/// }
///
/// assert_type_eq_all!(ToTuple<Map<Vectorize, FromTuple<(u8, i8)>>>, (Vec<u8>, Vec<i8>));
/// ```
pub trait TypeFn<Arg> {
    /// The result of applying this function to `Arg`.
    type Output;
}

/// The identity function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Id;

impl<X> TypeFn<X> for Id {
    type Output = X;
}

/// The function which ignores its argument and returns `T`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Const<T>(PhantomData<T>);

impl<T, X> TypeFn<X> for Const<T> {
    type Output = T;
}

/// The successor function on unary numbers, `n -> n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Succ;

impl<N: Unary> TypeFn<N> for Succ {
    type Output = S<N>;
}

/// Addition of unary numbers, as a binary operator `(n, m) -> n + m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Plus;

impl<N: Unary, M: Unary> TypeFn<(N, M)> for Plus
where
    (N, M): Add,
{
    type Output = <(N, M) as Add>::Result;
}

/// The first projection of a pair, `(a, b) -> a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct First;

impl<A, B> TypeFn<(A, B)> for First {
    type Output = A;
}

/// The second projection of a pair, `(a, b) -> b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Second;

impl<A, B> TypeFn<(A, B)> for Second {
    type Output = B;
}

/// Append one element to the end of a sequence, as a binary operator `(l, x) -> l ++ [x]`.
///
/// Folding with `Snoc` from `()` rebuilds a sequence in its original order, which makes it a
/// handy witness for the order in which a fold visits elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snoc;

impl<L, X> TypeFn<(L, X)> for Snoc {
    type Output = Append<L, (X, ())>;
}

/// The predicate `x < N` on unary numbers.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Below<N>(PhantomData<N>);

impl<N: Unary, X: Unary> TypeFn<X> for Below<N>
where
    (X, N): Compare<True, False, False>,
{
    type Output = <(X, N) as Compare<True, False, False>>::Result;
}

/// The predicate "is a multiple of `D`" on unary numbers. `D` must not be zero.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct MultipleOf<D>(PhantomData<D>);

impl<D, X> TypeFn<X> for MultipleOf<D>
where
    X: DivisibleBy<Z, D>,
{
    type Output = Divides<D, X>;
}

/// Evaluate a finite sequence completely, as an inductive list; see [`Collect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CollectFn;

impl<L: TypeList> TypeFn<L> for CollectFn
where
    L::Eval: CollectCell,
{
    type Output = Collect<L>;
}

/// Evaluate a finite sequence completely, as a flat tuple; see [`ToTuple`].
///
/// Mapping this over a sequence of sequences (such as [`Inits`](crate::Inits) or
/// [`Tails`](crate::Tails)) makes the result easy to read and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ToTupleFn;

impl<L: TypeList> TypeFn<L> for ToTupleFn
where
    L::Eval: CollectCell,
    Collect<L>: List,
{
    type Output = ToTuple<L>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::UnaryOf;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Id as TypeFn<u8>>::Output, u8);
    assert_type_eq_all!(<Const<u8> as TypeFn<i64>>::Output, u8);
    assert_type_eq_all!(<Succ as TypeFn<UnaryOf<4>>>::Output, UnaryOf<5>);
    assert_type_eq_all!(
        <Plus as TypeFn<(UnaryOf<4>, UnaryOf<3>)>>::Output,
        UnaryOf<7>,
    );
    assert_type_eq_all!(<First as TypeFn<(u8, u16)>>::Output, u8);
    assert_type_eq_all!(<Second as TypeFn<(u8, u16)>>::Output, u16);
    assert_type_eq_all!(<Below<UnaryOf<3>> as TypeFn<UnaryOf<2>>>::Output, True);
    assert_type_eq_all!(<Below<UnaryOf<3>> as TypeFn<UnaryOf<3>>>::Output, False);
    assert_type_eq_all!(<MultipleOf<UnaryOf<3>> as TypeFn<UnaryOf<9>>>::Output, True);
    assert_type_eq_all!(
        <MultipleOf<UnaryOf<3>> as TypeFn<UnaryOf<8>>>::Output,
        False,
    );
    assert_type_eq_all!(
        ToTuple<<Snoc as TypeFn<((u8, ()), u16)>>::Output>,
        (u8, u16),
    );
    assert_type_eq_all!(<ToTupleFn as TypeFn<(u8, (u16, ()))>>::Output, (u8, u16));
}
