//! Infinite sequences of natural numbers, built from nothing but the combinators.

use crate::boolean::{And, Bool, False, Not, True};
use crate::combinators::{Filter, Iterate, Map};
use crate::func::{First, Succ, TypeFn};
use crate::unary::{Add, Divides, DivisibleBy, Unary, S, Z};

/// The natural numbers `0, 1, 2, 3, ...`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<4>, Nats>>, VTuple![0, 1, 2, 3]);
/// ```
pub type Nats = Iterate<Succ, Z>;

/// The Fibonacci numbers `0, 1, 1, 2, 3, 5, 8, ...`.
///
/// The sequence iterates [`FibStep`] over pairs of consecutive Fibonacci numbers, starting from
/// `(0, 1)`, and keeps the first component of each pair.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<6>, Fib>>, VTuple![0, 1, 1, 2, 3, 5]);
/// ```
pub type Fib = Map<First, Iterate<FibStep, (Z, S<Z>)>>;

/// The step function of [`Fib`]: `(a, b) -> (a + b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FibStep;

impl<A: Unary, B: Unary> TypeFn<(A, B)> for FibStep
where
    (A, B): Add,
{
    type Output = (<(A, B) as Add>::Result, A);
}

/// The prime numbers `2, 3, 5, 7, 11, ...`.
///
/// # Examples
///
/// ```
/// # #![recursion_limit = "512"]
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Primes>>, VTuple![2, 3, 5]);
/// ```
pub type Primes = Filter<IsPrime, Nats>;

/// The primality predicate on unary numbers.
///
/// Primality is decided by trial division by every candidate from `n - 1` down to `2`. Zero and
/// one are not prime, although trial division alone would find no divisor of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IsPrime;

impl<N: Primality> TypeFn<N> for IsPrime {
    type Output = N::Prime;
}

/// Decide whether a unary number is prime.
pub trait Primality: Unary {
    /// [`True`] if `Self` is prime, [`False`] otherwise.
    type Prime: Bool;
}

impl Primality for Z {
    type Prime = False;
}

impl Primality for S<Z> {
    type Prime = False;
}

impl<N: Unary> Primality for S<S<N>>
where
    S<N>: TrialDivision<S<S<N>>>,
{
    type Prime = <S<N> as TrialDivision<S<S<N>>>>::Coprime;
}

/// Check that no candidate from `Self` down to `2` divides `N`.
pub trait TrialDivision<N>: Unary {
    /// [`True`] if none of the candidates divides `N`, [`False`] otherwise.
    type Coprime: Bool;
}

impl<N> TrialDivision<N> for S<Z> {
    type Coprime = True;
}

impl<N, D: Unary> TrialDivision<N> for S<S<D>>
where
    N: DivisibleBy<Z, S<S<D>>>,
    Divides<S<S<D>>, N>: Not,
    S<D>: TrialDivision<N>,
    (
        <Divides<S<S<D>>, N> as Not>::Result,
        <S<D> as TrialDivision<N>>::Coprime,
    ): And,
{
    type Coprime = <(
        <Divides<S<S<D>>, N> as Not>::Result,
        <S<D> as TrialDivision<N>>::Coprime,
    ) as And>::Result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<IsPrime as TypeFn<Z>>::Output, False);
    assert_type_eq_all!(<IsPrime as TypeFn<UnaryOf<1>>>::Output, False);
    assert_type_eq_all!(<IsPrime as TypeFn<UnaryOf<2>>>::Output, True);
    assert_type_eq_all!(<IsPrime as TypeFn<UnaryOf<3>>>::Output, True);
    assert_type_eq_all!(<IsPrime as TypeFn<UnaryOf<4>>>::Output, False);
    assert_type_eq_all!(<IsPrime as TypeFn<UnaryOf<9>>>::Output, False);
    assert_type_eq_all!(<IsPrime as TypeFn<UnaryOf<13>>>::Output, True);
    assert_type_eq_all!(
        <FibStep as TypeFn<(UnaryOf<3>, UnaryOf<2>)>>::Output,
        VTuple![5, 3],
    );

    assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Nats>>, VTuple![0, 1, 2]);
    assert_type_eq_all!(At<UnaryOf<2>, Primes>, UnaryOf<5>);
}
