//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! These are the lifted natural numbers which flow through sequences: the counts given to
//! [`Take`](crate::Take) and [`Drop`](crate::Drop), and the elements of [`Nats`](crate::Nats),
//! [`Fib`](crate::Fib) and [`Primes`](crate::Primes).

use crate::boolean::{Bool, False, True};

/// The number zero.
///
/// # Examples
///
/// ```
/// use typelist::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use typelist::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// # #![recursion_limit = "256"]
/// use typelist::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<128>>::VALUE, 128);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Compare two unary numbers and branch on their comparison, at the type level.
///
/// # Examples
///
/// ```
/// use typelist::unary::{Compare, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<0>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<(UnaryOf<2>, UnaryOf<1>) as Compare<u8, u16, u32>>::Result, u32);
/// ```
pub trait Compare<IfLess, IfEqual, IfGreater>: sealed::Compare {
    /// The result of the comparison: `IfLess`, `IfEqual` or `IfGreater`.
    type Result;
}

impl<N: Unary, M: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater>
    for (S<N>, S<M>)
where
    (N, M): Compare<IfLess, IfEqual, IfGreater>,
{
    type Result = <(N, M) as Compare<IfLess, IfEqual, IfGreater>>::Result;
}

impl<IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, Z) {
    type Result = IfEqual;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (S<N>, Z) {
    type Result = IfGreater;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Compare<IfLess, IfEqual, IfGreater> for (Z, S<N>) {
    type Result = IfLess;
}

/// Add two unary numbers at the type level.
///
/// # Examples
///
/// ```
/// use typelist::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<1>, UnaryOf<1>) as Add>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<5>, UnaryOf<7>) as Add>::Result, UnaryOf<12>);
/// ```
pub trait Add: sealed::Add {
    /// The result of the addition.
    type Result: Unary;
}

impl<N: Unary> Add for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Add for (N, S<M>)
where
    (N, M): Add,
{
    type Result = S<<(N, M) as Add>::Result>;
}

/// Decide whether `D` divides `Self`, at the type level.
///
/// `Self` is counted down one step at a time against a counter `K`, which is refilled with `D`
/// whenever it runs out. `Self` is divisible by `D` exactly when both reach zero together. Use
/// the [`Divides`] synonym rather than choosing a starting counter by hand.
///
/// The divisor `D` must not be zero: counting down against an empty counter never makes
/// progress, and the compiler overflows its recursion limit.
pub trait DivisibleBy<K, D>: Unary {
    /// [`True`] if `D` divides `Self`, [`False`] otherwise.
    type Result: Bool;
}

impl<D> DivisibleBy<Z, D> for Z {
    type Result = True;
}

impl<K, D> DivisibleBy<S<K>, D> for Z {
    type Result = False;
}

impl<N: Unary, K, D> DivisibleBy<S<K>, D> for S<N>
where
    N: DivisibleBy<K, D>,
{
    type Result = <N as DivisibleBy<K, D>>::Result;
}

impl<N: Unary, D> DivisibleBy<Z, D> for S<N>
where
    S<N>: DivisibleBy<D, D>,
{
    type Result = <S<N> as DivisibleBy<D, D>>::Result;
}

/// [`True`] if the non-zero unary number `D` divides `N`, [`False`] otherwise.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use typelist::unary::Divides;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Divides<UnaryOf<3>, UnaryOf<12>>, True);
/// assert_type_eq_all!(Divides<UnaryOf<5>, UnaryOf<12>>, False);
/// assert_type_eq_all!(Divides<UnaryOf<7>, UnaryOf<0>>, True);
/// ```
pub type Divides<D, N> = <N as DivisibleBy<Z, D>>::Result;

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations, missing_copy_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// A trait which allows conversion from a wrapper type over a type-level `usize` to a unary
/// type-level number representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to a wrapper over a
/// type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

typelist_macro::generate_unary_conversion_impls!(128);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Compare {}
    impl<N: Unary, M: Unary> Compare for (N, M) {}

    pub trait Add {}
    impl<N: Unary, M: Unary> Add for (N, M) {}
}
