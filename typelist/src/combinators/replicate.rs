use std::marker::PhantomData;

use crate::list::TypeList;
use crate::unary::{Unary, S, Z};

/// Exactly `N` copies of `T`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Replicate<UnaryOf<3>, u8>>, (u8, u8, u8));
/// assert_type_eq_all!(ToTuple<Replicate<Z, u8>>, ());
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Replicate<N, T>(PhantomData<(N, T)>);

impl<T> TypeList for Replicate<Z, T> {
    type Eval = ();
}

impl<N: Unary, T> TypeList for Replicate<S<N>, T> {
    type Eval = (T, Replicate<N, T>);
}
