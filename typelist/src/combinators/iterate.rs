use std::marker::PhantomData;

use crate::func::TypeFn;
use crate::list::TypeList;

/// The infinite sequence `X, F(X), F(F(X)), ...`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// struct Boxed;
///
/// impl<T> TypeFn<T> for Boxed {
///     type Output = Box<T>;
/// }
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<3>, Iterate<Boxed, u8>>>,
///     (u8, Box<u8>, Box<Box<u8>>),
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Iterate<F, X>(PhantomData<(F, X)>);

impl<F: TypeFn<X>, X> TypeList for Iterate<F, X> {
    type Eval = (X, Iterate<F, F::Output>);
}
