use std::marker::PhantomData;

use crate::list::{Shape, TypeList};

/// The elements of `L` followed by the elements of `R`.
///
/// If `L` is infinite, `R` is never reached.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Append<FromTuple<(u8,)>, FromTuple<(u16, u32)>>>,
///     (u8, u16, u32),
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Append<L, R>(PhantomData<(L, R)>);

impl<L: TypeList, R> TypeList for Append<L, R>
where
    L::Eval: AppendCell<R>,
{
    type Eval = <L::Eval as AppendCell<R>>::Output;
}

/// One step of [`Append`]: continue with the left sequence, or switch to the right one once the
/// left one is exhausted.
pub trait AppendCell<R>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<R: TypeList> AppendCell<R> for () {
    type Output = R::Eval;
}

impl<R, H, T> AppendCell<R> for (H, T) {
    type Output = (H, Append<T, R>);
}
