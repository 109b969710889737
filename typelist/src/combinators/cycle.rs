use std::marker::PhantomData;

use crate::list::{Shape, TypeList};

/// The elements of the finite sequence `L`, repeated forever in their original order.
///
/// Cycling an empty sequence gives an empty sequence: there is nothing to repeat.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<5>, Cycle<FromTuple<(u8, u16)>>>>,
///     (u8, u16, u8, u16, u8),
/// );
/// assert_type_eq_all!(ToTuple<Cycle<()>>, ());
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Cycle<L>(PhantomData<L>);

/// A pass through `Original` in progress inside a [`Cycle`], with `Rest` still to come.
///
/// The original sequence is carried along unchanged, so that each pass can start it afresh.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Cycling<Rest, Original>(PhantomData<(Rest, Original)>);

impl<L: TypeList> TypeList for Cycle<L>
where
    L::Eval: CycleCell<L>,
{
    type Eval = <L::Eval as CycleCell<L>>::Output;
}

impl<Rest: TypeList, Original> TypeList for Cycling<Rest, Original>
where
    Rest::Eval: CyclingCell<Original>,
{
    type Eval = <Rest::Eval as CyclingCell<Original>>::Output;
}

/// The first step of a [`Cycle`]: an empty sequence stays empty, anything else starts a pass.
pub trait CycleCell<Original>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<Original> CycleCell<Original> for () {
    type Output = ();
}

impl<Original, H, T> CycleCell<Original> for (H, T) {
    type Output = (H, Cycling<T, Original>);
}

/// A later step of a [`Cycle`]: continue the current pass, or start the next one when it ends.
pub trait CyclingCell<Original>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<Original> CyclingCell<Original> for ()
where
    Cycle<Original>: TypeList,
{
    type Output = <Cycle<Original> as TypeList>::Eval;
}

impl<Original, H, T> CyclingCell<Original> for (H, T) {
    type Output = (H, Cycling<T, Original>);
}
