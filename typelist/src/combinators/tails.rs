use std::marker::PhantomData;

use crate::list::{Shape, TypeList};

/// Every suffix of `L`, longest first: all of `L`, then all but its first element, and so on
/// down to `()` inclusive.
///
/// Each suffix is left exactly as lazy as the corresponding tail of `L`. When `L` is infinite,
/// `Tails<L>` is infinite and never reaches `()`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use typelist::func::ToTupleFn;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Map<ToTupleFn, Tails<FromTuple<(u8, u16)>>>>,
///     ((u8, u16), (u16,), ()),
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Tails<L>(PhantomData<L>);

/// The suffixes of `L` strictly shorter than `L` itself.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct ProperTails<L>(PhantomData<L>);

impl<L> TypeList for Tails<L> {
    type Eval = (L, ProperTails<L>);
}

impl<L: TypeList> TypeList for ProperTails<L>
where
    L::Eval: TailsCell,
{
    type Eval = <L::Eval as TailsCell>::Output;
}

/// One step of [`Tails`]: the tail of a cell is the next suffix.
pub trait TailsCell: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl TailsCell for () {
    type Output = ();
}

impl<H, T> TailsCell for (H, T) {
    type Output = (T, ProperTails<T>);
}

#[cfg(test)]
mod tests {
    use crate::func::ToTupleFn;
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ToTuple<Map<ToTupleFn, Tails<()>>>, ((),));
    assert_type_eq_all!(Length<Tails<Replicate<UnaryOf<4>, u8>>>, UnaryOf<5>);
    assert_type_eq_all!(Head<Tails<Nats>>, Nats);
    assert_type_eq_all!(Head<At<UnaryOf<3>, Tails<Nats>>>, UnaryOf<3>);
}
