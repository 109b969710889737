use std::marker::PhantomData;

use crate::list::{Shape, TypeList};
use crate::unary::{Unary, S, Z};

/// The first `N` elements of `L`, or all of `L` if it has fewer than `N` elements.
///
/// `Take<Z, L>` is empty without evaluating `L` at all, so taking a prefix of an infinite
/// sequence is always finite.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<4>, Nats>>, VTuple![0, 1, 2, 3]);
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<4>, FromTuple<(u8, u16)>>>, (u8, u16));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Take<N, L>(PhantomData<(N, L)>);

impl<L> TypeList for Take<Z, L> {
    type Eval = ();
}

impl<N: Unary, L: TypeList> TypeList for Take<S<N>, L>
where
    L::Eval: TakeCell<N>,
{
    type Eval = <L::Eval as TakeCell<N>>::Output;
}

/// One step of [`Take`]: keep the head of a cell, and take `N` more from its tail.
pub trait TakeCell<N>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<N> TakeCell<N> for () {
    type Output = ();
}

impl<N, H, T> TakeCell<N> for (H, T) {
    type Output = (H, Take<N, T>);
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::{assert_not_impl_any, assert_type_eq_all};

    // Nothing is evaluated when nothing is taken, not even something that isn't a sequence.
    assert_type_eq_all!(<Take<Z, u8> as TypeList>::Eval, ());
    assert_not_impl_any!(Take<UnaryOf<1>, u8>: TypeList);

    assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<2>, Take<UnaryOf<5>, Nats>>>,
        ToTuple<Take<UnaryOf<2>, Nats>>,
    );
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<5>, Take<UnaryOf<2>, Nats>>>,
        ToTuple<Take<UnaryOf<2>, Nats>>,
    );
    assert_type_eq_all!(Length<Take<UnaryOf<12>, Repeat<()>>>, UnaryOf<12>);
}
