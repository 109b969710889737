use std::marker::PhantomData;

use crate::boolean::If;
use crate::func::TypeFn;
use crate::list::{Shape, TypeList};

/// The elements of `L` for which the predicate `P` is [`True`](crate::True), in order.
///
/// `P` is a [`TypeFn`] whose output is [`True`](crate::True) or [`False`](crate::False). Runs of
/// rejected elements are skipped by looking ahead as far as necessary, so filtering an infinite
/// sequence with infinitely many accepted elements gives an infinite sequence.
///
/// When no further element would be accepted, asking for the next one never finishes: there is
/// no way to prove at compile time that an infinite sequence has no more matches, and the
/// compiler eventually reports that it has overflowed its recursion limit.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use typelist::func::MultipleOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Evens = Filter<MultipleOf<UnaryOf<2>>, Nats>;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<4>, Evens>>, VTuple![0, 2, 4, 6]);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Filter<P, L>(PhantomData<(P, L)>);

impl<P, L: TypeList> TypeList for Filter<P, L>
where
    L::Eval: FilterCell<P>,
{
    type Eval = <L::Eval as FilterCell<P>>::Output;
}

/// One step of [`Filter`]: keep the head of a cell and filter its tail, or skip ahead to the
/// first cell of the filtered tail.
pub trait FilterCell<P>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<P> FilterCell<P> for () {
    type Output = ();
}

type Verdict<P, H> = <P as TypeFn<H>>::Output;

type Kept<P, H, T> = <Verdict<P, H> as If<(H, Filter<P, T>), Filter<P, T>>>::Result;

impl<P, H, T> FilterCell<P> for (H, T)
where
    P: TypeFn<H>,
    Verdict<P, H>: If<(H, Filter<P, T>), Filter<P, T>>,
    Kept<P, H, T>: TypeList,
{
    type Output = <Kept<P, H, T> as TypeList>::Eval;
}

#[cfg(test)]
mod tests {
    use crate::func::Below;
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ToTuple<Filter<Below<UnaryOf<3>>, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Filter<Below<UnaryOf<3>>, Take<UnaryOf<6>, Nats>>>,
        VTuple![0, 1, 2],
    );
    assert_type_eq_all!(ToTuple<Filter<Below<Z>, Take<UnaryOf<6>, Nats>>>, ());
    // Only the first few elements are demanded, so the predicate rejecting everything after them
    // does not matter.
    assert_type_eq_all!(
        ToTuple<Take<UnaryOf<2>, Filter<Below<UnaryOf<3>>, Nats>>>,
        VTuple![0, 1],
    );
}
