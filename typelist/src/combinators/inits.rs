use std::marker::PhantomData;

use crate::combinators::Append;
use crate::list::{Collect, CollectCell, Shape, TypeList};

/// Every prefix of `L`, shortest first: `()`, then the first element, then the first two, and so
/// on up to all of `L`.
///
/// Each prefix is an evaluated inductive list. When `L` is infinite, so is `Inits<L>`, and its
/// element at index `k` is the first `k` elements of `L`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use typelist::func::ToTupleFn;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Map<ToTupleFn, Inits<FromTuple<(u8, u16)>>>>,
///     ((), (u8,), (u8, u16)),
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Inits<L>(PhantomData<L>);

/// The prefixes of a sequence which come after `Prefix`, where `Rest` is what remains of the
/// sequence once `Prefix` is removed.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct InitsAfter<Prefix, Rest>(PhantomData<(Prefix, Rest)>);

impl<L> TypeList for Inits<L> {
    type Eval = ((), InitsAfter<(), L>);
}

impl<Prefix, Rest: TypeList> TypeList for InitsAfter<Prefix, Rest>
where
    Rest::Eval: InitsCell<Prefix>,
{
    type Eval = <Rest::Eval as InitsCell<Prefix>>::Output;
}

/// One step of [`Inits`]: extend the previous prefix by the head of a cell.
pub trait InitsCell<Prefix>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<Prefix> InitsCell<Prefix> for () {
    type Output = ();
}

impl<Prefix, H, T> InitsCell<Prefix> for (H, T)
where
    Append<Prefix, (H, ())>: TypeList,
    <Append<Prefix, (H, ())> as TypeList>::Eval: CollectCell,
{
    type Output = (
        Collect<Append<Prefix, (H, ())>>,
        InitsAfter<Collect<Append<Prefix, (H, ())>>, T>,
    );
}

#[cfg(test)]
mod tests {
    use crate::func::ToTupleFn;
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ToTuple<Map<ToTupleFn, Inits<()>>>, ((),));
    assert_type_eq_all!(Head<Inits<Nats>>, ());
    assert_type_eq_all!(
        ToTuple<Map<ToTupleFn, Take<UnaryOf<4>, Inits<Nats>>>>,
        ((), VTuple![0], VTuple![0, 1], VTuple![0, 1, 2]),
    );
    assert_type_eq_all!(At<UnaryOf<2>, Inits<Repeat<u8>>>, (u8, (u8, ())));
}
