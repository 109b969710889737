use std::marker::PhantomData;

use crate::func::TypeFn;
use crate::list::{Shape, TypeList};

/// The type-level function `F` applied to every element of `L`.
///
/// Mapping is lazy, so it preserves both finiteness and infiniteness: `F` is only applied to the
/// elements that are actually evaluated.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Map<Succ, Nats>>>, VTuple![1, 2, 3]);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Map<F, L>(PhantomData<(F, L)>);

impl<F, L: TypeList> TypeList for Map<F, L>
where
    L::Eval: MapCell<F>,
{
    type Eval = <L::Eval as MapCell<F>>::Output;
}

/// One step of [`Map`]: apply `F` to the head of a cell.
pub trait MapCell<F>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<F> MapCell<F> for () {
    type Output = ();
}

impl<F: TypeFn<H>, H, T> MapCell<F> for (H, T) {
    type Output = (F::Output, Map<F, T>);
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ToTuple<Map<Succ, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Map<Id, Take<UnaryOf<5>, Nats>>>,
        ToTuple<Take<UnaryOf<5>, Nats>>,
    );
    assert_type_eq_all!(
        ToTuple<Map<Const<u8>, FromTuple<(i8, i16, i32)>>>,
        (u8, u8, u8),
    );
}
