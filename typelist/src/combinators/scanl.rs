use std::marker::PhantomData;

use crate::func::TypeFn;
use crate::list::{Shape, TypeList};

/// The running left fold of `L` with the binary operator `Op`, starting from `Acc`.
///
/// The head of the result is always the accumulator *before* the next element of `L` is combined
/// into it, so a finite `L` of length `n` gives a result of length `n + 1`, and the scan of an
/// empty sequence is just `Acc`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use typelist::func::Plus;
/// use static_assertions::assert_type_eq_all;
///
/// // The triangular numbers.
/// assert_type_eq_all!(
///     ToTuple<Take<UnaryOf<5>, Scanl<Plus, Z, Map<Succ, Nats>>>>,
///     VTuple![0, 1, 3, 6, 10],
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Scanl<Op, Acc, L>(PhantomData<(Op, Acc, L)>);

impl<Op, Acc, L: TypeList> TypeList for Scanl<Op, Acc, L>
where
    L::Eval: ScanlCell<Op, Acc>,
{
    type Eval = <L::Eval as ScanlCell<Op, Acc>>::Output;
}

/// One step of [`Scanl`]: emit the accumulator, then combine it with the head of a cell.
pub trait ScanlCell<Op, Acc>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<Op, Acc> ScanlCell<Op, Acc> for () {
    type Output = (Acc, ());
}

impl<Op, Acc, H, T> ScanlCell<Op, Acc> for (H, T)
where
    Op: TypeFn<(Acc, H)>,
{
    type Output = (Acc, Scanl<Op, <Op as TypeFn<(Acc, H)>>::Output, T>);
}

#[cfg(test)]
mod tests {
    use crate::func::{Plus, Snoc};
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ToTuple<Scanl<Plus, Z, ()>>, (Z,));
    assert_type_eq_all!(Length<Scanl<Plus, Z, Take<UnaryOf<4>, Nats>>>, UnaryOf<5>);
    assert_type_eq_all!(
        ToTuple<Scanl<Plus, Z, FromTuple<VTuple![2, 2, 3]>>>,
        VTuple![0, 2, 4, 7],
    );
    assert_type_eq_all!(
        ToTuple<Map<crate::func::ToTupleFn, Scanl<Snoc, (), FromTuple<(u8, u16)>>>>,
        ((), (u8,), (u8, u16)),
    );
}
