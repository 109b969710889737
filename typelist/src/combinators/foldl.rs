use crate::func::TypeFn;
use crate::list::{Shape, TypeList};

/// Fold an evaluated cell and everything after it from the left, with the binary operator `Op`
/// and the accumulator `Acc`.
///
/// Use the [`Foldl`] synonym to fold a sequence.
pub trait FoldlCell<Op, Acc>: Shape {
    /// The final accumulator.
    type Output;
}

impl<Op, Acc> FoldlCell<Op, Acc> for () {
    type Output = Acc;
}

impl<Op, Acc, H, T: TypeList> FoldlCell<Op, Acc> for (H, T)
where
    Op: TypeFn<(Acc, H)>,
    T::Eval: FoldlCell<Op, <Op as TypeFn<(Acc, H)>>::Output>,
{
    type Output = <T::Eval as FoldlCell<Op, <Op as TypeFn<(Acc, H)>>::Output>>::Output;
}

/// The left fold of the finite sequence `L` with the binary operator `Op`, starting from `Acc`.
///
/// For `L = (e0, e1, e2)` this is `Op(Op(Op(Acc, e0), e1), e2)`: the head is combined into the
/// accumulator before the tail is folded, so `Op` is applied to the elements strictly from left
/// to right. This matters when `Op` is neither commutative nor associative.
///
/// Folding an infinite sequence never finishes.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use typelist::func::{Plus, Snoc};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Foldl<Plus, Z, Take<UnaryOf<5>, Nats>>, UnaryOf<10>);
/// assert_type_eq_all!(ToTuple<Foldl<Snoc, (), FromTuple<(u8, u16, u32)>>>, (u8, u16, u32));
/// ```
pub type Foldl<Op, Acc, L> = <<L as TypeList>::Eval as FoldlCell<Op, Acc>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    /// Pair the accumulator with the next element, building a left-nested tree.
    struct Nest;

    impl<Acc, X> TypeFn<(Acc, X)> for Nest {
        type Output = (Acc, X);
    }

    assert_type_eq_all!(Foldl<Nest, u8, ()>, u8);
    assert_type_eq_all!(
        Foldl<Nest, (), FromTuple<(u8, u16, u32)>>,
        ((((), u8), u16), u32),
    );
}
