use std::marker::PhantomData;

use crate::list::{Head, Shape, TypeList};
use crate::unary::{Unary, S, Z};

/// The sequence `L` without its first `N` elements.
///
/// Dropping more elements than `L` has is not an error: the result is simply empty.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Head<typelist::Drop<UnaryOf<7>, Nats>>, UnaryOf<7>);
/// assert_type_eq_all!(ToTuple<typelist::Drop<UnaryOf<3>, FromTuple<(u8, u16)>>>, ());
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Drop<N, L>(PhantomData<(N, L)>);

impl<L: TypeList> TypeList for Drop<Z, L> {
    type Eval = L::Eval;
}

impl<N: Unary, L: TypeList> TypeList for Drop<S<N>, L>
where
    L::Eval: DropCell<N>,
{
    type Eval = <L::Eval as DropCell<N>>::Output;
}

/// One step of [`Drop`]: discard the head of a cell, and drop `N` more from its tail.
pub trait DropCell<N>: Shape {
    /// The first cell of the result.
    type Output: Shape;
}

impl<N> DropCell<N> for () {
    type Output = ();
}

impl<N, H, T> DropCell<N> for (H, T)
where
    Drop<N, T>: TypeList,
{
    type Output = <Drop<N, T> as TypeList>::Eval;
}

/// The element at index `N` of `L`, counting from zero.
///
/// Indexing past the end of a finite sequence is rejected at compile time.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(At<UnaryOf<1>, FromTuple<(u8, u16, u32)>>, u16);
/// assert_type_eq_all!(At<UnaryOf<6>, Fib>, UnaryOf<8>);
/// ```
pub type At<N, L> = Head<Drop<N, L>>;

#[cfg(test)]
mod tests {
    use super::Drop;
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    type Abc = FromTuple<(u8, u16, u32)>;

    assert_type_eq_all!(Collect<Drop<Z, Abc>>, Abc);
    assert_type_eq_all!(ToTuple<Drop<UnaryOf<1>, Abc>>, (u16, u32));
    assert_type_eq_all!(ToTuple<Drop<UnaryOf<3>, Abc>>, ());
    assert_type_eq_all!(ToTuple<Drop<UnaryOf<9>, Abc>>, ());
    assert_type_eq_all!(ToTuple<Drop<UnaryOf<2>, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Drop<UnaryOf<1>, Drop<UnaryOf<1>, Abc>>>,
        ToTuple<Drop<UnaryOf<2>, Abc>>,
    );
}
