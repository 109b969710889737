use std::marker::PhantomData;

use crate::list::TypeList;

/// The infinite sequence `T, T, T, ...`.
///
/// `Repeat<T>` is its own tail: the sequence is a fixed point, not an unrolled chain.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Tail<Repeat<u8>>, Repeat<u8>);
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Repeat<u8>>>, (u8, u8));
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Repeat<T>(PhantomData<T>);

impl<T> TypeList for Repeat<T> {
    type Eval = (T, Repeat<T>);
}
