//! The representation of lazy type-level sequences.
//!
//! A sequence is any type implementing [`TypeList`]. Asking a sequence for its
//! [`Eval`](TypeList::Eval) evaluates exactly one step of it, to one of two [`Shape`]s:
//!
//! - `()`, the empty sequence;
//! - `(Head, Tail)`, a cons cell whose `Tail` is another sequence, *not yet evaluated*.
//!
//! Nothing constrains the tail of a cell until that tail is itself evaluated. This is what lets
//! infinite sequences exist: the tail of an infinite sequence is a finite type *describing* how to
//! compute the next cell, and the compiler only ever unfolds as many cells as something demands.
//!
//! Because `()` and `(H, T)` are their own evaluations, inductive lists like `(A, (B, ()))` are
//! sequences too: the fully evaluated ones.

use crate::unary::{Unary, S, Z};

/// A possibly-infinite, possibly-empty type-level sequence.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(u8, (u16, ())) as TypeList>::Eval, (u8, (u16, ())));
/// assert_type_eq_all!(<Repeat<u8> as TypeList>::Eval, (u8, Repeat<u8>));
/// ```
pub trait TypeList {
    /// This sequence evaluated to its first cell: `()` if it is empty, `(Head, Tail)` otherwise.
    type Eval: Shape;
}

/// The shape of an evaluated sequence: either `()` or `(Head, Tail)`.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Shape: sealed::Shape {
    /// Whether this is the empty shape `()`.
    const IS_EMPTY: bool;
}

impl Shape for () {
    const IS_EMPTY: bool = true;
}

impl<H, T> Shape for (H, T) {
    const IS_EMPTY: bool = false;
}

/// The non-empty shape `(Head, Tail)`, taken apart.
///
/// Only cons cells implement this trait, so projecting the head or tail of an empty sequence is
/// rejected at compile time.
pub trait NonEmpty: Shape {
    /// The first element.
    type Head;
    /// The remaining sequence, unevaluated.
    type Tail;
}

impl<H, T> NonEmpty for (H, T) {
    type Head = H;
    type Tail = T;
}

impl TypeList for () {
    type Eval = ();
}

impl<H, T> TypeList for (H, T) {
    type Eval = (H, T);
}

/// The empty sequence.
pub type Nil = ();

/// The sequence with head `H` and tail `T`.
pub type Cons<H, T> = (H, T);

/// The first element of the non-empty sequence `L`.
pub type Head<L> = <<L as TypeList>::Eval as NonEmpty>::Head;

/// Everything but the first element of the non-empty sequence `L`.
pub type Tail<L> = <<L as TypeList>::Eval as NonEmpty>::Tail;

/// Strictly evaluate every cell of a finite sequence, collecting it into an inductive list.
///
/// This is implemented for evaluated shapes; use the [`Collect`] synonym to collect a sequence.
pub trait CollectCell: Shape {
    /// The fully evaluated inductive list.
    type Output;
}

impl CollectCell for () {
    type Output = ();
}

impl<H, T: TypeList> CollectCell for (H, T)
where
    T::Eval: CollectCell,
{
    type Output = (H, <T::Eval as CollectCell>::Output);
}

/// The finite sequence `L` evaluated all the way to the end, as an inductive list
/// `(A, (B, (..., ())))`.
///
/// Collecting an infinite sequence never finishes; the compiler reports that it has overflowed its
/// recursion limit.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Collect<Replicate<UnaryOf<2>, u8>>, (u8, (u8, ())));
/// ```
pub type Collect<L> = <<L as TypeList>::Eval as CollectCell>::Output;

/// Take the length of an evaluated finite sequence as a unary type-level number.
pub trait HasLength: Shape {
    /// The number of elements.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<H, T: TypeList> HasLength for (H, T)
where
    T::Eval: HasLength,
{
    type Length = S<<T::Eval as HasLength>::Length>;
}

/// The length of the finite sequence `L`, as a unary number.
pub type Length<L> = <<L as TypeList>::Eval as HasLength>::Length;

mod sealed {
    pub trait Shape {}
    impl Shape for () {}
    impl<H, T> Shape for (H, T) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::UnaryOf;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert};

    type Abc = (u8, (u16, (u32, ())));

    assert_impl_all!((): TypeList, Shape);
    assert_impl_all!(Abc: TypeList, NonEmpty);
    assert_not_impl_any!((): NonEmpty);

    assert_type_eq_all!(Head<Abc>, u8);
    assert_type_eq_all!(Tail<Abc>, (u16, (u32, ())));
    assert_type_eq_all!(Head<Tail<Abc>>, u16);
    assert_type_eq_all!(Cons<u8, Nil>, (u8, ()));
    assert_type_eq_all!(Collect<Abc>, Abc);
    assert_type_eq_all!(Length<Abc>, UnaryOf<3>);
    assert_type_eq_all!(Length<()>, Z);

    // Shapes know whether they are empty
    const_assert!(<() as Shape>::IS_EMPTY);
    const_assert!(!<<Abc as TypeList>::Eval as Shape>::IS_EMPTY);
}
