use std::marker::PhantomData;

use crate::list::{Shape, TypeList};
use crate::tuple::{List, Tuple};

/// The elements of `L` and `R` paired up position by position, as 2-tuples `(l, r)`.
///
/// The result stops as soon as either input does.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Zip2<FromTuple<(u8, u16, u32)>, Repeat<()>>>,
///     ((u8, ()), (u16, ()), (u32, ())),
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Zip2<L, R>(PhantomData<(L, R)>);

impl<L: TypeList, R: TypeList> TypeList for Zip2<L, R>
where
    (L::Eval, R::Eval): Zip2Cell,
{
    type Eval = <(L::Eval, R::Eval) as Zip2Cell>::Output;
}

/// One step of [`Zip2`], on a pair of evaluated cells: pair up the heads, or stop if either cell
/// is empty.
pub trait Zip2Cell {
    /// The first cell of the result.
    type Output: Shape;
}

impl<R> Zip2Cell for ((), R) {
    type Output = ();
}

impl<H, T> Zip2Cell for ((H, T), ()) {
    type Output = ();
}

impl<H1, T1, H2, T2> Zip2Cell for ((H1, T1), (H2, T2)) {
    type Output = ((H1, H2), Zip2<T1, T2>);
}

/// The elements of every sequence in the tuple `Ls` grouped up position by position, as tuples
/// with one element from each sequence.
///
/// The result stops as soon as any input does. Zipping no sequences at all, `Zip<()>`, gives an
/// infinite sequence of `()`.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(
///     ToTuple<Zip<(Nats, Repeat<u8>, FromTuple<(i8, i16)>)>>,
///     ((Z, u8, i8), (S<Z>, u8, i16)),
/// );
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Zip<Ls>(PhantomData<Ls>);

/// [`Zip`] over an inductive list of sequences rather than a flat tuple of them.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct ZipList<Ls>(PhantomData<Ls>);

impl<Ls: Tuple> TypeList for Zip<Ls>
where
    ZipList<Ls::AsList>: TypeList,
{
    type Eval = <ZipList<Ls::AsList> as TypeList>::Eval;
}

impl<Ls: Uncons> TypeList for ZipList<Ls>
where
    Ls::Cells: ZipListCell,
{
    type Eval = <Ls::Cells as ZipListCell>::Output;
}

/// The outcome of evaluating every sequence in a list of sequences, when at least one of them
/// turned out to be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Exhausted;

/// The outcome of evaluating every sequence in a list of sequences, when none of them was empty:
/// the inductive list of their heads, and the inductive list of their tails.
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = "")
)]
pub struct Unconsed<Heads, Tails>(PhantomData<(Heads, Tails)>);

/// Evaluate every sequence in an inductive list of sequences, and split the results into heads
/// and tails.
pub trait Uncons {
    /// Either [`Exhausted`] or [`Unconsed`].
    type Cells;
}

impl Uncons for () {
    type Cells = Unconsed<(), ()>;
}

impl<L: TypeList, Ls: Uncons> Uncons for (L, Ls)
where
    L::Eval: UnconsCell<Ls::Cells>,
{
    type Cells = <L::Eval as UnconsCell<Ls::Cells>>::Output;
}

/// Combine one evaluated cell with the outcome of evaluating the sequences after it.
pub trait UnconsCell<Rest>: Shape {
    /// Either [`Exhausted`] or [`Unconsed`].
    type Output;
}

impl<Rest> UnconsCell<Rest> for () {
    type Output = Exhausted;
}

impl<H, T> UnconsCell<Exhausted> for (H, T) {
    type Output = Exhausted;
}

impl<H, T, Heads, Tails> UnconsCell<Unconsed<Heads, Tails>> for (H, T) {
    type Output = Unconsed<(H, Heads), (T, Tails)>;
}

/// One step of [`Zip`]: turn the heads into a tuple, or stop.
pub trait ZipListCell {
    /// The first cell of the result.
    type Output: Shape;
}

impl ZipListCell for Exhausted {
    type Output = ();
}

impl<Heads: List, Tails> ZipListCell for Unconsed<Heads, Tails> {
    type Output = (Heads::AsTuple, ZipList<Tails>);
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(ToTuple<Zip2<(), Nats>>, ());
    assert_type_eq_all!(ToTuple<Zip2<Nats, ()>>, ());
    assert_type_eq_all!(
        ToTuple<Zip2<Take<UnaryOf<2>, Nats>, Repeat<u8>>>,
        ToTuple<Zip<(Take<UnaryOf<2>, Nats>, Repeat<u8>)>>,
    );
    assert_type_eq_all!(ToTuple<Zip<(Nats, ())>>, ());
    assert_type_eq_all!(ToTuple<Zip<((), Nats)>>, ());
    assert_type_eq_all!(ToTuple<Take<UnaryOf<2>, Zip<()>>>, ((), ()));
    assert_type_eq_all!(ToTuple<Zip<(FromTuple<(u8, u16)>,)>>, ((u8,), (u16,)));
}
