//! Conversions back and forth between flat tuples like `(P, Q, R)` and their corresponding
//! inductive lists like `(P, (Q, (R, ())))`.
//!
//! Sequences are built from inductive cells, but flat tuples are much easier to read and write.
//! The traits here convert between the two equivalent representations of a *finite* sequence.
//!
//! At present, tuples up to size 64 are supported.

use crate::list::Collect;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;
}

typelist_macro::impl_tuples!(64);

/// The sequence whose elements are those of the flat tuple `T`, in order.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(FromTuple<(u8, u16)>, (u8, (u16, ())));
/// assert_type_eq_all!(FromTuple<()>, ());
/// ```
pub type FromTuple<T> = <T as Tuple>::AsList;

/// The finite sequence `L`, evaluated completely and flattened into a tuple.
///
/// Like [`Collect`], this never finishes for an infinite sequence.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ToTuple<Take<UnaryOf<3>, Repeat<u8>>>, (u8, u8, u8));
/// ```
pub type ToTuple<L> = <Collect<L> as List>::AsTuple;
