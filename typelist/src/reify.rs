//! Bring lifted values back down to runtime values.
//!
//! Everything else in this crate happens while compiling. This module is the bridge to the
//! running program: [`Reify`] gives each lifted value a runtime counterpart, and [`to_vec`] and
//! [`nth`] read out a finite sequence of them.
//!
//! # Examples
//!
//! ```
//! use typelist::prelude::*;
//! use typelist::reify;
//!
//! assert_eq!(reify::to_vec::<Take<UnaryOf<5>, Fib>, usize>(), vec![0, 1, 1, 2, 3]);
//! assert_eq!(reify::nth::<Take<UnaryOf<5>, Fib>, usize>(4), Ok(3));
//! assert!(reify::nth::<Take<UnaryOf<5>, Fib>, usize>(5).is_err());
//! ```

use tracing::{debug, trace};

use crate::boolean::{False, True};
use crate::error::SequenceError;
use crate::list::{Collect, CollectCell, HasLength, Length, TypeList};
use crate::unary::{Unary, S, Z};

/// A lifted value with a runtime counterpart.
///
/// Unary numbers reify to `usize` and booleans to `bool`; pairs reify to pairs. Implement this
/// for your own marker types to read them out of sequences.
///
/// # Examples
///
/// ```
/// use typelist::prelude::*;
///
/// struct Hello;
///
/// impl Reify for Hello {
///     type Value = &'static str;
///
///     fn reify() -> &'static str {
///         "hello"
///     }
/// }
///
/// assert_eq!(<(Hello, UnaryOf<3>)>::reify(), ("hello", 3));
/// ```
pub trait Reify {
    /// The type of the runtime value.
    type Value;

    /// The runtime value of this type.
    fn reify() -> Self::Value;
}

impl Reify for Z {
    type Value = usize;

    fn reify() -> usize {
        0
    }
}

impl<N: Unary> Reify for S<N> {
    type Value = usize;

    fn reify() -> usize {
        <Self as Unary>::VALUE
    }
}

impl Reify for True {
    type Value = bool;

    fn reify() -> bool {
        true
    }
}

impl Reify for False {
    type Value = bool;

    fn reify() -> bool {
        false
    }
}

impl Reify for () {
    type Value = ();

    fn reify() {}
}

impl<A: Reify, B: Reify> Reify for (A, B) {
    type Value = (A::Value, B::Value);

    fn reify() -> Self::Value {
        (A::reify(), B::reify())
    }
}

/// An evaluated inductive list whose elements all reify to values of type `V`.
pub trait ReifyList<V> {
    /// The number of elements in the list.
    const LENGTH: usize;

    /// Push the value of every element onto `values`, in order.
    fn reify_into(values: &mut Vec<V>);

    /// The value of the element at `index`, if there is one.
    fn reify_nth(index: usize) -> Option<V>;
}

impl<V> ReifyList<V> for () {
    const LENGTH: usize = 0;

    fn reify_into(_values: &mut Vec<V>) {}

    fn reify_nth(_index: usize) -> Option<V> {
        None
    }
}

impl<V, H, T> ReifyList<V> for (H, T)
where
    H: Reify<Value = V>,
    T: ReifyList<V>,
{
    const LENGTH: usize = T::LENGTH + 1;

    fn reify_into(values: &mut Vec<V>) {
        values.push(H::reify());
        T::reify_into(values);
    }

    fn reify_nth(index: usize) -> Option<V> {
        match index {
            0 => Some(H::reify()),
            _ => T::reify_nth(index - 1),
        }
    }
}

/// The runtime values of every element of the finite sequence `L`, in order.
///
/// The whole of `L` is evaluated while compiling, so passing an infinite sequence is a compile
/// error rather than a hang at runtime.
pub fn to_vec<L, V>() -> Vec<V>
where
    L: TypeList,
    L::Eval: CollectCell,
    Collect<L>: ReifyList<V>,
{
    let mut values = Vec::with_capacity(<Collect<L> as ReifyList<V>>::LENGTH);
    <Collect<L> as ReifyList<V>>::reify_into(&mut values);
    trace!(
        sequence = std::any::type_name::<L>(),
        length = values.len(),
        "reified sequence"
    );
    values
}

/// The runtime value of the element at `index` of the finite sequence `L`.
///
/// # Errors
///
/// Returns [`SequenceError::Exhausted`] if `L` has no more than `index` elements.
pub fn nth<L, V>(index: usize) -> Result<V, SequenceError>
where
    L: TypeList,
    L::Eval: CollectCell,
    Collect<L>: ReifyList<V>,
{
    match <Collect<L> as ReifyList<V>>::reify_nth(index) {
        Some(value) => Ok(value),
        None => {
            let length = <Collect<L> as ReifyList<V>>::LENGTH;
            debug!(
                sequence = std::any::type_name::<L>(),
                index,
                length,
                "index out of range for sequence"
            );
            Err(SequenceError::Exhausted { index, length })
        }
    }
}

/// The number of elements of the finite sequence `L`, as a runtime value.
pub fn len<L>() -> usize
where
    L: TypeList,
    L::Eval: HasLength,
{
    <Length<L> as Unary>::VALUE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn booleans_reify() {
        assert!(True::reify());
        assert!(!False::reify());
        assert_eq!(
            to_vec::<Map<crate::IsPrime, Take<UnaryOf<4>, Nats>>, bool>(),
            vec![false, false, true, true]
        );
    }

    #[test]
    fn empty_sequences_reify_to_nothing() {
        assert_eq!(to_vec::<(), usize>(), Vec::<usize>::new());
        assert_eq!(
            nth::<(), usize>(0),
            Err(SequenceError::Exhausted {
                index: 0,
                length: 0
            })
        );
        assert_eq!(len::<Take<Z, Nats>>(), 0);
    }

    #[test]
    fn lengths_count_any_elements() {
        assert_eq!(len::<FromTuple<(u8, String, ())>>(), 3);
        assert_eq!(len::<Replicate<UnaryOf<9>, u8>>(), 9);
    }

    #[test]
    fn exhausted_errors_report_index_and_length() {
        let err = nth::<Take<UnaryOf<3>, Nats>, usize>(7).unwrap_err();
        let expected = SequenceError::Exhausted {
            index: 7,
            length: 3,
        };
        assert_eq!(err, expected);
        assert_eq!(
            err.to_string(),
            "index 7 is past the end of a sequence of length 3"
        );
    }
}
