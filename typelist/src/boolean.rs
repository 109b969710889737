//! The type-level booleans [`True`] and [`False`].
//!
//! Predicates used with [`Filter`](crate::Filter) are [`TypeFn`](crate::TypeFn)s whose output is
//! one of these.

/// The boolean `true`, lifted to the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// The boolean `false`, lifted to the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// All type-level booleans can be converted to their value-level equivalent `bool`.
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level boolean.
    const VALUE: bool;
}

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

/// Select one of two types by a type-level boolean.
///
/// Selection does not evaluate either branch: when the branches are sequences, only the chosen
/// one is ever asked for its [`Eval`](crate::TypeList::Eval).
///
/// # Examples
///
/// ```
/// use typelist::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<True as If<u8, u16>>::Result, u8);
/// assert_type_eq_all!(<False as If<u8, u16>>::Result, u16);
/// ```
pub trait If<Then, Else>: Bool {
    /// `Then` if `Self` is [`True`], `Else` if it is [`False`].
    type Result;
}

impl<Then, Else> If<Then, Else> for True {
    type Result = Then;
}

impl<Then, Else> If<Then, Else> for False {
    type Result = Else;
}

/// Negate a type-level boolean.
pub trait Not: Bool {
    /// The negation.
    type Result: Bool;
}

impl Not for True {
    type Result = False;
}

impl Not for False {
    type Result = True;
}

/// Conjunction of a pair of type-level booleans.
///
/// # Examples
///
/// ```
/// use typelist::boolean::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(True, True) as And>::Result, True);
/// assert_type_eq_all!(<(True, False) as And>::Result, False);
/// ```
pub trait And: sealed::Pair {
    /// The conjunction.
    type Result: Bool;
}

impl<B: Bool> And for (True, B) {
    type Result = B;
}

impl<B: Bool> And for (False, B) {
    type Result = False;
}

/// Disjunction of a pair of type-level booleans.
pub trait Or: sealed::Pair {
    /// The disjunction.
    type Result: Bool;
}

impl<B: Bool> Or for (True, B) {
    type Result = True;
}

impl<B: Bool> Or for (False, B) {
    type Result = B;
}

mod sealed {
    use super::*;
    pub trait Bool: 'static {}
    impl Bool for True {}
    impl Bool for False {}

    pub trait Pair {}
    impl<A: Bool, B: Bool> Pair for (A, B) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_type_eq_all, const_assert};

    assert_type_eq_all!(<True as Not>::Result, False);
    assert_type_eq_all!(<False as Not>::Result, True);
    assert_type_eq_all!(<(False, True) as And>::Result, False);
    assert_type_eq_all!(<(False, True) as Or>::Result, True);
    assert_type_eq_all!(<(False, False) as Or>::Result, False);

    const_assert!(True::VALUE);
    const_assert!(!False::VALUE);
    const_assert!(!<<True as Not>::Result as Bool>::VALUE);
    const_assert!(<<(True, True) as And>::Result as Bool>::VALUE);
}
