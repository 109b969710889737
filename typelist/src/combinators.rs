//! The combinators which build new sequences out of old ones.
//!
//! Every combinator here is a type constructor implementing [`TypeList`](crate::TypeList) by
//! evaluating *one cell* of its result, leaving the tail as another application of a combinator.
//! The per-combinator `...Cell` traits do the case analysis on the evaluated [`Shape`] of an
//! input: they are public so that generic code can name them in bounds, but are rarely needed
//! directly.
//!
//! [`Shape`]: crate::Shape

mod append;
mod cycle;
mod drop;
mod filter;
mod foldl;
mod inits;
mod iterate;
mod map;
mod repeat;
mod replicate;
mod scanl;
mod tails;
mod take;
mod zip;

pub use append::*;
pub use cycle::*;
pub use drop::*;
pub use filter::*;
pub use foldl::*;
pub use inits::*;
pub use iterate::*;
pub use map::*;
pub use repeat::*;
pub use replicate::*;
pub use scanl::*;
pub use tails::*;
pub use take::*;
pub use zip::*;
