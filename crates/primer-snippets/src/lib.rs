//! Runnable snippets, one module per construct.
//!
//! Every snippet is independent: it builds a few local values, performs the
//! operation it demonstrates and writes what it saw to a [`Transcript`].
//! The free functions in each module carry the semantics so they can be
//! exercised directly; the [`Snippet`] impls only narrate them.

mod catalog;
mod context;

pub mod arrays;
pub mod closures;
pub mod conditional;
pub mod embedding;
pub mod functions;
pub mod interfaces;
pub mod loops;
pub mod maps;
pub mod pointers;
pub mod range;
pub mod structs;
pub mod switch;
pub mod variadic;

pub use catalog::Catalog;
pub use context::{Clock, Context, FixedClock, SystemClock};
pub use primer_common::{Topic, Transcript};

/// A self-contained demonstration of one construct.
pub trait Snippet {
    fn topic(&self) -> Topic;

    fn run(&self, ctx: &Context, out: &mut Transcript);
}
