//! Token resolution and declaration collection.

mod collect;
mod engine;

pub use collect::{Collector, PropertyPolicy};
pub use engine::{ResolveContext, Resolver};
