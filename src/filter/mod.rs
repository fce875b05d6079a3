//! Adapter to the external membership filter

mod engine;
mod memory;
mod traits;

pub use engine::{Lookup, TragEngine};
pub use memory::InMemoryFilter;
pub use traits::{EntityKey, MembershipFilter, Status};
