// -----------------------------------------------------------------------------
// Modules

mod property;
mod record;
mod root;

// -----------------------------------------------------------------------------
// Exports

pub use property::{Node, NodeMut, Property, TypedProperty};
pub use record::{Record, Typed};
pub use root::Root;
