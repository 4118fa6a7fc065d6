//! Owned runtime values: [`Value`] and [`Dict`].

// -----------------------------------------------------------------------------
// Modules

mod dict;
mod value;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use value::{DATE_FORMAT, DATE_TIME_FORMAT};

// -----------------------------------------------------------------------------
// Exports

pub use dict::{Dict, FixedHashState};
pub use value::Value;
