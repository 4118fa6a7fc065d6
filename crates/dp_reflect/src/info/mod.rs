//! Static type information: [`TypeToken`], [`RecordInfo`] and the
//! compatibility rule between tokens.

// -----------------------------------------------------------------------------
// Modules

mod record_info;
mod type_token;

// -----------------------------------------------------------------------------
// Exports

pub use record_info::{FieldAccess, FieldInfo, RecordInfo};
pub use type_token::{TypeToken, compatible};
