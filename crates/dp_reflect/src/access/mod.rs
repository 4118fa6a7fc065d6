//! Read, write and copy values inside record and dictionary trees by dot path.
//!
//! A path such as `position.x` or `properties.level` names a chain of
//! property names and dictionary keys. Two complementary APIs are exposed:
//!
//! - [`PropertyPath`]: a parsed, reusable path. Parse once and run it against
//!   any number of roots.
//! - The free functions [`get`], [`get_as`], [`set`], [`copy`],
//!   [`set_from_string`] and [`resolve_type`], which parse the path on every
//!   call.
//!
//! # Syntax
//!
//! Segments are separated by `.` and are used verbatim: no trimming, no
//! escaping, no indexing. A blank path or any blank segment is rejected with
//! [`ErrorKind::Invalid`] before the tree is touched.
//!
//! # Reads and writes
//!
//! Reads never change the tree and fail on a null or missing intermediate.
//! Writes autovivify: an absent or null dictionary entry becomes an empty
//! [`Dict`](crate::Dict), a null record field becomes a default instance of
//! its declared record type. A field typed [`Value`](crate::Value) or
//! [`Dict`](crate::Dict) becomes an empty dictionary.
//!
//! # Examples
//!
//! ```
//! use dp_reflect::{Dict, Value, derive::Record};
//!
//! #[derive(Record, Clone, Default)]
//! #[record(default)]
//! struct Point { x: i32, y: i32 }
//!
//! #[derive(Record, Clone, Default)]
//! #[record(default)]
//! struct State { position: Option<Point>, properties: Dict }
//!
//! let mut state = State::default();
//!
//! dp_reflect::set(&mut state, "position.x", 10).unwrap();
//! dp_reflect::set(&mut state, "properties.stats.level", 5).unwrap();
//!
//! assert_eq!(state.position.as_ref().map(|p| p.x), Some(10));
//! assert_eq!(
//!     dp_reflect::get(&state, "properties.stats.level").unwrap(),
//!     Value::Int(5),
//! );
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod ops;
mod path;
mod resolve;
mod traverse;

pub mod validate;

// -----------------------------------------------------------------------------
// Exports

pub use error::{DotPathError, DotPathResult, ErrorKind};
pub use ops::{copy, get, get_as, resolve_type, set, set_from_string};
pub use path::{PropertyPath, SEPARATOR};
