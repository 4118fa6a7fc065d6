//! Items referenced by `#[derive(Record)]` output. Not public API.

#![doc(hidden)]

pub use alloc::boxed::Box;
pub use core::option::Option::{self, None, Some};
pub use core::result::Result::{self, Err, Ok};

pub use crate::impls::{assign_from_value, record_from_value};
pub use crate::info::{FieldInfo, RecordInfo, TypeToken};
pub use crate::{Node, NodeMut, Property, Record, Root, Typed, TypedProperty, Value};
