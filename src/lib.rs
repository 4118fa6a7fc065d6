#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use dp_reflect as reflect;

pub use dp_reflect::{DotPathError, DotPathResult, ErrorKind, PropertyPath};
pub use dp_reflect::{copy, get, get_as, resolve_type, set, set_from_string};

/// Everything needed to describe a tree and run paths over it.
pub mod prelude {
    pub use dp_reflect::derive::Record;
    pub use dp_reflect::{Dict, PropertyPath, Record, Root, TypeToken, Typed, Value};
}
