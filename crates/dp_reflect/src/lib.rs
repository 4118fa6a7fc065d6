#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Inside the crate we write `crate::`, derive output and doctests write
// `::dp_reflect::`. `Manifest` can only pick one, so alias ourselves.
extern crate self as dp_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod convert;
pub mod impls;
pub mod info;
pub mod value;

#[cfg(feature = "serde")]
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use dp_reflect_derive as derive;
pub use reflection::{Node, NodeMut, Property, Record, Root, Typed, TypedProperty};
pub use value::{Dict, Value};

pub use access::{DotPathError, DotPathResult, ErrorKind, PropertyPath};
pub use access::{copy, get, get_as, resolve_type, set, set_from_string};
pub use convert::parse;
pub use info::{RecordInfo, TypeToken, compatible};
