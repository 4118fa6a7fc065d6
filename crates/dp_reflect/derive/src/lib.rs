//! Derive macro for `dp_reflect`.
//!
//! See [`Record`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits for a struct with
/// named fields:
///
/// - `Typed`: a static `RecordInfo` describing every property.
/// - `Record`: name based property lookup, reads and writes.
/// - `Property` and `TypedProperty`: so the record can be a field of another record.
/// - `Root`: so path operations can start from it.
/// - `From<T> for Value`.
///
/// The type must implement `Clone`, and every field type must implement
/// `TypedProperty` unless the field is skipped.
///
/// Generic structs, tuple structs, unit structs, enums and unions are rejected.
///
/// ## Default Constructor
///
/// Writing through a null field of record type creates a fresh instance.
/// That requires a registered constructor:
///
/// ```rust, ignore
/// #[derive(Record, Clone, Default)]
/// #[record(default)]
/// struct Point { x: i32, y: i32 }
/// ```
///
/// `#[record(default)]` registers `Default::default`. Without it, creating a
/// missing `Point` fails with `ConstructionFailed`.
///
/// ## Field Attributes
///
/// - `#[record(getter)]`: read through `self.get_<field>()`, which may return
///   the value or a reference to it.
/// - `#[record(setter)]`: write through `self.set_<field>(value)`.
/// - `#[record(accessors)]`: both of the above.
/// - `#[record(rename = "name")]`: expose the field under another property name.
/// - `#[record(skip)]`: hide the field.
///
/// ```rust, ignore
/// #[derive(Record, Clone)]
/// struct Account {
///     #[record(accessors)]
///     balance: i64,
///     #[record(rename = "owner")]
///     holder: String,
///     #[record(skip)]
///     cache: Vec<u8>,
/// }
///
/// impl Account {
///     fn get_balance(&self) -> i64 { self.balance }
///     fn set_balance(&mut self, balance: i64) { self.balance = balance; }
/// }
/// ```
///
/// Navigation into nested records and dictionaries always borrows the field
/// itself, accessors are only used to read or write the final segment.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::RecordStruct::parse(&ast) {
        Ok(data) => impls::impl_record(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
