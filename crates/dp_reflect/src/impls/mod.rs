//! [`Property`] implementations for the supported field types, and the
//! helpers `#[derive(Record)]` builds on.

use crate::{Record, TypedProperty, Value};

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod list;
mod numeric;
mod option;
mod text;
mod time;

// -----------------------------------------------------------------------------
// Helpers

/// Replaces `slot` with `value` converted by [`TypedProperty::from_value`].
///
/// This is the usual body of [`Property::assign`](crate::Property::assign).
#[inline]
pub fn assign_from_value<T: TypedProperty>(slot: &mut T, value: Value) -> Result<(), Value> {
    *slot = T::from_value(value)?;
    Ok(())
}

/// Unboxes a record value of type `T`.
#[inline]
pub fn record_from_value<T: Record>(value: Value) -> Result<T, Value> {
    match value {
        Value::Record(record) => record.take::<T>().map_err(Value::Record),
        other => Err(other),
    }
}
