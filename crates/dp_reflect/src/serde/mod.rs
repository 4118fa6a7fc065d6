//! `Serialize` for [`Value`], [`Dict`] and `dyn Record`.
//!
//! Records serialize as structs with their properties in declaration order,
//! dictionaries as maps with sorted keys, dates and date-times as their
//! canonical ISO-8601 text. A derived record is serialized through
//! `&dyn Record`:
//!
//! ```
//! use dp_reflect::{Record, derive::Record};
//!
//! #[derive(Record, Clone)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 1, y: 2 };
//! let json = serde_json::to_string(&point as &dyn Record).unwrap();
//! assert_eq!(json, r#"{"x":1,"y":2}"#);
//! ```

use alloc::vec::Vec;
use core::fmt::Display;

use serde_core::ser::{Error, SerializeMap, SerializeSeq, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::{Dict, Record, Value};

#[inline]
fn make_custom_error<E: Error>(msg: impl Display) -> E {
    E::custom(msg)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Text(v) => serializer.serialize_str(v),
            Value::Date(_) | Value::DateTime(_) => serializer.collect_str(self),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(dict) => dict.serialize(serializer),
            Value::Record(record) => (**record).serialize(serializer),
        }
    }
}

impl Serialize for Dict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&str, &Value)> = self.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by_key(|(key, _)| *key);

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for dyn Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let info = self.reflect_type_info();
        let mut state = serializer.serialize_struct(info.type_name(), info.field_len())?;
        for field in info.fields() {
            let Some(value) = self.read_property(field.name()) else {
                return Err(make_custom_error(format_args!(
                    "property `{}` declared by `{}` cannot be read",
                    field.name(),
                    info.type_path(),
                )));
            };
            state.serialize_field(field.name(), &value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use chrono::NaiveDate;

    use crate::derive::Record;
    use crate::{Dict, Record, Value};

    #[derive(Record, Clone, Default)]
    #[record(default)]
    struct Inner {
        label: String,
    }

    #[derive(Record, Clone, Default)]
    #[record(default)]
    struct Outer {
        count: i32,
        inner: Option<Inner>,
        properties: Dict,
    }

    #[test]
    fn values() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let list = Value::List(vec![Value::Null, Value::Bool(true), Value::Date(date)]);
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"[null,true,"2024-05-01"]"#
        );
    }

    #[test]
    fn dict_keys_are_sorted() {
        let dict = Dict::from([("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(serde_json::to_string(&dict).unwrap(), r#"{"a":1,"b":2,"c":3}"#);
    }

    #[test]
    fn nested_records() {
        let mut outer = Outer::default();
        crate::set(&mut outer, "inner.label", "x").unwrap();
        crate::set(&mut outer, "properties.level", 5).unwrap();

        let json = serde_json::to_string(&outer as &dyn Record).unwrap();
        assert_eq!(
            json,
            r#"{"count":0,"inner":{"label":"x"},"properties":{"level":5}}"#
        );
    }
}
