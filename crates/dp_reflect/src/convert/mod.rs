//! Text to [`Value`] conversion.
//!
//! [`parse`] dispatches on the target [`TypeToken`] through an immutable
//! registry of converters:
//!
//! | target | accepted text |
//! |---|---|
//! | `Byte` .. `Double` | base-10 number, surrounding whitespace ignored |
//! | `Bool` | `true` in any case, anything else is `false` |
//! | `Text` | verbatim |
//! | `Date` | `YYYY-MM-DD` |
//! | `DateTime` | `YYYY-MM-DDTHH:MM[:SS[.fraction]]` |
//! | `TextList` | comma separated, trimmed, empty elements dropped |
//! | `List` | as `TextList`, each element inferred as for `Unknown` |
//! | `Unknown` | inferred: integer, finite float, boolean, then text |
//!
//! `Dict` and record targets cannot be parsed.

use crate::Value;
use crate::access::{DotPathError, DotPathResult};
use crate::info::TypeToken;

// -----------------------------------------------------------------------------
// Modules

mod registry;

// -----------------------------------------------------------------------------
// Exports

pub use registry::{CONVERTERS, ConvertError, ConvertFn, Converter, converter};

/// Parses `text` into a value of type `target`.
///
/// # Examples
///
/// ```
/// use dp_reflect::{TypeToken, Value, parse};
///
/// assert_eq!(parse(&TypeToken::Int, " 42 ").unwrap(), Value::Int(42));
/// assert_eq!(parse(&TypeToken::Bool, "TRUE").unwrap(), Value::Bool(true));
/// assert_eq!(parse(&TypeToken::Unknown, "2.5").unwrap(), Value::Double(2.5));
/// assert_eq!(parse(&TypeToken::Unknown, "hello").unwrap(), Value::from("hello"));
///
/// let err = parse(&TypeToken::Int, "abc").unwrap_err();
/// assert_eq!(err.to_string(), "Failed to convert value 'abc' to type i32");
/// ```
pub fn parse(target: &TypeToken, text: &str) -> DotPathResult<Value> {
    let convert = converter(target).ok_or_else(|| DotPathError::unsupported_type(target))?;
    convert(text).map_err(|err| DotPathError::parse_failed(text, target).with_source(err))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use chrono::NaiveDate;

    use super::parse;
    use crate::info::TypeToken;
    use crate::{ErrorKind, Value};

    #[test]
    fn numbers() {
        assert_eq!(parse(&TypeToken::Byte, "-7").unwrap(), Value::Byte(-7));
        assert_eq!(parse(&TypeToken::Long, "9000000000").unwrap(), Value::Long(9_000_000_000));
        assert_eq!(parse(&TypeToken::Float, "1.5").unwrap(), Value::Float(1.5));
        assert_eq!(parse(&TypeToken::Double, " 3.25\n").unwrap(), Value::Double(3.25));

        let err = parse(&TypeToken::Int, "4.5").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert!(core::error::Error::source(&err).is_some());
    }

    #[test]
    fn booleans_are_lenient() {
        assert_eq!(parse(&TypeToken::Bool, "True").unwrap(), Value::Bool(true));
        assert_eq!(parse(&TypeToken::Bool, "yes").unwrap(), Value::Bool(false));
        assert_eq!(parse(&TypeToken::Bool, "").unwrap(), Value::Bool(false));
    }

    #[test]
    fn temporals() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 24).unwrap();
        assert_eq!(parse(&TypeToken::Date, "2023-12-24").unwrap(), Value::Date(date));

        let stamp = date.and_hms_milli_opt(18, 30, 5, 250).unwrap();
        assert_eq!(
            parse(&TypeToken::DateTime, "2023-12-24T18:30:05.250").unwrap(),
            Value::DateTime(stamp)
        );

        assert_eq!(
            parse(&TypeToken::DateTime, "2023-12-24T18:30").unwrap(),
            Value::DateTime(date.and_hms_opt(18, 30, 0).unwrap())
        );

        assert_eq!(
            parse(&TypeToken::Date, "24/12/2023").unwrap_err().kind(),
            ErrorKind::ParseFailed
        );
    }

    #[test]
    fn lists_drop_empty_elements() {
        assert_eq!(
            parse(&TypeToken::TextList, " a, b ,,c ").unwrap(),
            Value::from(vec!["a", "b", "c"])
        );
        assert_eq!(parse(&TypeToken::List, "").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn list_elements_are_inferred() {
        assert_eq!(
            parse(&TypeToken::List, "1, 2.5,true,x").unwrap(),
            Value::List(vec![
                Value::Int(1),
                Value::Double(2.5),
                Value::Bool(true),
                Value::from("x"),
            ])
        );
        assert_eq!(
            parse(&TypeToken::TextList, "1,2").unwrap(),
            Value::from(vec!["1", "2"])
        );
    }

    #[test]
    fn inference_order() {
        assert_eq!(parse(&TypeToken::Unknown, "12").unwrap(), Value::Int(12));
        assert_eq!(parse(&TypeToken::Unknown, "3000000000").unwrap(), Value::Double(3e9));
        assert_eq!(parse(&TypeToken::Unknown, "FALSE").unwrap(), Value::Bool(false));
        assert_eq!(parse(&TypeToken::Unknown, "x1").unwrap(), Value::from("x1"));
    }

    #[test]
    fn inference_keeps_non_finite_spellings_as_text() {
        for text in ["Nan", "nan", "inf", "-Infinity"] {
            assert_eq!(parse(&TypeToken::Unknown, text).unwrap(), Value::from(text));
        }
    }

    #[test]
    fn inference_ignores_surrounding_whitespace() {
        assert_eq!(parse(&TypeToken::Unknown, " 12 ").unwrap(), Value::Int(12));
        assert_eq!(parse(&TypeToken::Unknown, " true ").unwrap(), Value::Bool(true));
        assert_eq!(parse(&TypeToken::Unknown, "\tFALSE\n").unwrap(), Value::Bool(false));
        assert_eq!(parse(&TypeToken::Unknown, " x ").unwrap(), Value::from(" x "));
    }

    #[test]
    fn unsupported_targets() {
        let err = parse(&TypeToken::Dict, "{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.to_string(), "Unsupported type: Dict");
    }

    #[test]
    fn canonical_text_round_trips() {
        let date = NaiveDate::from_ymd_opt(1999, 1, 2).unwrap();
        let samples = [
            Value::Byte(-3),
            Value::Short(1200),
            Value::Int(-42),
            Value::Long(1 << 40),
            Value::Float(0.25),
            Value::Double(-1.125e10),
            Value::Bool(true),
            Value::from("plain text"),
            Value::Date(date),
            Value::DateTime(date.and_hms_opt(23, 59, 1).unwrap()),
        ];
        for value in samples {
            let text = value.to_string();
            assert_eq!(parse(&value.type_token(), &text).unwrap(), value, "{text}");
        }
    }
}
