use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::num::{ParseFloatError, ParseIntError};
use core::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::Value;
use crate::info::TypeToken;
use crate::value::{DATE_FORMAT, DATE_TIME_FORMAT};

/// ISO-8601 date-time without seconds.
const DATE_TIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

// -----------------------------------------------------------------------------
// Error

/// Failure of a single converter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("{0}")]
    Temporal(chrono::ParseError),
}

impl From<chrono::ParseError> for ConvertError {
    #[inline]
    fn from(value: chrono::ParseError) -> Self {
        Self::Temporal(value)
    }
}

// -----------------------------------------------------------------------------
// Registry

/// A pure text-to-value function for one target type.
pub type ConvertFn = fn(&str) -> Result<Value, ConvertError>;

/// An entry of the [converter registry](CONVERTERS).
#[derive(Clone, Copy)]
pub struct Converter {
    pub target: TypeToken,
    pub convert: ConvertFn,
}

/// The converter registry: one entry per parseable type, built at compile
/// time and never mutated.
pub static CONVERTERS: &[Converter] = &[
    Converter { target: TypeToken::Byte, convert: parse_byte },
    Converter { target: TypeToken::Short, convert: parse_short },
    Converter { target: TypeToken::Int, convert: parse_int },
    Converter { target: TypeToken::Long, convert: parse_long },
    Converter { target: TypeToken::Float, convert: parse_float },
    Converter { target: TypeToken::Double, convert: parse_double },
    Converter { target: TypeToken::Bool, convert: parse_bool },
    Converter { target: TypeToken::Text, convert: parse_text },
    Converter { target: TypeToken::Date, convert: parse_date },
    Converter { target: TypeToken::DateTime, convert: parse_date_time },
    Converter { target: TypeToken::TextList, convert: parse_text_list },
    Converter { target: TypeToken::List, convert: parse_list },
    Converter { target: TypeToken::Unknown, convert: infer },
];

/// Looks up the converter for `target`.
pub fn converter(target: &TypeToken) -> Option<ConvertFn> {
    CONVERTERS
        .iter()
        .find(|entry| entry.target == *target)
        .map(|entry| entry.convert)
}

// -----------------------------------------------------------------------------
// Converters

fn parse_byte(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Byte(text.trim().parse()?))
}

fn parse_short(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Short(text.trim().parse()?))
}

fn parse_int(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Int(text.trim().parse()?))
}

fn parse_long(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Long(text.trim().parse()?))
}

fn parse_float(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Float(text.trim().parse()?))
}

fn parse_double(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Double(text.trim().parse()?))
}

/// Lenient: anything but a case-insensitive `"true"` is `false`.
fn parse_bool(text: &str) -> Result<Value, ConvertError> {
    let value = text.eq_ignore_ascii_case("true");
    if !value && !text.eq_ignore_ascii_case("false") {
        log::debug!("boolean text '{text}' read as false");
    }
    Ok(Value::Bool(value))
}

fn parse_text(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Text(text.to_string()))
}

fn parse_date(text: &str) -> Result<Value, ConvertError> {
    Ok(Value::Date(NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)?))
}

/// Seconds are optional, as in ISO-8601.
fn parse_date_time(text: &str) -> Result<Value, ConvertError> {
    let text = text.trim();
    let stamp = NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, DATE_TIME_MINUTES_FORMAT))
        .or_else(|_| NaiveDateTime::from_str(text))?;
    Ok(Value::DateTime(stamp))
}

fn list_items(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|item| !item.is_empty())
}

/// Comma separated, trimmed, empty elements dropped.
fn parse_text_list(text: &str) -> Result<Value, ConvertError> {
    let items: Vec<Value> = list_items(text)
        .map(|item| Value::Text(String::from(item)))
        .collect();
    Ok(Value::List(items))
}

/// As [`parse_text_list`], with each element inferred like an unknown leaf.
/// The list is then converted element-wise into the declared `Vec<T>`.
fn parse_list(text: &str) -> Result<Value, ConvertError> {
    let items: Vec<Value> = list_items(text).map(infer_leaf).collect();
    Ok(Value::List(items))
}

fn infer(text: &str) -> Result<Value, ConvertError> {
    Ok(infer_leaf(text))
}

/// Integer, then finite floating point, then boolean, then the text itself.
///
/// Classification ignores surrounding whitespace; the text fallback keeps the
/// input as given.
fn infer_leaf(text: &str) -> Value {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i32>() {
        return Value::Int(n);
    }
    // `f64::from_str` also reads "nan" and "inf", which stay text here.
    if let Ok(n) = trimmed.parse::<f64>()
        && n.is_finite()
    {
        return Value::Double(n);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::Text(text.to_string())
}
