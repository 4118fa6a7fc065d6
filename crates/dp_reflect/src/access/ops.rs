use alloc::format;

use crate::access::traverse::{Tracker, traverse, traverse_mut};
use crate::access::{DotPathError, DotPathResult, PropertyPath, resolve, validate};
use crate::convert::parse;
use crate::info::{FieldInfo, TypeToken, compatible};
use crate::{Node, NodeMut, Root, TypedProperty, Value};

// -----------------------------------------------------------------------------
// Final segment

fn read_final(parent: Node<'_>, last: &str) -> DotPathResult<Value> {
    match parent {
        Node::Dict(dict) => dict
            .get(last)
            .cloned()
            .ok_or_else(|| DotPathError::missing_key(last)),
        Node::Record(record) => record.read_property(last).ok_or_else(|| {
            DotPathError::no_such_property(last, &TypeToken::Record(record.reflect_type_info()))
        }),
    }
}

fn write_final(parent: NodeMut<'_>, last: &str, value: Value) -> DotPathResult<()> {
    match parent {
        NodeMut::Dict(dict) => {
            dict.insert(last.into(), value);
            Ok(())
        }
        NodeMut::Record(record) => {
            let info = record.reflect_type_info();
            let found = value.type_name();
            match record.write_property(last, value) {
                Some(Ok(())) => Ok(()),
                Some(Err(_)) => {
                    let declared = info
                        .field(last)
                        .map_or(TypeToken::Unknown, FieldInfo::declared_type);
                    Err(DotPathError::value_mismatch(found, &declared))
                }
                None => Err(DotPathError::no_such_property(
                    last,
                    &TypeToken::Record(info),
                )),
            }
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyPath

impl PropertyPath {
    /// Reads the value at this path.
    ///
    /// Nothing is created on the way: a null intermediate fails with
    /// [`NullInPath`](crate::ErrorKind::NullInPath) and an absent dictionary
    /// key with [`MissingKey`](crate::ErrorKind::MissingKey). A key mapped
    /// to an explicit null reads as [`Value::Null`].
    pub fn get<R: Root + ?Sized>(&self, root: &R) -> DotPathResult<Value> {
        validate::require_root(root, "root")?;
        let mut tracker = Tracker::new(self);
        let result = traverse(root, self, &mut tracker)
            .and_then(|(parent, last)| read_final(parent, last));
        tracker.finish(result)
    }

    /// Reads the value at this path and converts it into `T`.
    ///
    /// The conversion follows the rules of [`TypedProperty::from_value`] and
    /// fails with [`TypeMismatch`](crate::ErrorKind::TypeMismatch).
    pub fn get_as<T: TypedProperty, R: Root + ?Sized>(&self, root: &R) -> DotPathResult<T> {
        let value = self.get(root)?;
        T::from_value(value).map_err(|rejected| {
            DotPathError::value_mismatch(rejected.type_name(), &T::declared_type())
        })
    }

    /// Writes `value` at this path, creating missing intermediates.
    ///
    /// Dictionary entries are replaced unconditionally. Record fields are
    /// written only when the value converts into the field type; otherwise
    /// the field is left untouched and the call fails with
    /// [`TypeMismatch`](crate::ErrorKind::TypeMismatch). Intermediates created
    /// before a failure are kept.
    pub fn set<R: Root + ?Sized>(&self, root: &mut R, value: impl Into<Value>) -> DotPathResult<()> {
        validate::require_root(root, "root")?;
        let value = value.into();
        let mut tracker = Tracker::new(self);
        let result = traverse_mut(root, self, &mut tracker)
            .and_then(|(parent, last)| write_final(parent, last, value));
        tracker.finish(result)
    }

    /// Returns the type a value at this path has, or would have once the
    /// path is created. See [`resolve_type`](crate::resolve_type).
    pub fn resolve_type<R: Root + ?Sized>(&self, root: &R) -> DotPathResult<TypeToken> {
        validate::require_root(root, "root")?;
        resolve::resolve(root, self)
    }

    /// Copies the value at this path from `source` to `target`.
    ///
    /// Both roots must have the same type and the resolved types at the path
    /// must be [compatible](crate::compatible).
    pub fn copy<S, T>(&self, source: &S, target: &mut T) -> DotPathResult<()>
    where
        S: Root + ?Sized,
        T: Root + ?Sized,
    {
        validate::require_root(source, "source")?;
        validate::require_root(target, "target")?;

        let source_type = source.root_type();
        let target_type = target.root_type();
        if source_type != target_type {
            return Err(DotPathError::root_mismatch(&source_type, &target_type));
        }

        self.copy_unchecked(source, target).map_err(|err| {
            let message = format!("Failed to copy property: {err}");
            err.context(message)
        })
    }

    fn copy_unchecked<S, T>(&self, source: &S, target: &mut T) -> DotPathResult<()>
    where
        S: Root + ?Sized,
        T: Root + ?Sized,
    {
        let from = resolve::resolve(source, self)?;
        let to = resolve::resolve(&*target, self)?;
        if !compatible(&from, &to) {
            return Err(DotPathError::copy_mismatch(&from, &to));
        }

        log::debug!("copy '{self}' from {from} to {to}");
        let value = self.get(source)?;
        self.set(target, value)
    }

    /// Parses `text` into the type resolved at this path and writes it.
    pub fn set_from_str<R: Root + ?Sized>(&self, root: &mut R, text: &str) -> DotPathResult<()> {
        validate::require_root(root, "root")?;
        validate::require(Some(text), "value")?;

        self.parse_and_set(root, text).map_err(|err| {
            err.context(format!("Error setting value from string at path: {self}"))
        })
    }

    fn parse_and_set<R: Root + ?Sized>(&self, root: &mut R, text: &str) -> DotPathResult<()> {
        let target = resolve::resolve(&*root, self)?;
        let value = parse(&target, text)?;
        log::trace!("'{text}' parsed as {target} for '{self}'");
        self.set(root, value)
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Reads the value at `path`.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, ErrorKind, Value};
///
/// let mut map = Dict::new();
/// map.insert("nested".into(), Dict::from([("inner", "value")]).into());
///
/// assert_eq!(dp_reflect::get(&map, "nested.inner").unwrap(), Value::from("value"));
/// assert_eq!(
///     dp_reflect::get(&map, "nested.absent.x").unwrap_err().kind(),
///     ErrorKind::MissingKey,
/// );
/// ```
pub fn get<R: Root + ?Sized>(root: &R, path: &str) -> DotPathResult<Value> {
    validate::require_root(root, "root")?;
    PropertyPath::parse(path)?.get(root)
}

/// Reads the value at `path` as a `T`.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, ErrorKind};
///
/// let map = Dict::from([("level", 5)]);
/// assert_eq!(dp_reflect::get_as::<i64, _>(&map, "level").unwrap(), 5);
/// assert_eq!(
///     dp_reflect::get_as::<String, _>(&map, "level").unwrap_err().kind(),
///     ErrorKind::TypeMismatch,
/// );
/// ```
pub fn get_as<T: TypedProperty, R: Root + ?Sized>(root: &R, path: &str) -> DotPathResult<T> {
    validate::require_root(root, "root")?;
    PropertyPath::parse(path)?.get_as(root)
}

/// Writes `value` at `path`, creating missing intermediates.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, Value};
///
/// let mut map = Dict::new();
/// dp_reflect::set(&mut map, "a.b.c", 1).unwrap();
/// assert_eq!(dp_reflect::get(&map, "a.b.c").unwrap(), Value::Int(1));
/// ```
pub fn set<R: Root + ?Sized>(root: &mut R, path: &str, value: impl Into<Value>) -> DotPathResult<()> {
    validate::require_root(root, "root")?;
    PropertyPath::parse(path)?.set(root, value)
}

/// Copies the value at `path` from `source` to `target`.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, ErrorKind, Value};
///
/// let source = Dict::from([("level", 5)]);
/// let mut target = Dict::new();
/// dp_reflect::copy(&source, &mut target, "level").unwrap();
/// assert_eq!(target["level"], Value::Int(5));
///
/// let mut text = Value::from("this is a string");
/// let err = dp_reflect::copy(&source, &mut text, "level").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// ```
pub fn copy<S, T>(source: &S, target: &mut T, path: &str) -> DotPathResult<()>
where
    S: Root + ?Sized,
    T: Root + ?Sized,
{
    validate::require_root(source, "source")?;
    validate::require_root(target, "target")?;
    PropertyPath::parse(path)?.copy(source, target)
}

/// Parses `text` into the type found at `path` and writes it.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, Value};
///
/// let mut map = Dict::new();
/// dp_reflect::set_from_string(&mut map, "stats.score", "1000").unwrap();
/// assert_eq!(dp_reflect::get(&map, "stats.score").unwrap(), Value::Int(1000));
/// ```
pub fn set_from_string<R: Root + ?Sized>(root: &mut R, path: &str, text: &str) -> DotPathResult<()> {
    validate::require_root(root, "root")?;
    PropertyPath::parse(path)?.set_from_str(root, text)
}

/// Returns the type a value at `path` has, or would have once created.
///
/// Record fields report their declared type, even when null. Dictionary
/// entries report the type of the stored value, or [`TypeToken::Unknown`]
/// when absent or null.
///
/// # Examples
///
/// ```
/// use dp_reflect::{Dict, TypeToken};
///
/// let map = Dict::from([("level", 5)]);
/// assert_eq!(dp_reflect::resolve_type(&map, "level").unwrap(), TypeToken::Int);
/// assert_eq!(dp_reflect::resolve_type(&map, "other").unwrap(), TypeToken::Unknown);
/// ```
pub fn resolve_type<R: Root + ?Sized>(root: &R, path: &str) -> DotPathResult<TypeToken> {
    validate::require_root(root, "root")?;
    PropertyPath::parse(path)?.resolve_type(root)
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use chrono::NaiveDate;

    use super::{copy, get, get_as, resolve_type, set, set_from_string};
    use crate::derive::Record;
    use crate::info::TypeToken;
    use crate::{Dict, ErrorKind, PropertyPath, Record, Typed, Value, parse};

    #[derive(Record, Clone, Default, Debug, PartialEq)]
    #[record(default)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Record, Clone, Default)]
    #[record(default)]
    struct State {
        count: i32,
        value: f64,
        player: String,
        position: Option<Point>,
        properties: Dict,
        tags: Vec<String>,
        started: Option<NaiveDate>,
        extra: Value,
    }

    fn state() -> State {
        State {
            count: 42,
            value: 3.14,
            player: "Player1".into(),
            position: Some(Point { x: 10, y: 20 }),
            ..State::default()
        }
    }

    #[derive(Record, Clone)]
    struct Locked {
        secret: i32,
    }

    #[derive(Record, Clone, Default)]
    #[record(default)]
    struct Holder {
        locked: Option<Locked>,
        number: Option<i32>,
    }

    #[derive(Record, Clone, Default)]
    #[record(default)]
    struct Account {
        #[record(accessors)]
        balance: i64,
        #[record(rename = "owner")]
        holder: String,
        #[record(skip)]
        audit: u32,
    }

    impl Account {
        fn get_balance(&self) -> i64 {
            self.balance
        }

        fn set_balance(&mut self, balance: i64) {
            self.audit += 1;
            self.balance = balance;
        }
    }

    #[derive(Record, Clone, Default)]
    #[record(default)]
    struct Doubled {
        #[record(getter)]
        amount: i32,
        rolls: Vec<i32>,
    }

    impl Doubled {
        fn get_amount(&self) -> i32 {
            self.amount * 2
        }
    }

    #[test]
    fn record_fields_round_trip() {
        let mut state = state();
        assert_eq!(get(&state, "count").unwrap(), Value::Int(42));

        set(&mut state, "count", 7).unwrap();
        set(&mut state, "player", "Player2").unwrap();
        set(&mut state, "tags", vec!["a", "b"]).unwrap();
        assert_eq!(get(&state, "count").unwrap(), Value::Int(7));
        assert_eq!(get(&state, "player").unwrap(), Value::from("Player2"));
        assert_eq!(state.tags, ["a", "b"]);
    }

    #[test]
    fn dictionary_round_trip() {
        let mut dict = Dict::new();
        set(&mut dict, "k", 1.5).unwrap();
        assert_eq!(get(&dict, "k").unwrap(), Value::Double(1.5));

        dict.insert("nothing".into(), Value::Null);
        assert_eq!(get(&dict, "nothing").unwrap(), Value::Null);
    }

    #[test]
    fn nested_round_trip() {
        let mut state = state();
        set(&mut state, "properties.inner", Dict::new()).unwrap();
        set(&mut state, "properties.inner.c", true).unwrap();
        assert_eq!(get(&state, "properties.inner.c").unwrap(), Value::Bool(true));
    }

    #[test]
    fn autovivify_record_field() {
        let mut state = State::default();
        assert!(state.position.is_none());

        set(&mut state, "position.x", 10).unwrap();
        assert_eq!(state.position, Some(Point { x: 10, y: 0 }));
    }

    #[test]
    fn autovivify_value_field_as_dict() {
        let mut state = State::default();
        set(&mut state, "extra.deep.level", 3).unwrap();
        assert_eq!(get(&state, "extra.deep.level").unwrap(), Value::Int(3));
        assert!(state.extra.as_dict().is_some());
    }

    #[test]
    fn autovivify_failures() {
        let mut holder = Holder::default();

        let err = set(&mut holder, "locked.secret", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionFailed);
        assert!(holder.locked.is_none());

        let err = set(&mut holder, "number.x", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstructionFailed);
    }

    #[test]
    fn null_in_read_path() {
        let mut state = State::default();
        let err = get(&state, "position.x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullInPath);
        assert_eq!(err.to_string(), "Null while traversing: x");

        set(&mut state, "position.x", 1).unwrap();
        assert_eq!(get(&state, "position.x").unwrap(), Value::Int(1));
    }

    #[test]
    fn empty_segments_are_invalid_and_change_nothing() {
        let mut dict = Dict::new();
        for path in ["a..b", " ", ".a", "a.", "a. .b"] {
            let err = set(&mut dict, path, 1).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Invalid, "{path:?}");
        }
        assert!(dict.is_empty());
    }

    #[test]
    fn missing_properties() {
        let mut state = state();
        let err = get(&state, "nope").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchProperty);
        assert!(err.to_string().starts_with("Property 'nope' not found in class"));

        let err = get(&state, "nope.x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessFailed);
        assert_eq!(err.to_string(), "Error traversing path segment: nope");

        let err = set(&mut state, "count.x", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchProperty);
        assert_eq!(err.to_string(), "Property 'x' not found in class i32");
    }

    #[test]
    fn write_type_mismatch_keeps_field() {
        let mut state = state();

        let err = set(&mut state, "count", "ten").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(
            err.to_string(),
            "Type mismatch: value type String is not compatible with field type i32"
        );
        assert_eq!(state.count, 42);

        let err = set(&mut state, "count", 1_i64 << 40).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        set(&mut state, "count", 5_i64).unwrap();
        set(&mut state, "value", 2).unwrap();
        assert_eq!((state.count, state.value), (5, 2.0));
    }

    #[test]
    fn accessors_rename_and_skip() {
        let mut account = Account::default();

        set(&mut account, "balance", 100).unwrap();
        assert_eq!(account.audit, 1);
        assert_eq!(get_as::<i64, _>(&account, "balance").unwrap(), 100);

        set(&mut account, "owner", "ada").unwrap();
        assert_eq!(account.holder, "ada");

        assert_eq!(
            get(&account, "holder").unwrap_err().kind(),
            ErrorKind::NoSuchProperty
        );
        assert_eq!(
            get(&account, "audit").unwrap_err().kind(),
            ErrorKind::NoSuchProperty
        );
    }

    #[test]
    fn reads_go_through_the_getter() {
        let mut doubled = Doubled::default();

        set(&mut doubled, "amount", 21).unwrap();
        assert_eq!(doubled.amount, 21);
        assert_eq!(get(&doubled, "amount").unwrap(), Value::Int(42));

        let mut target = Doubled::default();
        copy(&doubled, &mut target, "amount").unwrap();
        assert_eq!(target.amount, 42);
    }

    #[test]
    fn copy_matches_get_then_set() {
        let source = state();
        let mut target = State::default();

        copy(&source, &mut target, "position.y").unwrap();
        assert_eq!(target.position, Some(Point { x: 0, y: 20 }));

        copy(&source, &mut target, "count").unwrap();
        assert_eq!(get(&target, "count").unwrap(), get(&source, "count").unwrap());
    }

    #[test]
    fn copy_rejects_different_roots() {
        let source = state();
        let mut text = Value::from("this is a string");

        let err = copy(&source, &mut text, "count").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        let message = err.to_string();
        assert!(message.contains(State::type_info().type_path()), "{message}");
        assert!(message.contains("String"), "{message}");

        let mut point = Point::default();
        let err = copy(&source, &mut point, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn copy_between_dictionaries_checks_leaf_types() {
        let source = Dict::from([("v", "text")]);
        let mut target = Dict::from([("v", 1)]);

        let err = copy(&source, &mut target, "v").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.to_string(), "Failed to copy property: Type mismatch: cannot copy from String to i32");
        assert_eq!(target["v"], Value::Int(1));

        let source = Dict::from([("v", 2.5)]);
        copy(&source, &mut target, "v").unwrap();
        assert_eq!(target["v"], Value::Double(2.5));
    }

    #[test]
    fn copy_null_roots() {
        let mut target = Dict::new();
        let err = copy(&Value::Null, &mut target, "a").unwrap_err();
        assert_eq!(err.to_string(), "source cannot be null");
    }

    #[test]
    fn set_from_string_matches_parse_then_set() {
        let mut state = state();

        set_from_string(&mut state, "count", "42").unwrap();
        set_from_string(&mut state, "value", "3.14").unwrap();
        set_from_string(&mut state, "tags", "red, green,,blue").unwrap();
        set_from_string(&mut state, "started", "2024-02-29").unwrap();
        assert_eq!(state.count, 42);
        assert_eq!(state.value, 3.14);
        assert_eq!(state.tags, ["red", "green", "blue"]);
        assert_eq!(state.started, NaiveDate::from_ymd_opt(2024, 2, 29));

        let mut expected = state.clone();
        set(&mut expected, "player", parse(&TypeToken::Text, " P3 ").unwrap()).unwrap();
        set_from_string(&mut state, "player", " P3 ").unwrap();
        assert_eq!(state.player, expected.player);
    }

    #[test]
    fn set_from_string_failures() {
        let mut state = state();

        let err = set_from_string(&mut state, "count", "many").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
        assert_eq!(err.to_string(), "Error setting value from string at path: count");
        assert_eq!(err.root_message(), "invalid digit found in string");
        assert_eq!(state.count, 42);

        let err = set_from_string(&mut state, "count", "  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);

        let err = set_from_string(&mut state, "properties", "{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailed);
    }

    #[test]
    fn resolve_prefers_declared_types() {
        let state = State::default();
        assert_eq!(resolve_type(&state, "position").unwrap(), TypeToken::Record(Point::type_info()));
        assert_eq!(resolve_type(&state, "position.x").unwrap(), TypeToken::Int);
        assert_eq!(resolve_type(&state, "started").unwrap(), TypeToken::Date);
        assert_eq!(resolve_type(&state, "properties.any.thing").unwrap(), TypeToken::Unknown);
        assert_eq!(resolve_type(&state, "extra").unwrap(), TypeToken::Unknown);
    }

    #[test]
    fn reusable_path() {
        let path: PropertyPath = "position.x".parse().unwrap();
        let mut a = state();
        let mut b = State::default();

        path.set(&mut a, 1).unwrap();
        path.set(&mut b, 2).unwrap();
        assert_eq!(path.get_as::<i32, _>(&a).unwrap(), 1);
        assert_eq!(path.get_as::<i32, _>(&b).unwrap(), 2);
        assert_eq!(path.resolve_type(&a).unwrap(), TypeToken::Int);
    }

    #[test]
    fn dyn_record_roots() {
        let mut boxed: Box<dyn Record> = Box::new(state());
        set(&mut *boxed, "position.y", 99).unwrap();
        assert_eq!(get(&*boxed, "position.y").unwrap(), Value::Int(99));
        assert_eq!(boxed.downcast_ref::<State>().map(|s| s.count), Some(42));
    }

    // -------------------------------------------------------------------------
    // Scenarios

    #[test]
    fn nested_record_access() {
        let mut state = state();
        assert_eq!(get(&state, "position.x").unwrap(), Value::Int(10));

        set(&mut state, "position.x", 50).unwrap();
        assert_eq!(get(&state, "position.x").unwrap(), Value::Int(50));
    }

    #[test]
    fn dictionary_field_access() {
        let mut state = state();
        state.properties = Dict::from([("level", 5), ("score", 1000)]);
        assert_eq!(get(&state, "properties.level").unwrap(), Value::Int(5));

        set(&mut state, "properties.achievements", vec!["victory", "mvp"]).unwrap();
        assert_eq!(
            get(&state, "properties.achievements").unwrap(),
            Value::from(vec!["victory", "mvp"])
        );
    }

    #[test]
    fn set_from_string_infers_dictionary_leaves() {
        let mut state = state();
        set_from_string(&mut state, "properties.score", "1000").unwrap();
        assert_eq!(state.properties["score"], Value::Int(1000));

        set_from_string(&mut state, "properties.ratio", "0.5").unwrap();
        set_from_string(&mut state, "properties.flag", "TRUE").unwrap();
        set_from_string(&mut state, "properties.name", "bob").unwrap();
        assert_eq!(state.properties["ratio"], Value::Double(0.5));
        assert_eq!(state.properties["flag"], Value::Bool(true));
        assert_eq!(state.properties["name"], Value::from("bob"));

        set_from_string(&mut state, "properties.nickname", "Nan").unwrap();
        set_from_string(&mut state, "properties.limit", "Infinity").unwrap();
        set_from_string(&mut state, "properties.enabled", " false ").unwrap();
        assert_eq!(state.properties["nickname"], Value::from("Nan"));
        assert_eq!(state.properties["limit"], Value::from("Infinity"));
        assert_eq!(state.properties["enabled"], Value::Bool(false));
    }

    #[test]
    fn set_from_string_converts_list_elements() {
        let mut doubled = Doubled::default();
        set_from_string(&mut doubled, "rolls", "4, 6,,1").unwrap();
        assert_eq!(doubled.rolls, vec![4, 6, 1]);

        let err = set_from_string(&mut doubled, "rolls", "4,six").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(doubled.rolls, vec![4, 6, 1]);
    }

    #[test]
    fn set_from_string_through_null_record() {
        let mut state = state();
        state.position = None;

        set_from_string(&mut state, "position.x", "30").unwrap();
        assert_eq!(state.position.map(|p| p.x), Some(30));
    }

    #[test]
    fn nested_dictionary_in_place() {
        let mut map = Dict::new();
        map.insert("nested".into(), Dict::from([("inner", "value")]).into());
        assert_eq!(get(&map, "nested.inner").unwrap(), Value::from("value"));

        set(&mut map, "nested.inner", "new value").unwrap();
        let nested = map["nested"].as_dict().unwrap();
        assert_eq!(nested["inner"], Value::from("new value"));
        assert_eq!(nested.len(), 1);
    }
}
