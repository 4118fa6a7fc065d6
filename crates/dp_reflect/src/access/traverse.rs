//! Walk the intermediate segments of a [`PropertyPath`].
//!
//! [`traverse`] is read-only and fails on the first null or missing link.
//! [`traverse_mut`] autovivifies: absent or null links are filled with a
//! fresh dictionary, or a default record when the field declares one.

use alloc::string::String;

use crate::access::{DotPathError, DotPathResult, PropertyPath};
use crate::info::{FieldInfo, TypeToken};
use crate::{Dict, Node, NodeMut, Property, Record, Root, Value};

// -----------------------------------------------------------------------------
// TraversalState

/// Progress of one operation through its path.
///
/// `Start -> AtIntermediate(0) -> .. -> AtFinal -> Done`, with `Failed`
/// reachable from every state but `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TraversalState {
    Start,
    AtIntermediate(usize),
    AtFinal,
    Done,
    Failed,
}

/// Records the [`TraversalState`] of an operation and logs the transitions.
pub(crate) struct Tracker<'p> {
    path: &'p PropertyPath,
    state: TraversalState,
}

impl<'p> Tracker<'p> {
    #[inline]
    pub fn new(path: &'p PropertyPath) -> Self {
        Self {
            path,
            state: TraversalState::Start,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TraversalState {
        self.state
    }

    fn advance(&mut self, next: TraversalState) {
        log::trace!("path '{}': {:?} -> {:?}", self.path, self.state, next);
        self.state = next;
    }

    /// Marks the failure of `result`, if any, and passes it through.
    fn check<T>(&mut self, result: DotPathResult<T>) -> DotPathResult<T> {
        if result.is_err() {
            self.advance(TraversalState::Failed);
        }
        result
    }

    /// Ends the operation with `result`.
    pub fn finish<T>(&mut self, result: DotPathResult<T>) -> DotPathResult<T> {
        match &result {
            Ok(_) => self.advance(TraversalState::Done),
            Err(err) => {
                log::debug!("path '{}' failed: {err}", self.path);
                if self.state != TraversalState::Failed {
                    self.advance(TraversalState::Failed);
                }
            }
        }
        result
    }
}

// -----------------------------------------------------------------------------
// Read-only

/// Where a read-only walk currently stands.
#[derive(Clone, Copy)]
enum Cursor<'a> {
    Null,
    Leaf(TypeToken),
    Node(Node<'a>),
}

impl<'a> Cursor<'a> {
    fn of<P: Property + ?Sized>(property: &'a P) -> Self {
        if property.is_null() {
            return Cursor::Null;
        }
        match property.as_node() {
            Some(node) => Cursor::Node(node),
            None => Cursor::Leaf(property.runtime_type()),
        }
    }

    fn root<R: Root + ?Sized>(root: &'a R) -> Self {
        match root.root_node() {
            Some(node) => Cursor::Node(node),
            None => Cursor::Leaf(root.root_type()),
        }
    }

    /// Requires a node to read or write the final segment on.
    fn into_parent(self, last: &str) -> DotPathResult<Node<'a>> {
        match self {
            Cursor::Null => Err(DotPathError::null_in_path(last)),
            Cursor::Leaf(ty) => Err(DotPathError::no_such_property(last, &ty)),
            Cursor::Node(node) => Ok(node),
        }
    }
}

fn step<'a>(current: Cursor<'a>, segment: &str) -> DotPathResult<Cursor<'a>> {
    match current {
        Cursor::Null => Err(DotPathError::null_in_path(segment)),
        Cursor::Leaf(ty) => Err(not_traversable(segment, &ty)),
        Cursor::Node(Node::Dict(dict)) => match dict.get(segment) {
            Some(value) => Ok(Cursor::of(value)),
            None => Err(DotPathError::missing_key(segment)),
        },
        Cursor::Node(Node::Record(record)) => match record.property(segment) {
            Some(property) => Ok(Cursor::of(property)),
            None => Err(not_traversable(
                segment,
                &TypeToken::Record(record.reflect_type_info()),
            )),
        },
    }
}

/// Walks every segment but the last, without changing anything.
///
/// Returns the node the final segment belongs to.
pub(crate) fn traverse<'a, 'p, R: Root + ?Sized>(
    root: &'a R,
    path: &'p PropertyPath,
    tracker: &mut Tracker<'_>,
) -> DotPathResult<(Node<'a>, &'p str)> {
    let (intermediates, last) = path.split_last();
    let mut current = Cursor::root(root);

    for (index, segment) in intermediates.iter().enumerate() {
        tracker.advance(TraversalState::AtIntermediate(index));
        current = tracker.check(step(current, segment))?;
    }

    tracker.advance(TraversalState::AtFinal);
    let parent = tracker.check(current.into_parent(last))?;
    Ok((parent, last))
}

// -----------------------------------------------------------------------------
// Autovivify

/// Where a mutating walk currently stands. Nulls never survive a step.
enum CursorMut<'a> {
    Leaf(TypeToken),
    Node(NodeMut<'a>),
}

impl<'a> CursorMut<'a> {
    fn of<P: Property + ?Sized>(property: &'a mut P) -> Self {
        let ty = property.runtime_type();
        match property.as_node_mut() {
            Some(node) => CursorMut::Node(node),
            None => CursorMut::Leaf(ty),
        }
    }

    fn root<R: Root + ?Sized>(root: &'a mut R) -> Self {
        let ty = root.root_type();
        match root.root_node_mut() {
            Some(node) => CursorMut::Node(node),
            None => CursorMut::Leaf(ty),
        }
    }

    fn into_parent(self, last: &str) -> DotPathResult<NodeMut<'a>> {
        match self {
            CursorMut::Leaf(ty) => Err(DotPathError::no_such_property(last, &ty)),
            CursorMut::Node(node) => Ok(node),
        }
    }
}

fn step_mut<'a>(current: CursorMut<'a>, segment: &str) -> DotPathResult<CursorMut<'a>> {
    match current {
        CursorMut::Leaf(ty) => Err(not_traversable(segment, &ty)),
        CursorMut::Node(NodeMut::Dict(dict)) => Ok(CursorMut::of(vivify_entry(dict, segment))),
        CursorMut::Node(NodeMut::Record(record)) => {
            let owner = TypeToken::Record(record.reflect_type_info());
            vivify_field(record, segment)?;
            match record.property_mut(segment) {
                Some(property) => Ok(CursorMut::of(property)),
                None => Err(not_traversable(segment, &owner)),
            }
        }
    }
}

/// Returns the entry for `key`, replacing an absent or null one with an
/// empty dictionary.
fn vivify_entry<'a>(dict: &'a mut Dict, key: &str) -> &'a mut Value {
    let slot = dict.entry(String::from(key)).or_insert(Value::Null);
    if slot.is_null() {
        log::debug!("autovivify key '{key}' with an empty Dict");
        *slot = Value::Dict(Dict::new());
    }
    slot
}

/// Fills the null field `name` with a fresh node of its declared type.
fn vivify_field(record: &mut dyn Record, name: &str) -> DotPathResult<()> {
    let info = record.reflect_type_info();
    let owner = TypeToken::Record(info);

    match record.property(name) {
        None => return Err(not_traversable(name, &owner)),
        Some(property) if !property.is_null() => return Ok(()),
        Some(_) => {}
    }

    let declared = info
        .field(name)
        .map_or(TypeToken::Unknown, FieldInfo::declared_type);
    let fresh = match declared {
        TypeToken::Record(target) => match target.construct() {
            Some(record) => Value::Record(record),
            None => return Err(DotPathError::construction_failed(name, &declared)),
        },
        TypeToken::Dict | TypeToken::Unknown => Value::Dict(Dict::new()),
        _ => return Err(DotPathError::construction_failed(name, &declared)),
    };

    log::debug!("autovivify field '{name}' of {owner} with a default {declared}");
    match record.property_mut(name).map(|property| property.assign(fresh)) {
        Some(Ok(())) => Ok(()),
        Some(Err(rejected)) => Err(DotPathError::value_mismatch(
            rejected.type_name(),
            &declared,
        )),
        None => Err(not_traversable(name, &owner)),
    }
}

/// Walks every segment but the last, creating missing intermediates.
///
/// Returns the node the final segment belongs to.
pub(crate) fn traverse_mut<'a, 'p, R: Root + ?Sized>(
    root: &'a mut R,
    path: &'p PropertyPath,
    tracker: &mut Tracker<'_>,
) -> DotPathResult<(NodeMut<'a>, &'p str)> {
    let (intermediates, last) = path.split_last();
    let mut current = CursorMut::root(root);

    for (index, segment) in intermediates.iter().enumerate() {
        tracker.advance(TraversalState::AtIntermediate(index));
        current = tracker.check(step_mut(current, segment))?;
    }

    tracker.advance(TraversalState::AtFinal);
    let parent = tracker.check(current.into_parent(last))?;
    Ok((parent, last))
}

/// `AccessFailed` wrapping the missing property.
fn not_traversable(segment: &str, owner: &TypeToken) -> DotPathError {
    DotPathError::access_failed(segment)
        .with_source(DotPathError::no_such_property(segment, owner))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{TraversalState, Tracker, traverse, traverse_mut};
    use crate::access::PropertyPath;
    use crate::{Dict, ErrorKind, Node, NodeMut, Value};

    #[test]
    fn read_walk_reaches_parent() {
        let mut inner = Dict::new();
        inner.insert("b".into(), Value::Int(1));
        let root = Dict::from([("a", inner)]);

        let path = PropertyPath::parse("a.b").unwrap();
        let mut tracker = Tracker::new(&path);
        let (parent, last) = traverse(&root, &path, &mut tracker).unwrap();

        assert_eq!(last, "b");
        assert!(matches!(parent, Node::Dict(dict) if dict.contains_key("b")));
        assert_eq!(tracker.state(), TraversalState::AtFinal);
    }

    #[test]
    fn read_walk_fails_on_null_and_missing() {
        let root = Dict::from([("a", Value::Null)]);

        let path = PropertyPath::parse("a.b.c").unwrap();
        let mut tracker = Tracker::new(&path);
        let err = traverse(&root, &path, &mut tracker).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::NullInPath);
        assert_eq!(err.to_string(), "Null while traversing: b");
        assert_eq!(tracker.state(), TraversalState::Failed);

        let path = PropertyPath::parse("x.y").unwrap();
        let err = traverse(&root, &path, &mut Tracker::new(&path)).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingKey);
    }

    #[test]
    fn read_walk_into_leaf() {
        let root = Dict::from([("n", 5)]);
        let path = PropertyPath::parse("n.m.k").unwrap();
        let err = traverse(&root, &path, &mut Tracker::new(&path)).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::AccessFailed);
        assert_eq!(err.root_message(), "Property 'm' not found in class i32");
    }

    #[test]
    fn autovivify_dicts() {
        let mut root = Dict::from([("a", Value::Null)]);
        let path = PropertyPath::parse("a.b.c").unwrap();

        let (parent, last) = traverse_mut(&mut root, &path, &mut Tracker::new(&path)).unwrap();
        assert_eq!(last, "c");
        assert!(matches!(parent, NodeMut::Dict(dict) if dict.is_empty()));

        let a = root["a"].as_dict().unwrap();
        assert!(a["b"].as_dict().unwrap().is_empty());
    }
}
