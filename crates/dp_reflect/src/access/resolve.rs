//! Static type resolution along a path.

use crate::access::{DotPathError, DotPathResult, PropertyPath};
use crate::info::{RecordInfo, TypeToken};
use crate::{Node, Property, Root};

/// A live node, or only a type once the walk has left the data.
#[derive(Clone, Copy)]
enum TypeCursor<'a> {
    Live(Node<'a>),
    Static(TypeToken),
}

impl<'a> TypeCursor<'a> {
    /// A null property contributes its declared type only.
    fn of<P: Property + ?Sized>(property: &'a P, declared: TypeToken) -> Self {
        if property.is_null() {
            return TypeCursor::Static(declared);
        }
        match property.as_node() {
            Some(node) => TypeCursor::Live(node),
            None => TypeCursor::Static(property.runtime_type()),
        }
    }
}

fn declared_field(info: &'static RecordInfo, name: &str) -> DotPathResult<TypeToken> {
    match info.field(name) {
        Some(field) => Ok(field.declared_type()),
        None => Err(DotPathError::no_such_property(name, &TypeToken::Record(info))),
    }
}

fn step<'a>(current: TypeCursor<'a>, segment: &str) -> DotPathResult<TypeCursor<'a>> {
    match current {
        TypeCursor::Live(Node::Dict(dict)) => Ok(match dict.get(segment) {
            Some(value) => TypeCursor::of(value, TypeToken::Unknown),
            None => TypeCursor::Static(TypeToken::Unknown),
        }),
        TypeCursor::Live(Node::Record(record)) => {
            let info = record.reflect_type_info();
            let declared = declared_field(info, segment).map_err(wrap(segment))?;
            match record.property(segment) {
                Some(property) => Ok(TypeCursor::of(property, declared)),
                None => Ok(TypeCursor::Static(declared)),
            }
        }
        TypeCursor::Static(TypeToken::Record(info)) => declared_field(info, segment)
            .map(TypeCursor::Static)
            .map_err(wrap(segment)),
        TypeCursor::Static(TypeToken::Dict | TypeToken::Unknown) => {
            Ok(TypeCursor::Static(TypeToken::Unknown))
        }
        TypeCursor::Static(leaf) => {
            Err(wrap(segment)(DotPathError::no_such_property(segment, &leaf)))
        }
    }
}

fn wrap(segment: &str) -> impl FnOnce(DotPathError) -> DotPathError + '_ {
    move |err| DotPathError::access_failed(segment).with_source(err)
}

fn resolve_last(parent: TypeCursor<'_>, last: &str) -> DotPathResult<TypeToken> {
    match parent {
        TypeCursor::Live(Node::Dict(dict)) => Ok(dict
            .get(last)
            .filter(|value| !value.is_null())
            .map_or(TypeToken::Unknown, |value| value.type_token())),
        TypeCursor::Live(Node::Record(record)) => declared_field(record.reflect_type_info(), last),
        TypeCursor::Static(TypeToken::Record(info)) => declared_field(info, last),
        TypeCursor::Static(TypeToken::Dict | TypeToken::Unknown) => Ok(TypeToken::Unknown),
        TypeCursor::Static(leaf) => Err(DotPathError::no_such_property(last, &leaf)),
    }
}

/// Resolves the type a value at `path` has, or would have once created.
///
/// Existing data is inspected while it lasts. Past a null record field the
/// declared field types take over, and past an absent or null dictionary
/// entry everything is [`TypeToken::Unknown`]. The tree is never changed.
pub(crate) fn resolve<R: Root + ?Sized>(root: &R, path: &PropertyPath) -> DotPathResult<TypeToken> {
    let (intermediates, last) = path.split_last();
    let mut current = match root.root_node() {
        Some(node) => TypeCursor::Live(node),
        None => TypeCursor::Static(root.root_type()),
    };

    for segment in intermediates {
        current = step(current, segment)?;
    }

    let resolved = resolve_last(current, last)?;
    log::trace!("path '{path}' resolves to {resolved}");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::access::PropertyPath;
    use crate::info::TypeToken;
    use crate::{Dict, ErrorKind, Value};

    fn resolve_str(root: &Dict, path: &str) -> crate::DotPathResult<TypeToken> {
        resolve(root, &PropertyPath::parse(path).unwrap())
    }

    #[test]
    fn dictionaries() {
        let mut root = Dict::from([("level", Value::Int(3)), ("gone", Value::Null)]);
        root.insert("nested".into(), Dict::from([("name", "x")]).into());

        assert_eq!(resolve_str(&root, "level").unwrap(), TypeToken::Int);
        assert_eq!(resolve_str(&root, "nested.name").unwrap(), TypeToken::Text);
        assert_eq!(resolve_str(&root, "gone").unwrap(), TypeToken::Unknown);
        assert_eq!(resolve_str(&root, "absent.a.b").unwrap(), TypeToken::Unknown);
        assert_eq!(resolve_str(&root, "gone.a").unwrap(), TypeToken::Unknown);
    }

    #[test]
    fn leaves_have_no_properties() {
        let root = Dict::from([("level", 3)]);
        let err = resolve_str(&root, "level.x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchProperty);

        let err = resolve_str(&root, "level.x.y").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AccessFailed);
    }
}
