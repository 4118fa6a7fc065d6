use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Type};

use crate::RECORD_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// Attributes

/// `#[record(...)]` on the struct.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[record(default)]`
    pub default: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    this.default = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported `record` attribute, expected `default`"))
                }
            })?;
        }
        Ok(this)
    }
}

/// `#[record(...)]` on a field.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub getter: bool,
    pub setter: bool,
    pub skip: bool,
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(RECORD_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("getter") {
                    this.getter = true;
                } else if meta.path.is_ident("setter") {
                    this.setter = true;
                } else if meta.path.is_ident("accessors") {
                    this.getter = true;
                    this.setter = true;
                } else if meta.path.is_ident("skip") {
                    this.skip = true;
                } else if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() || name.value().contains('.') {
                        return Err(syn::Error::new(
                            name.span(),
                            "property name must be non-empty and cannot contain `.`",
                        ));
                    }
                    this.rename = Some(name);
                } else {
                    return Err(meta.error(
                        "unsupported `record` attribute, expected one of \
                         `getter`, `setter`, `accessors`, `rename`, `skip`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// RecordStruct

/// One exposed field.
pub(crate) struct RecordField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// Property name.
    pub name: String,
    pub getter: Option<Ident>,
    pub setter: Option<Ident>,
}

/// The parsed input of `#[derive(Record)]`.
pub(crate) struct RecordStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub fields: Vec<RecordField<'a>>,
}

impl<'a> RecordStruct<'a> {
    pub fn parse(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Record` cannot be derived for generic types",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new(
                        ast.ident.span(),
                        "`Record` can only be derived for structs with named fields",
                    ));
                }
            },
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Record` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Record` cannot be derived for unions",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields: Vec<RecordField<'a>> = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }

            // Named fields always carry an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            let raw = ident.to_string();
            let raw = raw.strip_prefix("r#").unwrap_or(&raw).to_owned();

            let span = field_attrs.rename.as_ref().map_or(ident.span(), LitStr::span);
            let name = field_attrs
                .rename
                .as_ref()
                .map_or_else(|| raw.clone(), LitStr::value);
            if fields.iter().any(|other| other.name == name) {
                return Err(syn::Error::new(
                    span,
                    format!("duplicate property name `{name}`"),
                ));
            }

            let accessor = |prefix: &str| Ident::new(&format!("{prefix}_{raw}"), ident.span());
            fields.push(RecordField {
                ident,
                ty: &field.ty,
                name,
                getter: field_attrs.getter.then(|| accessor("get")),
                setter: field_attrs.setter.then(|| accessor("set")),
            });
        }

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
        })
    }

    #[inline]
    pub fn has_getters(&self) -> bool {
        self.fields.iter().any(|field| field.getter.is_some())
    }

    #[inline]
    pub fn has_setters(&self) -> bool {
        self.fields.iter().any(|field| field.setter.is_some())
    }
}
