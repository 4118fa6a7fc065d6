use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use crate::derive_data::RecordStruct;
use crate::path::{dp_reflect, macro_exports_};

/// Generates every impl of `#[derive(Record)]`, wrapped in an anonymous const.
pub(crate) fn impl_record(data: &RecordStruct<'_>) -> TokenStream {
    let dp_reflect_path = dp_reflect();
    let ex = macro_exports_(&dp_reflect_path);

    let typed = impl_typed(data, &ex);
    let record = impl_trait_record(data, &ex);
    let property = impl_property(data, &ex);

    quote! {
        const _: () = {
            #[allow(unused_imports)]
            use #ex::Property as _;

            #typed
            #record
            #property
        };
    }
}

// -----------------------------------------------------------------------------
// Typed

fn impl_typed(data: &RecordStruct<'_>, ex: &TokenStream) -> TokenStream {
    let ident = data.ident;
    let type_name = ident.to_string();
    let field_len = data.fields.len();

    let fields = data.fields.iter().map(|field| {
        let name = &field.name;
        let ty = field.ty;
        let reader = field.getter.as_ref().map(|getter| {
            let getter = getter.to_string();
            quote! { .with_reader(#getter) }
        });
        let writer = field.setter.as_ref().map(|setter| {
            let setter = setter.to_string();
            quote! { .with_writer(#setter) }
        });
        quote! {
            #ex::FieldInfo::new(#name, <#ty as #ex::TypedProperty>::declared_type)
                #reader
                #writer
        }
    });

    let (constructor_fn, with_constructor) = match data.attrs.default {
        Some(span) => (
            quote_spanned! { span =>
                fn __construct() -> #ex::Box<dyn #ex::Record> {
                    #ex::Box::new(<#ident as ::core::default::Default>::default())
                }
            },
            quote! { .with_constructor(__construct) },
        ),
        None => (TokenStream::new(), TokenStream::new()),
    };

    quote! {
        #constructor_fn

        impl #ex::Typed for #ident {
            fn type_info() -> &'static #ex::RecordInfo {
                static FIELDS: [#ex::FieldInfo; #field_len] = [ #(#fields),* ];
                static INFO: #ex::RecordInfo = #ex::RecordInfo::new::<#ident>(
                    ::core::concat!(::core::module_path!(), "::", #type_name),
                    #type_name,
                    &FIELDS,
                )
                #with_constructor;
                &INFO
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Record

fn impl_trait_record(data: &RecordStruct<'_>, ex: &TokenStream) -> TokenStream {
    let ident = data.ident;
    let names: Vec<&String> = data.fields.iter().map(|field| &field.name).collect();
    let members: Vec<_> = data.fields.iter().map(|field| field.ident).collect();

    let read_property = data.has_getters().then(|| {
        let arms = data.fields.iter().filter_map(|field| {
            let name = &field.name;
            let getter = field.getter.as_ref()?;
            Some(quote! {
                #name => #ex::Some(self.#getter().to_value()),
            })
        });
        quote! {
            fn read_property(&self, name: &str) -> #ex::Option<#ex::Value> {
                match name {
                    #(#arms)*
                    _ => #ex::Record::property(self, name).map(|property| property.to_value()),
                }
            }
        }
    });

    let write_property = data.has_setters().then(|| {
        let arms = data.fields.iter().filter_map(|field| {
            let name = &field.name;
            let ty = field.ty;
            let setter = field.setter.as_ref()?;
            Some(quote! {
                #name => #ex::Some(
                    match <#ty as #ex::TypedProperty>::from_value(value) {
                        #ex::Ok(__converted) => {
                            self.#setter(__converted);
                            #ex::Ok(())
                        }
                        #ex::Err(__rejected) => #ex::Err(__rejected),
                    }
                ),
            })
        });
        quote! {
            fn write_property(
                &mut self,
                name: &str,
                value: #ex::Value,
            ) -> #ex::Option<#ex::Result<(), #ex::Value>> {
                match name {
                    #(#arms)*
                    _ => #ex::Record::property_mut(self, name).map(|property| property.assign(value)),
                }
            }
        }
    });

    quote! {
        impl #ex::Record for #ident {
            #[inline]
            fn reflect_type_info(&self) -> &'static #ex::RecordInfo {
                <Self as #ex::Typed>::type_info()
            }

            fn property(&self, name: &str) -> #ex::Option<&dyn #ex::Property> {
                match name {
                    #(#names => #ex::Some(&self.#members),)*
                    _ => #ex::None,
                }
            }

            fn property_mut(&mut self, name: &str) -> #ex::Option<&mut dyn #ex::Property> {
                match name {
                    #(#names => #ex::Some(&mut self.#members),)*
                    _ => #ex::None,
                }
            }

            #read_property

            #write_property

            #[inline]
            fn clone_record(&self) -> #ex::Box<dyn #ex::Record> {
                #ex::Box::new(::core::clone::Clone::clone(self))
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Property, TypedProperty, Root, From

fn impl_property(data: &RecordStruct<'_>, ex: &TokenStream) -> TokenStream {
    let ident = data.ident;

    quote! {
        impl #ex::Property for #ident {
            #[inline]
            fn to_value(&self) -> #ex::Value {
                #ex::Value::Record(#ex::Record::clone_record(self))
            }

            #[inline]
            fn assign(&mut self, value: #ex::Value) -> #ex::Result<(), #ex::Value> {
                #ex::assign_from_value(self, value)
            }

            #[inline]
            fn runtime_type(&self) -> #ex::TypeToken {
                #ex::TypeToken::Record(<Self as #ex::Typed>::type_info())
            }

            #[inline]
            fn as_node(&self) -> #ex::Option<#ex::Node<'_>> {
                #ex::Some(#ex::Node::Record(self))
            }

            #[inline]
            fn as_node_mut(&mut self) -> #ex::Option<#ex::NodeMut<'_>> {
                #ex::Some(#ex::NodeMut::Record(self))
            }
        }

        impl #ex::TypedProperty for #ident {
            #[inline]
            fn declared_type() -> #ex::TypeToken {
                #ex::TypeToken::Record(<Self as #ex::Typed>::type_info())
            }

            #[inline]
            fn from_value(value: #ex::Value) -> #ex::Result<Self, #ex::Value> {
                #ex::record_from_value(value)
            }
        }

        impl #ex::Root for #ident {
            #[inline]
            fn root_type(&self) -> #ex::TypeToken {
                #ex::TypeToken::Record(<Self as #ex::Typed>::type_info())
            }

            #[inline]
            fn root_node(&self) -> #ex::Option<#ex::Node<'_>> {
                #ex::Some(#ex::Node::Record(self))
            }

            #[inline]
            fn root_node_mut(&mut self) -> #ex::Option<#ex::NodeMut<'_>> {
                #ex::Some(#ex::NodeMut::Record(self))
            }
        }

        impl ::core::convert::From<#ident> for #ex::Value {
            #[inline]
            fn from(value: #ident) -> Self {
                #ex::Value::Record(#ex::Box::new(value))
            }
        }
    }
}
