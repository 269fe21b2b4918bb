//! Tagged JSON codec for serializable unions.
//!
//! Wire format: a flat object holding every field of the case under its
//! identifier plus the tag `Kind` carrying the bare case name. Decoding
//! accepts the tag under `kind` or `Kind`, first match wins.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, GenericParam, Generics, LifetimeParam, Path};

use super::RenderOptions;
use crate::ir::{generics, CaseType, UnionModel};

/// Emits `Serialize`, `Deserialize` and the `encode`/`decode` pair.
pub struct SerdeEmitter<'a> {
    model: &'a UnionModel,
    options: &'a RenderOptions,
}

impl<'a> SerdeEmitter<'a> {
    pub fn new(model: &'a UnionModel, options: &'a RenderOptions) -> Self {
        Self { model, options }
    }

    pub fn emit(&self) -> TokenStream {
        let serialize = self.emit_serialize();
        let encode = self.emit_encode();
        let decode = self.emit_decode();
        let deserialize = self.emit_deserialize();

        quote! {
            #serialize
            #encode
            #decode
            #deserialize
        }
    }

    /// Generics with `bound` required of every type parameter.
    fn bounded(&self, bound: &Path) -> Generics {
        let mut bounded = self.model.generics.clone();
        let params: Vec<_> = generics::type_params(&self.model.generics)
            .into_iter()
            .cloned()
            .collect();
        if !params.is_empty() {
            let where_clause = bounded.make_where_clause();
            for param in params {
                where_clause.predicates.push(parse_quote!(#param: #bound));
            }
        }
        bounded
    }

    fn serialize_bound(&self) -> Path {
        let serde = &self.options.serde;
        parse_quote!(#serde::Serialize)
    }

    fn deserialize_bound(&self) -> Path {
        let serde = &self.options.serde;
        parse_quote!(#serde::de::DeserializeOwned)
    }

    fn emit_serialize(&self) -> TokenStream {
        let serde = &self.options.serde;
        let runtime = &self.options.runtime;
        let name = &self.model.name;
        let bounded = self.bounded(&self.serialize_bound());
        let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

        let arms = self.model.cases.iter().map(|case| {
            let variant = &case.name;
            let ty = case.ty();
            let tag = case.tag();
            let len = 1 + case.args.len();
            let binding = if case.is_singleton() {
                quote!(_)
            } else {
                quote!(case)
            };
            let fields = case.args.iter().map(|arg| {
                let field = &arg.name;
                let key = syn::ext::IdentExt::unraw(field).to_string();
                quote! {
                    #serde::ser::SerializeStruct::serialize_field(&mut state, #key, &case.#field)?;
                }
            });

            quote! {
                Self::#variant(#binding) => {
                    let mut state = #serde::Serializer::serialize_struct(serializer, #tag, #len)?;
                    #serde::ser::SerializeStruct::serialize_field(&mut state, #runtime::TAG_KEY, <#ty>::KIND)?;
                    #(#fields)*
                    #serde::ser::SerializeStruct::end(state)
                }
            }
        });

        let body = if self.model.cases.is_empty() {
            quote!(match *self {})
        } else {
            quote! {
                match self {
                    #(#arms)*
                }
            }
        };

        quote! {
            impl #impl_generics #serde::Serialize for #name #ty_generics #where_clause {
                fn serialize<__S>(
                    &self,
                    serializer: __S,
                ) -> ::core::result::Result<__S::Ok, __S::Error>
                where
                    __S: #serde::Serializer,
                {
                    #body
                }
            }
        }
    }

    fn emit_encode(&self) -> TokenStream {
        let json = &self.options.serde_json;
        let name = &self.model.name;
        let bounded = self.bounded(&self.serialize_bound());
        let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

        quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                /// Encodes this value as a tagged JSON object.
                pub fn encode(&self) -> ::core::result::Result<#json::Value, #json::Error> {
                    #json::to_value(self)
                }
            }
        }
    }

    fn emit_decode(&self) -> TokenStream {
        let json = &self.options.serde_json;
        let runtime = &self.options.runtime;
        let name = &self.model.name;
        let bounded = self.bounded(&self.deserialize_bound());
        let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

        let union_name = quote!(<Self as #runtime::ClosedUnion>::NAME);
        let has_fields = self.model.cases.iter().any(|case| !case.is_singleton());
        let fields_binding = if has_fields {
            quote!(mut fields)
        } else {
            quote!(fields)
        };

        let arms = self
            .model
            .cases
            .iter()
            .map(|case| self.emit_decode_arm(case, &union_name));

        quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                /// Decodes a tagged JSON object, dispatching on `kind` or `Kind`.
                pub fn decode(
                    value: #json::Value,
                ) -> ::core::result::Result<Self, #runtime::DecodeError> {
                    let #fields_binding = match value {
                        #json::Value::Object(fields) => fields,
                        _ => {
                            return ::core::result::Result::Err(#runtime::DecodeError::MissingTag {
                                union: #union_name,
                            })
                        }
                    };

                    let tag = match #runtime::TAG_KEYS.iter().find_map(|key| fields.get(*key)) {
                        ::core::option::Option::Some(#json::Value::String(tag)) => {
                            ::core::clone::Clone::clone(tag)
                        }
                        ::core::option::Option::Some(other) => {
                            return ::core::result::Result::Err(#runtime::DecodeError::UnknownTag {
                                union: #union_name,
                                tag: ::std::string::ToString::to_string(other),
                            })
                        }
                        ::core::option::Option::None => {
                            return ::core::result::Result::Err(#runtime::DecodeError::MissingTag {
                                union: #union_name,
                            })
                        }
                    };

                    match tag.as_str() {
                        #(#arms)*
                        other => ::core::result::Result::Err(#runtime::DecodeError::UnknownTag {
                            union: #union_name,
                            tag: ::std::borrow::ToOwned::to_owned(other),
                        }),
                    }
                }
            }
        }
    }

    fn emit_decode_arm(&self, case: &CaseType, union_name: &TokenStream) -> TokenStream {
        let json = &self.options.serde_json;
        let runtime = &self.options.runtime;
        let variant = &case.name;
        let tag = case.tag();

        let fields = case.args.iter().map(|arg| {
            let field = &arg.name;
            let key = syn::ext::IdentExt::unraw(field).to_string();
            quote! {
                #field: match #json::from_value(
                    fields.remove(#key).unwrap_or(#json::Value::Null),
                ) {
                    ::core::result::Result::Ok(value) => value,
                    ::core::result::Result::Err(err) => {
                        return ::core::result::Result::Err(#runtime::DecodeError::Field {
                            union: #union_name,
                            case: #tag,
                            field: #key,
                            message: ::std::string::ToString::to_string(&err),
                        })
                    }
                },
            }
        });

        quote! {
            #tag => ::core::result::Result::Ok(Self::#variant(#variant {
                #(#fields)*
            })),
        }
    }

    fn emit_deserialize(&self) -> TokenStream {
        let serde = &self.options.serde;
        let json = &self.options.serde_json;
        let name = &self.model.name;

        let bounded = self.bounded(&self.deserialize_bound());
        let (_, ty_generics, _) = self.model.generics.split_for_impl();
        let lifetime: LifetimeParam = parse_quote!('__de);
        let mut with_lifetime = bounded;
        with_lifetime
            .params
            .insert(0, GenericParam::Lifetime(lifetime));
        let (impl_generics, _, where_clause) = with_lifetime.split_for_impl();

        quote! {
            impl #impl_generics #serde::Deserialize<'__de> for #name #ty_generics #where_clause {
                fn deserialize<__D>(deserializer: __D) -> ::core::result::Result<Self, __D::Error>
                where
                    __D: #serde::Deserializer<'__de>,
                {
                    let value = <#json::Value as #serde::Deserialize<'__de>>::deserialize(deserializer)?;
                    Self::decode(value).map_err(<__D::Error as #serde::de::Error>::custom)
                }
            }
        }
    }
}
