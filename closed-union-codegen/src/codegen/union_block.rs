//! Renders the body of a union module.
//!
//! Output order is fixed: the user's items (cases redeclared in place), the
//! enum, `From` conversions, the factory impl, the `ClosedUnion` impl and,
//! for serializable unions, the per-case `KIND` constants followed by the
//! codec. Generated std references are fully qualified because case names
//! such as `Some` and `None` shadow the prelude inside the module.

use proc_macro2::TokenStream;
use quote::quote;

use super::serde_impl::SerdeEmitter;
use super::RenderOptions;
use crate::ir::{CaseType, UnionModel};
use crate::parser::Member;

/// Renders one [`UnionModel`].
pub struct UnionRenderer<'a> {
    model: &'a UnionModel,
    options: &'a RenderOptions,
}

impl<'a> UnionRenderer<'a> {
    pub fn new(model: &'a UnionModel, options: &'a RenderOptions) -> Self {
        Self { model, options }
    }

    /// Everything that goes inside the union module.
    pub fn render(&self, members: &[Member]) -> TokenStream {
        let items = self.render_members(members);
        let generated = self.render_generated();

        quote! {
            #items
            #generated
        }
    }

    /// User items in source order, with cases redeclared from the model.
    pub fn render_members(&self, members: &[Member]) -> TokenStream {
        let items = members.iter().map(|member| match member {
            Member::Case(index) => match self.model.cases.get(*index) {
                Some(case) => {
                    let declaration = &case.declaration;
                    quote!(#declaration)
                }
                None => quote!(),
            },
            Member::Helper(item) => quote!(#item),
        });

        quote!(#(#items)*)
    }

    /// The items synthesized from the model alone.
    pub fn render_generated(&self) -> TokenStream {
        let declaration = self.render_enum();
        let conversions = self.render_conversions();
        let factories = self.render_factories();
        let closed = self.render_closed_union();

        let serialization = if self.model.serializable {
            let kinds = self.render_kinds();
            let codec = SerdeEmitter::new(self.model, self.options).emit();
            quote! {
                #kinds
                #codec
            }
        } else {
            quote!()
        };

        quote! {
            #declaration
            #conversions
            #factories
            #closed
            #serialization
        }
    }

    fn render_enum(&self) -> TokenStream {
        let name = &self.model.name;
        let generics = &self.model.generics;
        let where_clause = &generics.where_clause;
        let doc = format!(" Closed union over the cases declared in `{}`.", self.model.namespace);

        let derive = if self.model.derives.is_empty() {
            quote!()
        } else {
            let derives = &self.model.derives;
            quote!(#[derive(#(#derives),*)])
        };

        let variants = self.model.cases.iter().map(|case| {
            let variant = &case.name;
            let ty = case.ty();
            quote!(#variant(#ty))
        });

        quote! {
            #[doc = #doc]
            #derive
            pub enum #name #generics #where_clause {
                #(#variants,)*
            }
        }
    }

    fn render_conversions(&self) -> TokenStream {
        let name = &self.model.name;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();

        let conversions = self.model.cases.iter().map(|case| {
            let variant = &case.name;
            let ty = case.ty();
            quote! {
                impl #impl_generics ::core::convert::From<#ty> for #name #ty_generics #where_clause {
                    fn from(case: #ty) -> Self {
                        Self::#variant(case)
                    }
                }
            }
        });

        quote!(#(#conversions)*)
    }

    fn render_factories(&self) -> TokenStream {
        let name = &self.model.name;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();
        let factories = self.model.cases.iter().map(render_factory);

        quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                #(#factories)*
            }
        }
    }

    fn render_closed_union(&self) -> TokenStream {
        let runtime = &self.options.runtime;
        let name = &self.model.name;
        let open_type = &self.model.open_type;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();

        let tags: Vec<String> = self.model.cases.iter().map(CaseType::tag).collect();
        let arms = self.model.cases.iter().zip(&tags).map(|(case, tag)| {
            let variant = &case.name;
            quote!(Self::#variant(_) => #tag,)
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

        let serializable = if self.model.serializable {
            quote!(const SERIALIZABLE: bool = true;)
        } else {
            quote!()
        };

        quote! {
            impl #impl_generics #runtime::ClosedUnion for #name #ty_generics #where_clause {
                const NAME: &'static str = #open_type;
                const CASES: &'static [&'static str] = &[#(#tags),*];
                #serializable

                fn case_name(&self) -> &'static str {
                    #body
                }
            }
        }
    }

    fn render_kinds(&self) -> TokenStream {
        let kinds = self.model.cases.iter().map(|case| {
            let variant = &case.name;
            let tag = case.tag();
            let (impl_generics, ty_generics, where_clause) = case.generics().split_for_impl();
            quote! {
                impl #impl_generics #variant #ty_generics #where_clause {
                    /// Tag identifying this case on the wire.
                    pub const KIND: &'static str = #tag;
                }
            }
        });

        quote!(#(#kinds)*)
    }
}

fn render_factory(case: &CaseType) -> TokenStream {
    let variant = &case.name;
    let factory = case.factory_ident();

    if case.is_singleton() {
        let doc = format!(" The `{}` case.", case.tag());
        return quote! {
            #[doc = #doc]
            pub const #factory: Self = Self::#variant(#variant {});
        };
    }

    let doc = format!(" Creates the `{}` case.", case.tag());
    let params = case.args.iter().map(|arg| {
        let name = &arg.name;
        let ty = &arg.ty;
        quote!(#name: #ty)
    });
    let fields = case.args.iter().map(|arg| &arg.name);

    quote! {
        #[doc = #doc]
        pub fn #factory(#(#params),*) -> Self {
            Self::#variant(#variant { #(#fields),* })
        }
    }
}
