//! Snapshot tests for union models.
//!
//! Inline snapshots pin the identifiers and headers derived from a
//! declaration. Run `cargo insta review` after intentional changes.

use closed_union_codegen::{expand, RenderOptions, UnionModel};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, ItemMod};

fn model(args: TokenStream, module: ItemMod) -> UnionModel {
    expand(args, module, &RenderOptions::default())
        .expect("expansion succeeds")
        .model
}

// =============================================================================
// Identifiers
// =============================================================================

#[test]
fn snapshot_token_kind_identifiers() {
    let model = model(
        quote!(serializable),
        parse_quote! {
            pub mod token_kind {
                pub struct Number { pub value: String }
                pub struct Plus;
                pub struct Minus;
            }
        },
    );

    insta::assert_snapshot!(&model.closed_type, @"TokenKind");
    insta::assert_snapshot!(&model.open_type, @"TokenKind");
    insta::assert_snapshot!(&model.header, @"pub enum TokenKind");
    insta::assert_snapshot!(&model.cases[0].header, @"pub struct Number");
}

#[test]
fn snapshot_generic_identifiers() {
    let model = model(
        quote!(),
        parse_quote! {
            pub mod option {
                pub struct Some<TValue> { pub value: TValue }
                struct None;
            }
        },
    );

    insta::assert_snapshot!(&model.closed_type, @"Option<TValue>");
    insta::assert_snapshot!(&model.open_type, @"Option<_>");
    insta::assert_snapshot!(&model.header, @"pub enum Option<TValue>");
    insta::assert_snapshot!(&model.cases[0].header, @"pub struct Some<TValue>");
    insta::assert_snapshot!(&model.cases[1].header, @"pub struct None");
}

#[test]
fn snapshot_multi_parameter_identifiers() {
    let model = model(
        quote!(),
        parse_quote! {
            pub mod outcome {
                pub struct Success<'a, T: Clone> { pub value: &'a T }
                pub struct Failure<E> { pub error: E }
                pub struct Retry<T> { pub last: T }
            }
        },
    );

    insta::assert_snapshot!(&model.closed_type, @"Outcome<'a, T, E>");
    insta::assert_snapshot!(&model.open_type, @"Outcome<'_, _, _>");
    insta::assert_snapshot!(&model.header, @"pub enum Outcome<'a, T: Clone, E>");
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn snapshot_summary_json() {
    let model = model(
        quote!(true, name = "Shape"),
        parse_quote! {
            mod shapes {
                pub struct Circle { pub radius: f64 }
                pub struct Rect { pub width: f64, pub height: f64 }
                pub struct Empty;
            }
        },
    );

    let json = serde_json::to_string_pretty(&model.summary()).expect("summary serializes");
    insta::assert_snapshot!(json, @r#"
    {
      "name": "Shape",
      "closed_type": "Shape",
      "open_type": "Shape",
      "header": "pub enum Shape",
      "namespace": "shapes",
      "serializable": true,
      "cases": [
        {
          "name": "Circle",
          "header": "pub struct Circle",
          "factory": "circle",
          "args": [
            {
              "name": "radius",
              "type": "f64"
            }
          ]
        },
        {
          "name": "Rect",
          "header": "pub struct Rect",
          "factory": "rect",
          "args": [
            {
              "name": "width",
              "type": "f64"
            },
            {
              "name": "height",
              "type": "f64"
            }
          ]
        },
        {
          "name": "Empty",
          "header": "pub struct Empty",
          "factory": "EMPTY",
          "args": []
        }
      ]
    }
    "#);
}
