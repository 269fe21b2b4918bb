//! Property-based round trips through the tagged JSON codec.

use closed_union::{ClosedUnion, TAG_KEY};
use proptest::prelude::*;

#[closed_union::union(serializable, name = "Shape", derive(Debug, Clone, PartialEq))]
pub mod shapes {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Circle {
        pub radius: i64,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Labeled {
        pub label: String,
        pub tags: Vec<String>,
        pub note: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Empty;
}

#[closed_union::union(serializable, derive(Debug, Clone, PartialEq))]
pub mod envelope {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Data<T> {
        pub payload: T,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Nothing;
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        any::<i64>().prop_map(Shape::circle),
        (
            ".*",
            prop::collection::vec("[a-z]{0,6}", 0..4),
            prop::option::of("[ -~]{0,12}"),
        )
            .prop_map(|(label, tags, note)| Shape::labeled(label, tags, note)),
        Just(Shape::EMPTY),
    ]
}

proptest! {
    #[test]
    fn prop_shape_round_trips(shape in arb_shape()) {
        let encoded = shape.encode().unwrap();
        let decoded = Shape::decode(encoded).unwrap();
        prop_assert_eq!(decoded, shape);
    }

    #[test]
    fn prop_encoded_tag_is_case_name(shape in arb_shape()) {
        let encoded = shape.encode().unwrap();
        let tag = encoded.get(TAG_KEY).and_then(|tag| tag.as_str()).unwrap();
        prop_assert_eq!(tag, shape.case_name());
    }

    #[test]
    fn prop_lowercase_tag_decodes(shape in arb_shape()) {
        let mut encoded = shape.encode().unwrap();
        let object = encoded.as_object_mut().unwrap();
        let tag = object.remove(TAG_KEY).unwrap();
        object.insert("kind".to_string(), tag);
        prop_assert_eq!(Shape::decode(encoded).unwrap(), shape);
    }

    #[test]
    fn prop_generic_envelope_round_trips(payload in prop::collection::vec(any::<u32>(), 0..8)) {
        let value = Envelope::data(payload);
        let text = serde_json::to_string(&value).unwrap();
        let back: Envelope<Vec<u32>> = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, value);
    }
}

#[test]
fn test_absent_optional_field_decodes_as_none() {
    let decoded = Shape::decode(serde_json::json!({
        "Kind": "Labeled",
        "label": "a",
        "tags": [],
    }))
    .unwrap();
    assert_eq!(decoded, Shape::labeled("a".to_string(), Vec::new(), None));
}

#[test]
fn test_generic_name_uses_placeholders() {
    assert_eq!(<Envelope<u8> as ClosedUnion>::NAME, "Envelope<_>");
    let err = Envelope::<u8>::decode(serde_json::json!({ "Kind": "Other" })).unwrap_err();
    assert_eq!(err.union(), "Envelope<_>");
}
