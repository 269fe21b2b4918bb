#[closed_union::union(true, derive(Debug, PartialEq))]
pub mod envelope {
    #[derive(Debug, PartialEq)]
    pub struct Data<T> {
        pub payload: T,
        pub note: Option<String>,
    }

    #[derive(Debug, PartialEq)]
    pub struct Empty {}
}

fn main() {
    let data: Envelope<Vec<u8>> = Envelope::data(vec![1, 2, 3], None);
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "Kind": "Data", "payload": [1, 2, 3], "note": null })
    );

    let decoded = Envelope::<Vec<u8>>::decode(serde_json::json!({
        "kind": "Data",
        "payload": [4],
    }))
    .unwrap();
    assert_eq!(decoded, Envelope::data(vec![4], None));

    let empty: Envelope<u8> = serde_json::from_str(r#"{"Kind":"Empty"}"#).unwrap();
    assert_eq!(empty, Envelope::EMPTY);
}
