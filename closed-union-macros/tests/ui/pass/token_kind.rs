use closed_union::ClosedUnion;

#[closed_union::union(serializable, derive(Debug, Clone, PartialEq))]
pub mod token_kind {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Number {
        pub value: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Plus;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Minus;
}

fn describe(token: &TokenKind) -> String {
    match token {
        TokenKind::Number(number) => format!("number {}", number.value),
        TokenKind::Plus(_) => "+".to_string(),
        TokenKind::Minus(_) => "-".to_string(),
    }
}

fn main() {
    let tokens = [
        TokenKind::number("42".to_string()),
        TokenKind::PLUS,
        TokenKind::MINUS,
    ];

    let described: Vec<String> = tokens.iter().map(describe).collect();
    assert_eq!(described, ["number 42", "+", "-"]);
    assert_eq!(tokens[1].case_name(), "Plus");
    assert!(<TokenKind as ClosedUnion>::SERIALIZABLE);

    let json = tokens[0].encode().unwrap();
    assert_eq!(json, serde_json::json!({ "Kind": "Number", "value": "42" }));

    let decoded: TokenKind = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, tokens[0]);
}
