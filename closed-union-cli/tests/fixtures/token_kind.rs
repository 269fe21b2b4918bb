//! A serializable union with a helper function.

#[closed_union::union(serializable, derive(Debug, Clone, PartialEq))]
pub mod token_kind {
    pub struct Number {
        pub value: String,
    }

    pub struct Plus;

    pub struct Minus;

    pub fn is_operator(token: &TokenKind) -> bool {
        !matches!(token, TokenKind::Number(_))
    }
}

pub fn not_a_union() {}
