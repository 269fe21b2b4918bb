//! Readable text for token trees.
//!
//! `TokenStream::to_string` separates every token with a space
//! (`Option < TValue >`). Headers and type identifiers are user facing, so
//! they are compacted into the spelling a person would write.

use quote::ToTokens;

/// Render a syntax node as compact source text.
pub fn compact<T: ToTokens + ?Sized>(node: &T) -> String {
    let raw = node.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());

    for (index, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let next = chars.get(index + 1).copied();
            let after_next = chars.get(index + 2).copied();
            if drop_space(&out, next, after_next) {
                continue;
            }
        }
        out.push(c);
    }

    out
}

fn drop_space(before: &str, next: Option<char>, after_next: Option<char>) -> bool {
    let prev = before.chars().last();

    if before.ends_with("::") {
        return true;
    }
    if matches!(prev, Some('<' | '(' | '[' | '&')) {
        return true;
    }

    match next {
        Some(':') if after_next == Some(':') => prev.is_some_and(is_word_end),
        Some('<' | '(') => prev.is_some_and(is_word_char),
        Some('>' | ',' | ')' | ']' | ';' | ':') => true,
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_end(c: char) -> bool {
    is_word_char(c) || c == '>'
}
