// src/presentation/graphql/relay.rs
use async_graphql::ID;
use base64::{Engine as _, engine::general_purpose::STANDARD};

pub const ARTICLE_KIND: &str = "article";
pub const AUTHOR_KIND: &str = "author";

/// Opaque global id: base64 of `{kind}:{id}`.
pub fn global_id(kind: &str, id: u32) -> ID {
    ID(STANDARD.encode(format!("{kind}:{id}")))
}

/// Splits a global id back into its kind and numeric id.
pub fn decode_global_id(id: &str) -> Option<(String, u32)> {
    let raw = STANDARD.decode(id).ok()?;
    let text = String::from_utf8(raw).ok()?;
    let (kind, value) = text.split_once(':')?;
    Some((kind.to_owned(), value.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_ids_decode_to_kind_and_id() {
        let id = global_id(ARTICLE_KIND, 42);
        assert_eq!(id.as_str(), "YXJ0aWNsZTo0Mg==");
        assert_eq!(decode_global_id(&id), Some((ARTICLE_KIND.to_owned(), 42)));
    }

    #[test]
    fn malformed_ids_do_not_decode() {
        assert_eq!(decode_global_id("not base64!"), None);
        assert_eq!(decode_global_id(&STANDARD.encode("article")), None);
        assert_eq!(decode_global_id(&STANDARD.encode("article:x")), None);
    }
}
