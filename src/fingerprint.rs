use actix_web::http::header::EntityTag;
use md5::{Digest, Md5};

use crate::entity::{Element, Entity, EntityKind};

#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("entity kind cannot be fingerprinted")]
    UnsupportedEntityKind,

    #[error("canonical serialization failed: {0}")]
    SerializationFailure(#[from] serde_json::Error),
}

/// Computes the strong entity tag of `entity`: the hex MD5 digest of the
/// canonical text of every element, concatenated in order.
///
/// All or nothing: a single unsupported or failing element aborts the whole
/// fingerprint.
pub fn fingerprint(entity: &Entity) -> Result<EntityTag, FingerprintError> {
    let mut hasher = Md5::new();
    for element in entity.elements() {
        hash_element(element, &mut hasher)?;
    }
    Ok(EntityTag::new_strong(format!("{:x}", hasher.finalize())))
}

fn hash_element(element: &Element, hasher: &mut Md5) -> Result<(), FingerprintError> {
    match (element.kind(), element) {
        (EntityKind::SerializableToCanonicalText, Element::Json(value)) => {
            hasher.update(value.to_canonical_json()?.as_bytes());
        }
        (EntityKind::PlainText, Element::Text(text)) => {
            hasher.update(text.as_bytes());
        }
        _ => return Err(FingerprintError::UnsupportedEntityKind),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;
    use crate::entity::CanonicalJson;

    // md5("hello")
    const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

    #[derive(Serialize)]
    struct Machine {
        id: u32,
        running: bool,
    }

    struct Broken;

    impl CanonicalJson for Broken {
        fn to_canonical_json(&self) -> serde_json::Result<String> {
            serde_json::from_str::<serde_json::Value>("{").map(|v| v.to_string())
        }
    }

    fn hex_md5(text: &str) -> String {
        format!("{:x}", Md5::digest(text.as_bytes()))
    }

    #[test]
    fn plain_text_hashes_raw_string() {
        let tag = fingerprint(&Entity::from("hello")).unwrap();
        assert_eq!(tag.tag(), HELLO_MD5);
        assert!(!tag.weak);
    }

    #[test]
    fn serializable_hashes_canonical_json() {
        let entity = Entity::from(Element::json(Machine { id: 7, running: true }));
        let tag = fingerprint(&entity).unwrap();
        assert_eq!(tag.tag(), hex_md5(r#"{"id":7,"running":true}"#));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let machine = || Entity::from(Element::json(Machine { id: 1, running: false }));
        let first = fingerprint(&machine()).unwrap();
        let second = fingerprint(&machine()).unwrap();
        assert_eq!(first.tag(), second.tag());
    }

    #[test]
    fn list_concatenates_without_delimiter() {
        let entity = Entity::List(vec![
            Element::json(Machine { id: 1, running: true }),
            Element::text("tail"),
        ]);
        let tag = fingerprint(&entity).unwrap();
        assert_eq!(tag.tag(), hex_md5(r#"{"id":1,"running":true}tail"#));
    }

    #[test]
    fn list_order_matters() {
        let ab = fingerprint(&Entity::list(vec!["a", "b"])).unwrap();
        let ba = fingerprint(&Entity::list(vec!["b", "a"])).unwrap();
        assert_ne!(ab.tag(), ba.tag());
        assert_eq!(ab.tag(), hex_md5("ab"));
    }

    #[test]
    fn empty_list_hashes_empty_input() {
        let tag = fingerprint(&Entity::List(Vec::new())).unwrap();
        assert_eq!(tag.tag(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn unsupported_element_aborts_whole_list() {
        let entity = Entity::List(vec![Element::text("ok"), Element::from(json!({"x": 1}))]);
        assert!(matches!(fingerprint(&entity), Err(FingerprintError::UnsupportedEntityKind)));
    }

    #[test]
    fn serialization_failure_is_reported() {
        let entity = Entity::List(vec![Element::text("ok"), Element::Json(Box::new(Broken))]);
        assert!(matches!(fingerprint(&entity), Err(FingerprintError::SerializationFailure(_))));
    }
}
