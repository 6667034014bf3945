//! Typed response bodies.
//!
//! A handler returns an [`Entity`] instead of raw bytes. The rendered JSON goes
//! into the response body and the entity itself rides along in the response
//! extensions, so the [`ETagFilter`](crate::ETagFilter) can fingerprint what the
//! handler meant to send rather than however it happened to be written.

use std::fmt;

use actix_web::body::BoxBody;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

/// Values that render to a deterministic JSON text.
///
/// Two equal values must always produce the same string, otherwise the
/// computed entity tags flap between requests.
pub trait CanonicalJson {
    fn to_canonical_json(&self) -> serde_json::Result<String>;
}

/// Adapter giving any `Serialize` value a canonical form through serde_json.
///
/// Struct fields are written in declaration order, so derived `Serialize`
/// impls are canonical as long as they don't contain hash maps.
struct Serialized<T>(T);

impl<T: Serialize> CanonicalJson for Serialized<T> {
    fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    SerializableToCanonicalText,
    PlainText,
    Unsupported,
}

/// One body element.
pub enum Element {
    Json(Box<dyn CanonicalJson>),
    /// Text that is already in its final form, used as-is.
    Text(String),
    /// Ad-hoc JSON assembled at runtime. Written to the body but never
    /// fingerprinted: nothing guarantees its rendering is canonical.
    Dynamic(serde_json::Value),
}

impl Element {

    pub fn json<T: Serialize + 'static>(value: T) -> Self {
        Element::Json(Box::new(Serialized(value)))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Element::Text(value.into())
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Element::Json(_) => EntityKind::SerializableToCanonicalText,
            Element::Text(_) => EntityKind::PlainText,
            Element::Dynamic(_) => EntityKind::Unsupported,
        }
    }

    /// Renders the element as a standalone body.
    fn render(&self) -> serde_json::Result<String> {
        match self {
            Element::Json(value) => value.to_canonical_json(),
            Element::Text(text) => Ok(text.clone()),
            Element::Dynamic(value) => serde_json::to_string(value),
        }
    }

    /// Renders the element as a value inside a JSON array.
    fn render_item(&self) -> serde_json::Result<String> {
        match self {
            Element::Text(text) => serde_json::to_string(text),
            other => other.render(),
        }
    }
}

impl fmt::Debug for Element {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Json(_) => f.write_str("Json(..)"),
            Element::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Element::Dynamic(value) => f.debug_tuple("Dynamic").field(value).finish(),
        }
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Text(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Text(value.to_string())
    }
}

impl From<serde_json::Value> for Element {
    fn from(value: serde_json::Value) -> Self {
        Element::Dynamic(value)
    }
}

/// The body of a response, before it is written.
#[derive(Debug)]
pub enum Entity {
    Single(Element),
    List(Vec<Element>),
}

impl Entity {

    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        Entity::List(elements.into_iter().map(Into::into).collect())
    }

    pub fn elements(&self) -> &[Element] {
        match self {
            Entity::Single(element) => std::slice::from_ref(element),
            Entity::List(elements) => elements,
        }
    }

    pub fn render(&self) -> serde_json::Result<String> {
        match self {
            Entity::Single(element) => element.render(),
            Entity::List(elements) => {
                let mut body = String::from("[");
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        body.push(',');
                    }
                    body.push_str(&element.render_item()?);
                }
                body.push(']');
                Ok(body)
            }
        }
    }
}

impl From<Element> for Entity {
    fn from(value: Element) -> Self {
        Entity::Single(value)
    }
}

impl From<String> for Entity {
    fn from(value: String) -> Self {
        Entity::Single(Element::Text(value))
    }
}

impl From<&str> for Entity {
    fn from(value: &str) -> Self {
        Entity::Single(Element::from(value))
    }
}

impl From<serde_json::Value> for Entity {
    fn from(value: serde_json::Value) -> Self {
        Entity::Single(Element::Dynamic(value))
    }
}

impl Responder for Entity {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        match self.render() {
            Ok(body) => {
                let mut response = HttpResponse::Ok()
                    .content_type(ContentType::json())
                    .body(body);
                response.extensions_mut().insert(self);
                response
            }
            Err(e) => {
                log::error!("Failed to render the response entity due to {}", e);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Project {
        name: String,
        size: u32,
    }

    #[test]
    fn classifies_elements() {
        assert_eq!(Element::json(1).kind(), EntityKind::SerializableToCanonicalText);
        assert_eq!(Element::text("hello").kind(), EntityKind::PlainText);
        assert_eq!(Element::from(json!({"a": 1})).kind(), EntityKind::Unsupported);
    }

    #[test]
    fn renders_single_text_verbatim() {
        let entity = Entity::from("hello");
        assert_eq!(entity.render().unwrap(), "hello");
    }

    #[test]
    fn renders_list_as_json_array() {
        let entity = Entity::List(vec![
            Element::json(Project { name: "che".to_string(), size: 3 }),
            Element::text("plain"),
            Element::from(json!([1, 2])),
        ]);
        assert_eq!(
            entity.render().unwrap(),
            r#"[{"name":"che","size":3},"plain",[1,2]]"#
        );
    }

    #[test]
    fn renders_empty_list() {
        let entity = Entity::list(Vec::<Element>::new());
        assert_eq!(entity.render().unwrap(), "[]");
        assert!(entity.elements().is_empty());
    }
}
