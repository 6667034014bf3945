//! Conditional request evaluation (RFC 7232 section 6), for a representation
//! that exists and has no `Last-Modified` date.

use actix_web::http::header::{self, EntityTag, Header, IfMatch, IfNoneMatch};
use actix_web::HttpMessage;

/// A precondition that short-circuits normal response processing. The filter
/// answers `304 Not Modified` for either; the variant only tells which header
/// caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// `If-None-Match` matched: the client holds the current representation.
    NotModified,
    /// `If-Match` did not match.
    Failed,
}

/// Evaluates the request's `If-Match` and `If-None-Match` headers against the
/// current tag. `None` means the request proceeds normally.
pub fn evaluate<M: HttpMessage>(request: &M, tag: &EntityTag) -> Option<Precondition> {
    if let Some(if_match) = parse::<M, IfMatch>(request, header::IF_MATCH) {
        let matched = match if_match {
            IfMatch::Any => true,
            IfMatch::Items(items) => items.iter().any(|item| item.strong_eq(tag)),
        };
        if !matched {
            return Some(Precondition::Failed);
        }
    }

    if let Some(if_none_match) = parse::<M, IfNoneMatch>(request, header::IF_NONE_MATCH) {
        let matched = match if_none_match {
            IfNoneMatch::Any => true,
            IfNoneMatch::Items(items) => items.iter().any(|item| item.weak_eq(tag)),
        };
        if matched {
            return Some(Precondition::NotModified);
        }
    }

    None
}

// Absent and malformed headers both read as `None`.
fn parse<M: HttpMessage, H: Header>(request: &M, name: header::HeaderName) -> Option<H> {
    if !request.headers().contains_key(&name) {
        return None;
    }
    match H::parse(request) {
        Ok(value) => Some(value),
        Err(_) => {
            log::debug!("Ignoring malformed {} header", name);
            None
        }
    }
}
