//! ETag generation and conditional `GET` handling for actix-web JSON services.
//!
//! Handlers return an [`Entity`]; the [`ETagFilter`] middleware fingerprints it
//! with MD5 and answers `304 Not Modified` when the client's `If-None-Match`
//! already names the current representation.

pub mod entity;
pub mod filter;
pub mod fingerprint;
pub mod precondition;

pub use entity::{CanonicalJson, Element, Entity, EntityKind};
pub use filter::{process, ETagFilter};
pub use fingerprint::{fingerprint, FingerprintError};
pub use precondition::Precondition;
