//! Response filter generating `ETag` headers for clients that want to use
//! conditional requests. It applies to `GET` requests with a JSON response
//! carrying an [`Entity`] only.

use std::future::{ready, Ready};

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, EntityTag, HeaderValue};
use actix_web::http::{Method, StatusCode};
use actix_web::Error;
use futures_util::future::LocalBoxFuture;

use crate::entity::Entity;
use crate::fingerprint::fingerprint;
use crate::precondition;

/// Middleware factory. Register it with `App::wrap`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ETagFilter;

impl<S, B> Transform<S, ServiceRequest> for ETagFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ETagFilterMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ETagFilterMiddleware { service }))
    }
}

pub struct ETagFilterMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ETagFilterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, request: ServiceRequest) -> Self::Future {
        let fut = self.service.call(request);
        Box::pin(async move {
            let response = fut.await?;
            Ok(process(response))
        })
    }
}

/// Tags the response, or turns it into `304 Not Modified` when the request's
/// preconditions short-circuit.
///
/// Responses that cannot be fingerprinted pass through untouched.
pub fn process<B>(mut response: ServiceResponse<B>) -> ServiceResponse<EitherBody<B>> {
    let tag = match compute_tag(&response) {
        Some(tag) => tag,
        None => return response.map_into_left_body(),
    };
    let etag = match HeaderValue::from_str(&tag.to_string()) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Entity tag {} is not a valid header value: {}", tag, e);
            return response.map_into_left_body();
        }
    };

    match precondition::evaluate(response.request(), &tag) {
        Some(precondition) => {
            log::debug!(
                "{} {}: {:?} for {}",
                response.request().method(),
                response.request().path(),
                precondition,
                tag
            );
            response.map_body(|head, _| {
                head.status = StatusCode::NOT_MODIFIED;
                head.headers_mut().remove(header::CONTENT_LENGTH);
                head.headers_mut().insert(header::ETAG, etag);
                EitherBody::right(BoxBody::new(()))
            })
        }
        None => {
            response.headers_mut().insert(header::ETAG, etag);
            response.map_into_left_body()
        }
    }
}

fn compute_tag<B>(response: &ServiceResponse<B>) -> Option<EntityTag> {
    if response.request().method() != Method::GET || !is_json(response) {
        return None;
    }
    let extensions = response.response().extensions();
    let entity = extensions.get::<Entity>()?;
    match fingerprint(entity) {
        Ok(tag) => Some(tag),
        Err(e) => {
            log::debug!("Skipping ETag for {}: {}", response.request().path(), e);
            None
        }
    }
}

fn is_json<B>(response: &ServiceResponse<B>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
