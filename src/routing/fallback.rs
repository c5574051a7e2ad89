use crate::context::Body;
use crate::routing::route::{Endpoint, HttpRoute};
use async_trait::async_trait;
use http::header::{CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Request, Response, StatusCode};
use std::sync::Arc;

/// Handlers used when no node on the path carries an override.
pub(crate) struct Defaults {
    pub(crate) not_found: Endpoint,
    pub(crate) method_not_allowed: Endpoint,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            not_found: Arc::new(NotFound),
            method_not_allowed: Arc::new(MethodNotAllowed),
        }
    }
}

/// Replies `404 page not found`.
pub struct NotFound;

/// Replies `405 method not allowed`.
pub struct MethodNotAllowed;

#[async_trait]
impl HttpRoute for NotFound {
    async fn handle(&self, req: Request<Body>) -> std::io::Result<Response<Body>> {
        log::warn!("404 Not Found {} {}", req.method(), req.uri().path());
        Ok(plain_error(StatusCode::NOT_FOUND, "404 page not found"))
    }
}

#[async_trait]
impl HttpRoute for MethodNotAllowed {
    async fn handle(&self, req: Request<Body>) -> std::io::Result<Response<Body>> {
        log::debug!("405 Method Not Allowed {} {}", req.method(), req.uri().path());
        Ok(plain_error(
            StatusCode::METHOD_NOT_ALLOWED,
            "405 method not allowed",
        ))
    }
}

fn plain_error(status: StatusCode, msg: &str) -> Response<Body> {
    let mut resp = Response::new(Body::from(format!("{}\n", msg)));
    *resp.status_mut() = status;

    let headers = resp.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        http::HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(X_CONTENT_TYPE_OPTIONS, http::HeaderValue::from_static("nosniff"));

    resp
}
