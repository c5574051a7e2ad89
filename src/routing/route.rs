use crate::context::Body;
use async_trait::async_trait;
use http::{Request, Response};
use std::future::Future;
use std::sync::Arc;

/// A unit of work that consumes a request and produces its response.
///
/// Wildcard values are available through [`crate::context::capture`] on the
/// request passed in.
#[async_trait]
pub trait HttpRoute: Send + Sync {
    async fn handle(&self, req: Request<Body>) -> std::io::Result<Response<Body>>;
}

#[async_trait]
impl<F, R> HttpRoute for F
where
    F: Fn(Request<Body>) -> R + Send + Sync,
    R: Future<Output = std::io::Result<Response<Body>>> + Send,
{
    async fn handle(&self, req: Request<Body>) -> std::io::Result<Response<Body>> {
        self(req).await
    }
}

/// Shared handle to a registered route. Fallbacks are copied into every node
/// created beneath the one they were set on, so routes are reference counted.
pub type Endpoint = Arc<dyn HttpRoute>;
