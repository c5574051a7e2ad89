use crate::context::Body;
use crate::error::RouteError;
use crate::routing::fallback::Defaults;
use crate::routing::node::{RouteMatch, RouteNode, WILDCARD};
use crate::routing::route::{Endpoint, HttpRoute};
use http::{Method, Request, Response};
use std::sync::Arc;

/// Immutable routing table. Build one with [`Router::builder`], then share it
/// (usually behind an `Arc`) between any number of concurrent callers.
pub struct Router {
    root: RouteNode,
    defaults: Defaults,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Finds the endpoint for `method` and `path`.
    ///
    /// Never fails: a miss resolves to the not-found or method-not-allowed
    /// endpoint, reported through [`RouteMatch::outcome`].
    #[inline]
    pub fn route(&self, method: &str, path: &str) -> RouteMatch {
        let m = self.root.lookup(method, path, &self.defaults);
        log::trace!(
            "{} {} -> {:?} ({} captures)",
            method,
            path,
            m.outcome,
            m.captures.len()
        );
        m
    }

    /// Routes `req`, attaches its captures and runs the resolved endpoint.
    pub async fn serve(&self, mut req: Request<Body>) -> std::io::Result<Response<Body>> {
        let RouteMatch {
            endpoint, captures, ..
        } = self.route(req.method().as_str(), req.uri().path());

        req.extensions_mut().insert(captures);
        endpoint.handle(req).await
    }
}

/// Collects routes and fallback overrides, in call order.
///
/// Registration stops at the first duplicate; [`RouterBuilder::finalize`]
/// then returns that error.
pub struct RouterBuilder {
    root: RouteNode,
    error: Option<RouteError>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            root: RouteNode::new(),
            error: None,
        }
    }

    /// Registers `route` for `pattern` and `method`, reporting duplicates
    /// straight away. `*` as a segment matches any one segment; `*` as the
    /// method matches any method and wins over literal methods at that path.
    pub fn insert<R>(&mut self, pattern: &str, method: &str, route: R) -> Result<(), RouteError>
    where
        R: HttpRoute + 'static,
    {
        let route: Endpoint = Arc::new(route);
        self.root.insert(pattern, method, route)?;
        log::debug!("registered {} {}", method, pattern);
        Ok(())
    }

    pub fn handle<R>(mut self, pattern: &str, method: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        if self.error.is_some() {
            return self;
        }

        if let Err(e) = self.insert(pattern, method, route) {
            log::error!("{}", e);
            self.error = Some(e);
        }

        self
    }

    pub fn get<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::GET.as_str(), route)
    }

    pub fn post<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::POST.as_str(), route)
    }

    pub fn put<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::PUT.as_str(), route)
    }

    pub fn patch<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::PATCH.as_str(), route)
    }

    pub fn delete<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::DELETE.as_str(), route)
    }

    pub fn head<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::HEAD.as_str(), route)
    }

    pub fn options<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, Method::OPTIONS.as_str(), route)
    }

    /// Matches every method at `path`.
    pub fn any<R>(self, path: &str, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        self.handle(path, WILDCARD, route)
    }

    /// Overrides the not-found endpoint on the root.
    ///
    /// Nodes copy the override when they are created: routes registered
    /// before this call keep whatever they had.
    pub fn not_found<R>(mut self, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        let route: Endpoint = Arc::new(route);
        self.root.not_found = Some(route);
        log::debug!("not found handler overridden");
        self
    }

    /// Overrides the method-not-allowed endpoint on the root, with the same
    /// copy-at-creation rule as [`RouterBuilder::not_found`].
    pub fn method_not_allowed<R>(mut self, route: R) -> Self
    where
        R: HttpRoute + 'static,
    {
        let route: Endpoint = Arc::new(route);
        self.root.method_not_allowed = Some(route);
        log::debug!("method not allowed handler overridden");
        self
    }

    pub fn finalize(self) -> Result<Router, RouteError> {
        if let Some(e) = self.error {
            return Err(e);
        }

        Ok(Router {
            root: self.root,
            defaults: Defaults::default(),
        })
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
