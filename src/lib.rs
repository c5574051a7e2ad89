//! Method-aware request routing over a segment trie.
//!
//! Patterns are `/`-separated; a `*` segment matches any single segment and
//! its value is captured, in path order, for the handler to read with
//! [`context::capture`]. A `*` method matches every method at that path.
//!
//! ```no_run
//! use supercruise_mux::prelude::*;
//!
//! async fn post(req: Request<Body>) -> std::io::Result<Response<Body>> {
//!     let id = context::capture(&req, 0).unwrap_or_default().to_string();
//!     Ok(Response::new(id.into()))
//! }
//!
//! let router = Router::builder()
//!     .get("/posts/*", post)
//!     .finalize()
//!     .unwrap();
//! ```
pub mod context;
pub mod error;
pub mod path;
pub mod routing;

pub mod prelude {
    pub use super::context::{self, Body, Captures};
    pub use super::error::RouteError;
    pub use super::routing::{HttpRoute, Outcome, Router, RouterBuilder};
    pub use http::{Method, Request, Response, StatusCode};
}

pub use routing::{Router, RouterBuilder};
