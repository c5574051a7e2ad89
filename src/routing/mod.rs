mod fallback;
mod node;
mod route;
mod router;

pub use fallback::{MethodNotAllowed, NotFound};
pub use node::{Outcome, RouteMatch, WILDCARD};
pub use route::{Endpoint, HttpRoute};
pub use router::{Router, RouterBuilder};
