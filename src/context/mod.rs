mod body;
mod captures;

pub use body::Body;
pub use captures::{capture, captures, Captures};
