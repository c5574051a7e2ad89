use http::Request;
use std::ops::Deref;

/// Values matched by `*` segments, in the order they appeared in the path.
///
/// A fresh list is built for every dispatch and stored in the request's
/// extensions before the handler runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures(Vec<String>);

impl Captures {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, value: &str) {
        self.0.push(value.to_string());
    }

    /// Returns the capture at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Captures {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for Captures {
    fn from(xs: Vec<String>) -> Self {
        Self(xs)
    }
}

impl<'a> IntoIterator for &'a Captures {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Returns the wildcard value at `index` for a routed request.
///
/// Requests that were not dispatched through a router, or indexes past the
/// last wildcard, give `None`.
pub fn capture<B>(req: &Request<B>, index: usize) -> Option<&str> {
    req.extensions().get::<Captures>()?.get(index)
}

/// Returns every wildcard value for a routed request, empty if there are none.
pub fn captures<B>(req: &Request<B>) -> &[String] {
    req.extensions()
        .get::<Captures>()
        .map(Captures::as_slice)
        .unwrap_or(&[])
}
