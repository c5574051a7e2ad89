use crate::context::Captures;
use crate::error::RouteError;
use crate::path::{clean_path, split_clean, Segments};
use crate::routing::fallback::Defaults;
use crate::routing::route::Endpoint;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Pattern segment and method token that match anything.
pub const WILDCARD: &str = "*";

/// Which branch of the lookup produced the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    NotFound,
    MethodNotAllowed,
}

/// Result of a lookup: the endpoint to run and the wildcard values seen on
/// the way down.
pub struct RouteMatch {
    pub endpoint: Endpoint,
    pub captures: Captures,
    pub outcome: Outcome,
}

/// One segment boundary of the routing trie. The root stands for `/`.
#[derive(Default)]
pub(crate) struct RouteNode {
    handlers: HashMap<String, Endpoint>,
    wildcard_handler: Option<Endpoint>,
    children: HashMap<String, RouteNode>,
    wildcard_child: Option<Box<RouteNode>>,
    pub(crate) not_found: Option<Endpoint>,
    pub(crate) method_not_allowed: Option<Endpoint>,
}

impl RouteNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A fresh child takes a copy of the parent's fallbacks as they are now.
    /// Later overrides on the parent are not seen by it.
    fn inheriting(not_found: Option<Endpoint>, method_not_allowed: Option<Endpoint>) -> Self {
        Self {
            not_found,
            method_not_allowed,
            ..Self::default()
        }
    }

    fn child_or_insert(&mut self, segment: &str) -> &mut RouteNode {
        let not_found = self.not_found.clone();
        let method_not_allowed = self.method_not_allowed.clone();
        let create = || RouteNode::inheriting(not_found, method_not_allowed);

        let shadowed = if segment == WILDCARD {
            self.wildcard_child.is_none() && !self.children.is_empty()
        } else {
            self.wildcard_child.is_some() && !self.children.contains_key(segment)
        };
        if shadowed {
            log::warn!("literal routes beside `{}` are shadowed by a wildcard", segment);
        }

        if segment == WILDCARD {
            self.wildcard_child
                .get_or_insert_with(|| Box::new(create()))
                .as_mut()
        } else {
            self.children
                .entry(segment.to_string())
                .or_insert_with(create)
        }
    }

    /// Registers `route` for `pattern` and `method`, creating nodes as needed.
    ///
    /// A duplicate can only be found on a terminal node that already exists,
    /// so a failed insert never leaves new nodes behind.
    pub(crate) fn insert(
        &mut self,
        pattern: &str,
        method: &str,
        route: Endpoint,
    ) -> Result<(), RouteError> {
        let mut node = self;
        for segment in Segments::new(pattern) {
            node = node.child_or_insert(&segment);
        }

        if !node.set_handler(method, route) {
            return Err(RouteError::DuplicateRoute {
                pattern: clean_path(pattern).into_owned(),
                method: method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns false if the slot for `method` is already taken.
    fn set_handler(&mut self, method: &str, route: Endpoint) -> bool {
        if method == WILDCARD {
            if self.wildcard_handler.is_some() {
                return false;
            }

            self.wildcard_handler = Some(route);
            return true;
        }

        match self.handlers.entry(method.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(route);
                true
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.wildcard_handler.is_some() || !self.handlers.is_empty()
    }

    fn not_found_or(&self, defaults: &Defaults) -> Endpoint {
        self.not_found
            .clone()
            .unwrap_or_else(|| defaults.not_found.clone())
    }

    fn method_not_allowed_or(&self, defaults: &Defaults) -> Endpoint {
        self.method_not_allowed
            .clone()
            .unwrap_or_else(|| defaults.method_not_allowed.clone())
    }

    /// Walks the trie along `path` and resolves `method` at the node reached.
    ///
    /// A wildcard child, when present, takes every segment at its position;
    /// literal siblings registered at the same node are never consulted.
    /// There is no backtracking.
    pub(crate) fn lookup(&self, method: &str, path: &str, defaults: &Defaults) -> RouteMatch {
        let path = clean_path(path);
        let mut rest: &str = &path;
        let mut node = self;
        let mut captures = Captures::new();

        loop {
            let (head, tail) = split_clean(rest);
            if head.is_empty() {
                break;
            }
            rest = tail;

            if let Some(child) = &node.wildcard_child {
                captures.push(head);
                node = &**child;
                continue;
            }

            match node.children.get(head) {
                Some(child) => node = child,
                None => {
                    return RouteMatch {
                        endpoint: node.not_found_or(defaults),
                        captures,
                        outcome: Outcome::NotFound,
                    }
                }
            }
        }

        node.resolve(method, captures, defaults)
    }

    fn resolve(&self, method: &str, captures: Captures, defaults: &Defaults) -> RouteMatch {
        let (endpoint, outcome) = if !self.is_terminal() {
            (self.not_found_or(defaults), Outcome::NotFound)
        } else if let Some(route) = &self.wildcard_handler {
            (route.clone(), Outcome::Matched)
        } else {
            match self.handlers.get(method) {
                Some(route) => (route.clone(), Outcome::Matched),
                None => (self.method_not_allowed_or(defaults), Outcome::MethodNotAllowed),
            }
        };

        RouteMatch {
            endpoint,
            captures,
            outcome,
        }
    }
}
