use std::borrow::Cow;

/// Returns the canonical absolute form of `p`.
///
/// The result always starts with `/`, has no empty, `.` or `..` segments and
/// no trailing slash unless it is the root itself. `..` at the root is dropped.
pub fn clean_path(p: &str) -> Cow<'_, str> {
    if is_clean(p) {
        return Cow::Borrowed(p);
    }

    let mut stack: Vec<&str> = Vec::new();

    for segment in p.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }

    let mut out = String::with_capacity(p.len() + 1);
    for segment in &stack {
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        out.push('/');
    }

    Cow::Owned(out)
}

fn is_clean(p: &str) -> bool {
    if p == "/" {
        return true;
    }

    if !p.starts_with('/') || p.ends_with('/') {
        return false;
    }

    p[1..]
        .split('/')
        .all(|s| !s.is_empty() && s != "." && s != "..")
}

/// Splits the first segment off `path`.
///
/// `path` is cleaned first, so `foo/bar`, `/foo//bar` and `/foo/./bar` all
/// yield `("foo", "/bar")`. The tail always starts with `/`; `("", "/")` means
/// there is nothing left to shift.
pub fn shift_segment(path: &str) -> (String, String) {
    let cleaned = clean_path(path);
    let (head, tail) = split_clean(&cleaned);
    (head.to_string(), tail.to_string())
}

/// Same as [`shift_segment`] for a path that is already clean. Tails of clean
/// paths are clean, so a walk only has to clean once.
pub(crate) fn split_clean(p: &str) -> (&str, &str) {
    let rest = &p[1..];
    match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    }
}

/// Iterator over the segments of a path, after cleaning.
pub struct Segments<'a> {
    rest: Cow<'a, str>,
    pos: usize,
}

impl<'a> Segments<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            rest: clean_path(path),
            pos: 0,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.rest.len() {
            return None;
        }

        let (head, _) = split_clean(&self.rest[self.pos..]);
        if head.is_empty() {
            self.pos = self.rest.len();
            return None;
        }

        let item = head.to_string();
        self.pos += 1 + item.len();
        Some(item)
    }
}
