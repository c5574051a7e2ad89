use bytes::{Bytes, BytesMut};

#[derive(Debug, Clone)]
pub struct Body {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    None,
    Bytes(Bytes),
}

impl Body {
    pub fn empty() -> Self {
        Self { kind: Kind::None }
    }

    pub fn len(&self) -> usize {
        match &self.kind {
            Kind::None => 0,
            Kind::Bytes(xs) => xs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.kind {
            Kind::None => &[],
            Kind::Bytes(xs) => xs.as_ref(),
        }
    }

    /// Appends the body to `dest`, returning the number of bytes written.
    pub fn bytes(&self, dest: &mut BytesMut) -> usize {
        match &self.kind {
            Kind::None => 0,
            Kind::Bytes(xs) => {
                dest.extend_from_slice(xs);
                xs.len()
            }
        }
    }

    /// Lossy UTF-8 view, mostly useful in tests and logs.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<()> for Body {
    fn from(_: ()) -> Self {
        Self { kind: Kind::None }
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Self {
            kind: Kind::Bytes(Bytes::from(s)),
        }
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Self {
            kind: Kind::Bytes(Bytes::from_static(s.as_bytes())),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(xs: Vec<u8>) -> Self {
        Self {
            kind: Kind::Bytes(Bytes::from(xs)),
        }
    }
}

impl From<Bytes> for Body {
    fn from(xs: Bytes) -> Self {
        Self {
            kind: Kind::Bytes(xs),
        }
    }
}
