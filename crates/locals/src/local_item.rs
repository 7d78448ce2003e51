use std::fmt;

use crate::Utf8;

/// The source-level identity a register carries: a variable name, its
/// generic signature, or both.
///
/// Ordered by name, then signature; an absent component sorts before any
/// present one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalItem {
    name: Option<Utf8>,
    signature: Option<Utf8>,
}
impl LocalItem {
    /// Returns `None` when both `name` and `signature` are absent.
    pub fn new(name: Option<Utf8>, signature: Option<Utf8>) -> Option<Self> {
        if name.is_none() && signature.is_none() {
            return None;
        }

        Some(Self { name, signature })
    }

    pub(crate) fn named(name: Utf8, signature: Option<Utf8>) -> Self {
        Self {
            name: Some(name),
            signature,
        }
    }

    pub fn name(&self) -> Option<&Utf8> {
        self.name.as_ref()
    }

    pub fn signature(&self) -> Option<&Utf8> {
        self.signature.as_ref()
    }
}
impl fmt::Display for LocalItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = |s: &Option<Utf8>| s.as_ref().map(Utf8::to_quoted).unwrap_or_default();

        match (&self.name, &self.signature) {
            (Some(name), None) => f.write_str(&name.to_quoted()),
            (name, signature) => write!(f, "[{}|{}]", quoted(name), quoted(signature)),
        }
    }
}
