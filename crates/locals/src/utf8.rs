use std::{fmt, ops::Deref, sync::Arc};

/// An immutable string constant, shared by reference between the constant
/// pool and every local variable that names it.
///
/// Ordered by Unicode code point. This differs from ordering by UTF-16 code
/// unit for characters above U+FFFF, which sort after U+E000..=U+FFFF here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Utf8(Arc<str>);
impl Utf8 {
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The string in double quotes, with quotes, backslashes and control
    /// characters escaped.
    pub fn to_quoted(&self) -> String {
        let mut s = String::with_capacity(self.0.len() + 2);
        s.push('"');
        for c in self.0.chars() {
            match c {
                '"' => s.push_str("\\\""),
                '\\' => s.push_str("\\\\"),
                c if c.is_control() => s.extend(c.escape_default()),
                c => s.push(c),
            }
        }
        s.push('"');
        s
    }
}
impl Deref for Utf8 {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}
impl AsRef<str> for Utf8 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl From<&str> for Utf8 {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
impl From<String> for Utf8 {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}
impl PartialEq<str> for Utf8 {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}
impl PartialEq<&str> for Utf8 {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
impl fmt::Display for Utf8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
impl fmt::Debug for Utf8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_quoted())
    }
}
