use std::fmt;

use crate::{LocalsError, Result, Utf8};

/// The most array dimensions a field descriptor may have.
pub const MAX_ARRAY_DIMENSIONS: usize = 255;

/// The type named by a field descriptor.
///
/// <https://docs.oracle.com/javase/specs/jvms/se19/html/jvms-4.html#jvms-4.3.2>
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    /// A class or interface, by binary name in internal form (`java/lang/String`).
    Object(Utf8),
    Array(Box<Type>),
}
impl Type {
    pub fn from_descriptor(descriptor: &str) -> Result<Type> {
        let invalid = || LocalsError::InvalidDescriptor(descriptor.to_owned());

        let (ty, rest) = Self::parse_field_type(descriptor).ok_or_else(invalid)?;
        if !rest.is_empty() {
            return Err(invalid());
        }

        Ok(ty)
    }

    fn parse_field_type(s: &str) -> Option<(Type, &str)> {
        let element = s.trim_start_matches('[');
        let dimensions = s.len() - element.len();
        if dimensions > MAX_ARRAY_DIMENSIONS {
            return None;
        }

        let (element, rest) = Self::parse_element_type(element)?;
        let ty = (0..dimensions).fold(element, |ty, _| Type::Array(Box::new(ty)));

        Some((ty, rest))
    }

    fn parse_element_type(s: &str) -> Option<(Type, &str)> {
        let mut chars = s.chars();
        let ty = match chars.next()? {
            'Z' => Type::Boolean,
            'B' => Type::Byte,
            'C' => Type::Char,
            'S' => Type::Short,
            'I' => Type::Int,
            'J' => Type::Long,
            'F' => Type::Float,
            'D' => Type::Double,
            'L' => {
                let rest = chars.as_str();
                let end = rest.find(';')?;
                let class_name = &rest[..end];
                if class_name.is_empty() {
                    return None;
                }
                return Some((Type::Object(class_name.into()), &rest[end + 1..]));
            }
            _ => return None,
        };

        Some((ty, chars.as_str()))
    }

    pub fn descriptor(&self) -> String {
        self.to_string()
    }

    /// Whether a value of this type takes up two local variable slots.
    pub fn is_category2(&self) -> bool {
        matches!(self, Type::Long | Type::Double)
    }
}
impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("Z"),
            Type::Byte => f.write_str("B"),
            Type::Char => f.write_str("C"),
            Type::Short => f.write_str("S"),
            Type::Int => f.write_str("I"),
            Type::Long => f.write_str("J"),
            Type::Float => f.write_str("F"),
            Type::Double => f.write_str("D"),
            Type::Object(class_name) => write!(f, "L{};", class_name),
            Type::Array(component) => write!(f, "[{}", component),
        }
    }
}
