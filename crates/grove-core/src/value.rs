//! Node payloads and their type tags.
//!
//! A node holds exactly one payload representation at a time; the enum makes a
//! mismatched type/payload pair unrepresentable. `Object` and `Array` carry no
//! payload of their own — their content is the node's child list.
//!
//! Reads come in two flavors, mirroring the tree-wide error tiers:
//!
//! - `query_*` — checked: `Some(value)` only when the tag matches, `None`
//!   otherwise. Nothing is disturbed on failure.
//! - `get_*` — unchecked fast path: the caller already knows the tag.
//!   Debug builds assert on a mismatch; release builds return a default.

use crate::bounded::{BoundedString, STRING_CAPACITY};

/// Bounded string payload stored in [`Value::Str`].
pub type PayloadString = BoundedString<STRING_CAPACITY>;

/// Type tag of a [`Value`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Unused,
    Null,
    Object,
    Array,
    Bool,
    Int,
    Float,
    String,
}

impl ValueKind {
    /// `true` for the two kinds that may carry children.
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::Object | ValueKind::Array)
    }
}

/// A node's payload. Freshly created nodes are `Unused` until written.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Unused,
    Null,
    Object,
    Array,
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(PayloadString),
}

impl Value {
    /// The payload's type tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Unused => ValueKind::Unused,
            Value::Null => ValueKind::Null,
            Value::Object => ValueKind::Object,
            Value::Array => ValueKind::Array,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::String,
        }
    }

    /// `true` for `Object` and `Array`.
    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Checked read: `Some` only if this is a `Bool`.
    pub fn query_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Checked read: `Some` only if this is an `Int`.
    pub fn query_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Checked read: `Some` only if this is a `Float`.
    pub fn query_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Checked read: `Some` only if this is a `Str`.
    pub fn query_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Unchecked read. Asserts the tag in debug builds; returns `false` on a
    /// mismatch in release builds.
    pub fn get_bool(&self) -> bool {
        debug_assert!(
            matches!(self, Value::Bool(_)),
            "get_bool called on a {:?} payload",
            self.kind()
        );
        self.query_bool().unwrap_or(false)
    }

    /// Unchecked read. Asserts the tag in debug builds; returns `0` on a
    /// mismatch in release builds.
    pub fn get_int(&self) -> i32 {
        debug_assert!(
            matches!(self, Value::Int(_)),
            "get_int called on a {:?} payload",
            self.kind()
        );
        self.query_int().unwrap_or(0)
    }

    /// Unchecked read. Asserts the tag in debug builds; returns `0.0` on a
    /// mismatch in release builds.
    pub fn get_float(&self) -> f32 {
        debug_assert!(
            matches!(self, Value::Float(_)),
            "get_float called on a {:?} payload",
            self.kind()
        );
        self.query_float().unwrap_or(0.0)
    }

    /// Unchecked read. Asserts the tag in debug builds; returns `""` on a
    /// mismatch in release builds.
    pub fn get_str(&self) -> &str {
        debug_assert!(
            matches!(self, Value::Str(_)),
            "get_str called on a {:?} payload",
            self.kind()
        );
        self.query_str().unwrap_or("")
    }
}

/// A scalar value accepted by the write cursor's `write` family.
///
/// The `From` impls let call sites pass `bool`, `i32`, `f32`, or `&str`
/// directly: `cursor.write(3)`, `cursor.write("ok")`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(&'a str),
}

impl Scalar<'_> {
    /// Convert into a stored payload; string scalars truncate at the
    /// payload capacity.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(i) => Value::Int(i),
            Scalar::Float(f) => Value::Float(f),
            Scalar::Str(s) => Value::Str(PayloadString::from_str_lossy(s)),
        }
    }
}

impl From<bool> for Scalar<'_> {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar<'_> {
    fn from(value: i32) -> Self {
        Scalar::Int(value)
    }
}

impl From<f32> for Scalar<'_> {
    fn from(value: f32) -> Self {
        Scalar::Float(value)
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(value: &'a str) -> Self {
        Scalar::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_payload() {
        assert_eq!(Value::Unused.kind(), ValueKind::Unused);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Int(-3).kind(), ValueKind::Int);
        assert_eq!(Value::Float(0.5).kind(), ValueKind::Float);
        assert_eq!(
            Value::Str(PayloadString::from_str_lossy("x")).kind(),
            ValueKind::String
        );
    }

    #[test]
    fn query_rejects_mismatched_tag() {
        let v = Value::Int(7);
        assert_eq!(v.query_int(), Some(7));
        assert_eq!(v.query_bool(), None);
        assert_eq!(v.query_float(), None);
        assert_eq!(v.query_str(), None);
    }

    #[test]
    fn only_containers_report_container() {
        assert!(Value::Object.is_container());
        assert!(Value::Array.is_container());
        assert!(!Value::Null.is_container());
        assert!(!Value::Int(0).is_container());
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(Scalar::from(true).into_value(), Value::Bool(true));
        assert_eq!(Scalar::from(42).into_value(), Value::Int(42));
        assert_eq!(Scalar::from(1.5f32).into_value(), Value::Float(1.5));
        assert_eq!(
            Scalar::from("hi").into_value(),
            Value::Str(PayloadString::from_str_lossy("hi"))
        );
    }
}
