//! Dynamic values understood by the printer.
//!
//! [`Value`] is the "anything" a pretty-printer is asked to render: scalars,
//! strings, arrays, objects, functions, and UI elements. Values are owned
//! trees, so they are acyclic by construction.
//!
//! # Example
//!
//! ```rust
//! use tagprint::{Element, Value, value};
//!
//! let v = value::array([Value::from(1), Value::Null, Value::from("two")]);
//! assert!(v.is_truthy());
//!
//! let button = Element::tag("button").with_prop("disabled", true);
//! assert!(Value::from(button).is_element());
//! ```

use indexmap::IndexMap;

use crate::Stem;
use crate::element::Element;

/// Ordered string-keyed map used for objects and element props.
pub type Map = IndexMap<Stem, Value>;

/// A function reference. Only its name is kept, for printing.
#[derive(Debug, Clone, Default, PartialEq, Eq, facet::Facet)]
pub struct Function {
    pub name: Option<Stem>,
}

impl Function {
    pub fn named(name: impl Into<Stem>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { name: None }
    }
}

/// Any printable value.
#[derive(Debug, Clone, PartialEq, facet::Facet)]
#[repr(u8)]
pub enum Value {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `true` / `false`
    Bool(bool),
    /// A double-precision number
    Number(f64),
    /// A string
    String(Stem),
    /// An ordered sequence
    Array(Vec<Value>),
    /// A string-keyed record
    Object(Map),
    /// A function reference
    Function(Function),
    /// A UI element
    Element(Box<Element>),
}

impl Value {
    /// Returns true for `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Returns true if this is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an element.
    pub fn is_element(&self) -> bool {
        matches!(self, Value::Element(_))
    }

    /// Get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as array slice.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Truthiness as the element format defines it.
    ///
    /// `null`, `undefined`, `false`, `0`, `-0`, `NaN` and `""` are falsy.
    /// Every array and object is truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Undefined => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) | Value::Element(_) => true,
        }
    }
}

/// Build an array value.
pub fn array<I>(items: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Value::Array(items.into_iter().map(Into::into).collect())
}

/// Build an object value. Later duplicate keys overwrite earlier ones.
pub fn object<K, V, I>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Stem>,
    V: Into<Value>,
{
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Stem> for Value {
    fn from(s: Stem) -> Self {
        Value::String(s)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Value::Function(f)
    }
}

impl From<Element> for Value {
    fn from(e: Element) -> Self {
        Value::Element(Box::new(e))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(-0.0).is_truthy());
        assert!(!Value::from(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::from(true).is_truthy());
        assert!(Value::from(7).is_truthy());
        assert!(Value::from("x").is_truthy());
        assert!(Value::Array(Vec::new()).is_truthy());
        assert!(Value::Object(Map::new()).is_truthy());
        assert!(Value::from(Function::anonymous()).is_truthy());
    }

    #[test]
    fn test_object_last_key_wins() {
        let v = object([("a", 1), ("b", 2), ("a", 3)]);
        let Value::Object(map) = v else {
            panic!("expected object");
        };
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("hi")), Value::from("hi"));
    }
}
