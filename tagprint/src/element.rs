//! UI element nodes.
//!
//! An [`Element`] has a type (a tag name or a component descriptor) and a
//! prop map. Child content lives in the prop named [`CHILDREN`], exactly like
//! any other prop, and may be a single value, an absent marker, or an
//! arbitrarily nested array.

use crate::Stem;
use crate::value::{Map, Value};

/// Name of the prop that carries child content.
pub const CHILDREN: &str = "children";

/// Name printed when the element type cannot be named.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A component descriptor used as an element type.
#[derive(Debug, Clone, Default, PartialEq, Eq, facet::Facet)]
pub struct Component {
    /// Explicit display name, preferred when present
    pub display_name: Option<Stem>,
    /// Identifier name of the component
    pub name: Option<Stem>,
}

impl Component {
    pub fn named(name: impl Into<Stem>) -> Self {
        Self {
            display_name: None,
            name: Some(name.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_display_name(mut self, display_name: impl Into<Stem>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// What an element is an instance of.
#[derive(Debug, Clone, PartialEq, Eq, facet::Facet)]
#[repr(u8)]
pub enum ElementType {
    /// A host tag such as `div`
    Tag(Stem),
    /// A user-defined component
    Component(Component),
    /// Any other type shape
    Other,
}

impl ElementType {
    /// The name printed in the tag.
    ///
    /// Empty names count as missing, so a component with an empty display
    /// name falls through to its identifier name.
    pub fn display_name(&self) -> &str {
        match self {
            ElementType::Tag(name) => name,
            ElementType::Component(c) => c
                .display_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .or_else(|| c.name.as_deref().filter(|n| !n.is_empty()))
                .unwrap_or(UNKNOWN_NAME),
            ElementType::Other => UNKNOWN_NAME,
        }
    }
}

/// A UI element: a type plus props (children included).
#[derive(Debug, Clone, PartialEq, facet::Facet)]
pub struct Element {
    pub ty: ElementType,
    pub props: Map,
}

impl Element {
    /// Create an element of any type with no props.
    pub fn new(ty: ElementType) -> Self {
        Self {
            ty,
            props: Map::new(),
        }
    }

    /// Create a host element such as `div`.
    pub fn tag(name: impl Into<Stem>) -> Self {
        Self::new(ElementType::Tag(name.into()))
    }

    /// Create a component element.
    pub fn component(component: Component) -> Self {
        Self::new(ElementType::Component(component))
    }

    /// The name printed in the tag.
    pub fn name(&self) -> &str {
        self.ty.display_name()
    }

    /// Set a prop, returning the element.
    pub fn with_prop(mut self, name: impl Into<Stem>, value: impl Into<Value>) -> Self {
        self.set_prop(name, value);
        self
    }

    /// Set the `children` prop, returning the element.
    pub fn with_children(self, children: impl Into<Value>) -> Self {
        self.with_prop(CHILDREN, children)
    }

    /// Set a prop. Overwrites an existing prop of the same name in place.
    pub fn set_prop(&mut self, name: impl Into<Stem>, value: impl Into<Value>) {
        self.props.insert(name.into(), value.into());
    }

    /// Get a prop value.
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// Remove a prop, keeping the order of the others.
    pub fn remove_prop(&mut self, name: &str) -> Option<Value> {
        self.props.shift_remove(name)
    }

    /// Raw child content, if any.
    pub fn children(&self) -> Option<&Value> {
        self.prop(CHILDREN)
    }

    /// Props other than `children`, in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.props
            .iter()
            .filter(|(name, _)| name.as_str() != CHILDREN)
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns true if at least one prop other than `children` is set.
    pub fn has_attributes(&self) -> bool {
        self.attributes().next().is_some()
    }

    /// Returns true if the element renders with a body and closing tag.
    pub fn has_children(&self) -> bool {
        self.children().is_some_and(Value::is_truthy)
    }
}

// =============================================================================
// Tests
// =============================================================================
