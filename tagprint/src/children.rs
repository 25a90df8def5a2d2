//! Child content flattening.
//!
//! Raw child content is any [`Value`]. Arrays are fragments and get expanded,
//! `null`, `undefined` and `false` mean "nothing here" and are dropped at any
//! depth, and everything else is a leaf. Inputs are owned value trees, so
//! they are acyclic and the recursion always terminates.

use smallvec::SmallVec;

use crate::value::Value;

/// Flattened leaves. Most elements have only a handful of children.
pub type Leaves<'a> = SmallVec<[&'a Value; 8]>;

/// Structural view of raw child content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildContent<'a> {
    /// `null`, `undefined` or `false`
    Absent,
    /// A renderable value
    Leaf(&'a Value),
    /// A nested fragment
    Sequence(&'a [Value]),
}

impl<'a> ChildContent<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Undefined | Value::Bool(false) => ChildContent::Absent,
            Value::Array(items) => ChildContent::Sequence(items),
            other => ChildContent::Leaf(other),
        }
    }
}

impl<'a> From<&'a Value> for ChildContent<'a> {
    fn from(value: &'a Value) -> Self {
        Self::of(value)
    }
}

/// Call `cb` once per leaf, depth-first and left to right.
pub fn traverse_children<'a, F>(children: &'a Value, cb: &mut F)
where
    F: FnMut(&'a Value),
{
    match ChildContent::of(children) {
        ChildContent::Absent => {}
        ChildContent::Leaf(leaf) => cb(leaf),
        ChildContent::Sequence(items) => {
            for item in items {
                traverse_children(item, cb);
            }
        }
    }
}

/// Collect the leaves of `children` in render order.
pub fn flatten_children(children: &Value) -> Leaves<'_> {
    let mut leaves = Leaves::new();
    traverse_children(children, &mut |leaf| leaves.push(leaf));
    leaves
}
