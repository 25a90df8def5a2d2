//! Markup-style rendering of [`Element`] values.
//!
//! Output looks like JSX:
//!
//! ```text
//! <Button
//!   disabled={true}
//!   label="Save"
//! >
//!   Click me
//! </Button>
//! ```
//!
//! Layout rules:
//!
//! - Props other than `children` are printed in lexicographic order, one per
//!   line. String values are used as printed (quoted); everything else is
//!   wrapped in braces, with multi-line values moved onto their own lines.
//! - An element with at least one prop closes its opening tag on a new line,
//!   unless compact output is requested.
//! - An element with no (or falsy) `children` is self-closing.
//! - Text children are escaped and colored as content; other children are
//!   printed through the host printer, so nested elements recurse.

use crate::children::{Leaves, flatten_children};
use crate::element::{CHILDREN, Element};
use crate::escape::{EscapeFn, escape_html};
use crate::printer::{Plugin, RenderContext};
use crate::tracing_macros::trace;
use crate::value::{Map, Value};

/// Renders [`Value::Element`] values as markup.
#[derive(Clone, Copy)]
pub struct ElementPlugin {
    escape: EscapeFn,
}

impl Default for ElementPlugin {
    fn default() -> Self {
        Self {
            escape: escape_html,
        }
    }
}

impl ElementPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different escaper for text children.
    pub fn with_escape(mut self, escape: EscapeFn) -> Self {
        self.escape = escape;
        self
    }

    /// Render one element.
    pub fn print_element(&self, element: &Element, ctx: &RenderContext<'_>) -> String {
        let colors = ctx.colors();
        let opts = ctx.options();
        let name = element.name();

        let mut out = colors.tag.paint(&format!("<{name}"));
        out.push_str(&print_props(&element.props, ctx));

        let close_in_new_line = element.has_attributes() && !opts.min;

        match element.children().filter(|children| children.is_truthy()) {
            Some(children) => {
                let leaves = flatten_children(children);
                trace!(tag = name, leaves = leaves.len(), "rendering element with children");
                let body = self.print_children(&leaves, ctx);

                let open_end = if close_in_new_line { "\n>" } else { ">" };
                out.push_str(&colors.tag.paint(open_end));
                out.push_str(opts.edge_spacing);
                out.push_str(&ctx.indent(&body));
                out.push_str(opts.edge_spacing);
                out.push_str(&colors.tag.paint(&format!("</{name}>")));
            }
            None => {
                trace!(tag = name, "rendering self-closing element");
                let self_close = if close_in_new_line { "\n/>" } else { " />" };
                out.push_str(&colors.tag.paint(self_close));
            }
        }

        out
    }

    /// Render flattened children, joined by the edge spacing.
    pub fn print_children(&self, leaves: &Leaves<'_>, ctx: &RenderContext<'_>) -> String {
        let colors = ctx.colors();
        leaves
            .iter()
            .map(|leaf| match leaf {
                Value::String(text) => colors.content.paint(&(self.escape)(text)),
                other => ctx.print(other),
            })
            .collect::<Vec<_>>()
            .join(ctx.options().edge_spacing)
    }
}

impl Plugin for ElementPlugin {
    fn test(&self, value: &Value) -> bool {
        value.is_element()
    }

    fn print(&self, value: &Value, ctx: &RenderContext<'_>) -> String {
        match value.as_element() {
            Some(element) => self.print_element(element, ctx),
            None => ctx.print(value),
        }
    }
}

/// Render every prop except `children` as ` name=value` fragments.
///
/// Fragments are sorted by name and concatenated; each carries its own
/// leading spacing. Returns an empty string when there is nothing to print.
pub fn print_props(props: &Map, ctx: &RenderContext<'_>) -> String {
    let colors = ctx.colors();
    let opts = ctx.options();

    let mut names: Vec<_> = props
        .keys()
        .filter(|name| name.as_str() != CHILDREN)
        .collect();
    names.sort();

    let mut out = String::new();
    for name in names {
        let value = &props[name];
        let mut printed = ctx.print(value);

        if !value.is_string() {
            printed = if printed.contains('\n') {
                let inner = format!("{}{}}}", ctx.indent(&printed), opts.edge_spacing);
                format!("{{{}{}", opts.edge_spacing, ctx.indent(&inner))
            } else {
                format!("{{{printed}}}")
            };
        }

        out.push_str(opts.spacing);
        out.push_str(&ctx.indent(&format!("{}=", colors.prop.paint(name))));
        out.push_str(&colors.value.paint(&printed));
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
