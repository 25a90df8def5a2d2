//! Markup-style pretty-printing for UI element trees.
//!
//! tagprint provides:
//! - **Value model**: dynamic [`Value`]s, including [`Element`] nodes with a
//!   type, props and nested children
//! - **Element plugin**: renders elements as JSX-like markup with sorted props,
//!   flattened children and deterministic line breaks, for snapshot diffs
//! - **Printer**: a small host pretty-printer that renders every other value
//!   and dispatches to [`Plugin`]s
//! - **Themes**: optional ANSI highlighting of tags, props, values and text
//!
//! # Example
//!
//! ```rust
//! use tagprint::{Element, Printer, PrintOptions, Value};
//!
//! let button = Element::tag("button")
//!     .with_prop("type", "submit")
//!     .with_prop("disabled", false)
//!     .with_children("Save");
//!
//! let out = Printer::default().format(&Value::from(button.clone()));
//! assert_eq!(
//!     out,
//!     "<button\n  disabled={false}\n  type=\"submit\"\n>\n  Save\n</button>"
//! );
//!
//! let compact = Printer::new(PrintOptions::new().min()).format(&Value::from(button));
//! assert_eq!(compact, "<button disabled={false} type=\"submit\">Save</button>");
//! ```

mod tracing_macros;

pub mod children;
pub mod element;
pub mod element_plugin;
pub mod escape;
pub mod options;
pub mod printer;
mod stem;
pub mod theme;
pub mod value;

pub use children::{ChildContent, flatten_children, traverse_children};
pub use element::{Component, Element, ElementType};
pub use element_plugin::ElementPlugin;
pub use escape::escape_html;
pub use options::{PluginOptions, PrintOptions};
pub use printer::{Plugin, Printer, RenderContext};
pub use stem::Stem;
pub use theme::{ColorPair, Colors, Theme, ThemeError};
pub use value::{Function, Value};

/// Format a value with the given options and the element plugin registered.
pub fn pretty_format(value: &Value, options: PrintOptions) -> String {
    Printer::new(options).format(value)
}
