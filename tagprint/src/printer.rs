//! Host printer that renders any [`Value`] and dispatches to plugins.
//!
//! The printer handles scalars, strings, functions, arrays and objects itself
//! and hands every value a registered [`Plugin`] accepts over to that plugin.
//! Plugins get a [`RenderContext`] to print nested values back through the
//! printer, so a nested element inside an object inside an element goes
//! through the same dispatch.
//!
//! Every printed value is laid out as if it started at column zero. Callers
//! that nest it shift it with [`RenderContext::indent`], which is what makes
//! plugin output embeddable anywhere.

use crate::element_plugin::ElementPlugin;
use crate::options::{PluginOptions, PrintOptions};
use crate::theme::{Colors, ThemeError};
use crate::tracing_macros::{debug, trace};
use crate::value::{Map, Value};

/// A renderer for one kind of value.
pub trait Plugin: Send + Sync {
    /// Returns true if this plugin renders `value`.
    fn test(&self, value: &Value) -> bool;

    /// Render a value previously accepted by [`Plugin::test`].
    fn print(&self, value: &Value, ctx: &RenderContext<'_>) -> String;
}

/// Everything a plugin needs while rendering one value.
///
/// The context is immutable and cheap to copy; it borrows the printer for
/// the duration of one call.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    printer: &'a Printer,
    depth: usize,
}

impl<'a> RenderContext<'a> {
    /// Print a nested value through the printer, plugins included.
    pub fn print(&self, value: &Value) -> String {
        self.printer.print_value(value, self.depth)
    }

    /// Prefix every line of `text` with one indentation unit.
    pub fn indent(&self, text: &str) -> String {
        self.printer.indent(text)
    }

    /// Layout options.
    pub fn options(&self) -> &'a PluginOptions {
        &self.printer.plugin_options
    }

    /// Color tokens, identity pairs when highlighting is off.
    pub fn colors(&self) -> &'a Colors {
        &self.printer.colors
    }
}

/// Pretty-printer for [`Value`]s.
pub struct Printer {
    options: PrintOptions,
    plugin_options: PluginOptions,
    colors: Colors,
    indent_unit: String,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintOptions::default())
    }
}

impl Printer {
    /// Create a printer with the element plugin registered.
    ///
    /// An unresolvable theme falls back to the default one; use
    /// [`Printer::try_new`] to surface the error instead.
    pub fn new(options: PrintOptions) -> Self {
        let colors = match resolve_colors(&options) {
            Ok(colors) => colors,
            Err(_err) => {
                debug!(%_err, "falling back to default theme");
                resolve_colors(&PrintOptions {
                    theme: Default::default(),
                    ..options.clone()
                })
                .unwrap_or_default()
            }
        };
        Self::with_colors(options, colors).with_plugin(ElementPlugin::default())
    }

    /// Like [`Printer::new`], but fails on an unresolvable theme.
    pub fn try_new(options: PrintOptions) -> Result<Self, ThemeError> {
        let colors = resolve_colors(&options)?;
        Ok(Self::with_colors(options, colors).with_plugin(ElementPlugin::default()))
    }

    /// Create a printer with no plugins registered.
    pub fn bare(options: PrintOptions) -> Result<Self, ThemeError> {
        let colors = resolve_colors(&options)?;
        Ok(Self::with_colors(options, colors))
    }

    fn with_colors(options: PrintOptions, colors: Colors) -> Self {
        Self {
            plugin_options: options.plugin_options(),
            indent_unit: options.indent_unit(),
            colors,
            options,
            plugins: Vec::new(),
        }
    }

    /// Register a plugin. Plugins are tried in registration order.
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Register a plugin ahead of all others.
    pub fn with_plugin_first(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.insert(0, Box::new(plugin));
        self
    }

    /// The options this printer was built with.
    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Format a value to a string.
    pub fn format(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, depth: usize) -> String {
        if let Some(plugin) = self.plugins.iter().find(|plugin| plugin.test(value)) {
            trace!(depth, "dispatching to plugin");
            let ctx = RenderContext {
                printer: self,
                depth,
            };
            return plugin.print(value, &ctx);
        }

        match value {
            Value::Null => "null".to_string(),
            Value::Undefined => "undefined".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => print_number(*n),
            Value::String(s) => self.print_string(s),
            Value::Function(f) => {
                let name = f.name.as_deref().filter(|n| !n.is_empty());
                format!("[Function {}]", name.unwrap_or("anonymous"))
            }
            Value::Array(items) => self.print_array(items, depth),
            Value::Object(map) => self.print_object(map, depth),
            Value::Element(_) => "[Element]".to_string(),
        }
    }

    fn print_string(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('"');
        if self.options.escape_string {
            for c in s.chars() {
                if c == '"' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
        } else {
            out.push_str(s);
        }
        out.push('"');
        out
    }

    fn hit_max_depth(&self, depth: usize) -> bool {
        self.options.max_depth.is_some_and(|max| depth > max)
    }

    fn print_array(&self, items: &[Value], depth: usize) -> String {
        let depth = depth + 1;
        if self.hit_max_depth(depth) {
            return "[Array]".to_string();
        }

        let entries: Vec<String> = items
            .iter()
            .map(|item| self.print_value(item, depth))
            .collect();
        let prefix = if self.options.min { "" } else { "Array " };
        format!("{prefix}{}", self.print_block('[', &entries, ']'))
    }

    fn print_object(&self, map: &Map, depth: usize) -> String {
        let depth = depth + 1;
        if self.hit_max_depth(depth) {
            return "[Object]".to_string();
        }

        let mut keys: Vec<_> = map.keys().collect();
        keys.sort();
        let entries: Vec<String> = keys
            .into_iter()
            .map(|key| {
                format!(
                    "{}: {}",
                    self.print_string(key),
                    self.print_value(&map[key], depth)
                )
            })
            .collect();
        let prefix = if self.options.min { "" } else { "Object " };
        format!("{prefix}{}", self.print_block('{', &entries, '}'))
    }

    fn print_block(&self, open: char, entries: &[String], close: char) -> String {
        let mut out = String::new();
        out.push(open);
        if !entries.is_empty() {
            let opts = &self.plugin_options;
            out.push_str(opts.edge_spacing);
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                    out.push_str(opts.spacing);
                }
                out.push_str(&self.indent(entry));
            }
            if !opts.min {
                out.push(',');
            }
            out.push_str(opts.edge_spacing);
        }
        out.push(close);
        out
    }

    fn indent(&self, text: &str) -> String {
        if self.indent_unit.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + self.indent_unit.len());
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.indent_unit);
            out.push_str(line);
        }
        out
    }
}

fn resolve_colors(options: &PrintOptions) -> Result<Colors, ThemeError> {
    if options.highlight {
        options.theme.resolve()
    } else {
        Ok(Colors::plain())
    }
}

fn print_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        n.to_string()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Printer>();
    assert_sync::<Printer>();
};

// =============================================================================
// Tests
// =============================================================================
