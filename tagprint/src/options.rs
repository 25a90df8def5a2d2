//! Printer configuration.

use facet::Facet;

use crate::theme::Theme;

/// Options for printing values.
#[derive(Clone, Debug, Facet)]
pub struct PrintOptions {
    /// Compact single-line output with no indentation (default: false)
    pub min: bool,
    /// Spaces per indentation level (default: 2, ignored when `min` is set)
    pub indent: usize,
    /// Wrap tokens in the theme's ANSI colors (default: false)
    pub highlight: bool,
    /// Color names used when highlighting (default: [`Theme::default`])
    pub theme: Theme,
    /// Arrays and objects nested deeper than this print as `[Array]` / `[Object]`
    pub max_depth: Option<usize>,
    /// Backslash-escape `"` and `\` in printed strings (default: true)
    pub escape_string: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            min: false,
            indent: 2,
            highlight: false,
            theme: Theme::default(),
            max_depth: None,
            escape_string: true,
        }
    }
}

impl PrintOptions {
    /// Create new default options (multi-line, uncolored output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable compact output.
    pub fn min(mut self) -> Self {
        self.min = true;
        self
    }

    /// Set the number of spaces per indentation level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable colored output with the current theme.
    pub fn highlight(mut self) -> Self {
        self.highlight = true;
        self
    }

    /// Set a custom theme (implies highlighting).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.highlight = true;
        self
    }

    /// Limit how deep arrays and objects are expanded.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Print strings without escaping quotes and backslashes.
    pub fn no_escape_string(mut self) -> Self {
        self.escape_string = false;
        self
    }

    /// The string prefixed to each line per indentation level.
    pub fn indent_unit(&self) -> String {
        if self.min {
            String::new()
        } else {
            " ".repeat(self.indent)
        }
    }

    /// The subset of options handed to plugins.
    pub fn plugin_options(&self) -> PluginOptions {
        if self.min {
            PluginOptions {
                min: true,
                edge_spacing: "",
                spacing: " ",
            }
        } else {
            PluginOptions {
                min: false,
                edge_spacing: "\n",
                spacing: "\n",
            }
        }
    }
}

/// Layout options seen by plugins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PluginOptions {
    /// Compact output requested
    pub min: bool,
    /// Separator around nested blocks
    pub edge_spacing: &'static str,
    /// Separator before each attribute or list item
    pub spacing: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_defaults() {
        let opts = PrintOptions::default();
        assert!(!opts.min);
        assert!(!opts.highlight);
        assert_eq!(opts.indent_unit(), "  ");
        assert_eq!(opts.plugin_options().edge_spacing, "\n");
        assert_eq!(opts.plugin_options().spacing, "\n");
    }

    #[test]
    fn test_min_drops_indentation_and_newlines() {
        let opts = PrintOptions::new().with_indent(4).min();
        assert_eq!(opts.indent_unit(), "");
        let plugin = opts.plugin_options();
        assert!(plugin.min);
        assert_eq!(plugin.edge_spacing, "");
        assert_eq!(plugin.spacing, " ");
    }

    #[test]
    fn test_with_theme_implies_highlight() {
        let opts = PrintOptions::new().with_theme(Theme::default());
        assert!(opts.highlight);
    }
}
