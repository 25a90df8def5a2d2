//! Color themes for highlighted output.
//!
//! A [`Theme`] names a color per token category. Resolving it produces
//! [`Colors`], the open/close escape sequences the printer and plugins wrap
//! around each token. With highlighting off every pair is empty.

use std::fmt;

use facet::Facet;
use owo_colors::{AnsiColors, DynColor};

use crate::Stem;

const RESET: &str = "\x1b[0m";
const DEFAULT_FG: &str = "\x1b[39m";

/// Errors that can occur while resolving a theme.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum ThemeError {
    /// theme key {key} names unknown color {name}
    UnknownColor { key: String, name: String },
}

/// Color names for each token category.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Theme {
    /// Text children (default: reset)
    pub content: Stem,
    /// Prop names (default: yellow)
    pub prop: Stem,
    /// Tag names and brackets (default: cyan)
    pub tag: Stem,
    /// Prop values (default: green)
    pub value: Stem,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            content: "reset".into(),
            prop: "yellow".into(),
            tag: "cyan".into(),
            value: "green".into(),
        }
    }
}

impl Theme {
    /// Resolve every color name into escape sequences.
    pub fn resolve(&self) -> Result<Colors, ThemeError> {
        Ok(Colors {
            content: resolve_color("content", &self.content)?,
            prop: resolve_color("prop", &self.prop)?,
            tag: resolve_color("tag", &self.tag)?,
            value: resolve_color("value", &self.value)?,
        })
    }
}

/// Opening and closing sequence around one token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct ColorPair {
    pub open: String,
    pub close: String,
}

impl ColorPair {
    /// The pair that leaves text untouched.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Wrap `text` in this pair.
    pub fn paint(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + text.len() + self.close.len());
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
        out
    }
}

/// Resolved color tokens, one pair per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Facet)]
pub struct Colors {
    pub content: ColorPair,
    pub prop: ColorPair,
    pub tag: ColorPair,
    pub value: ColorPair,
}

impl Colors {
    /// Identity table used when highlighting is off.
    pub fn plain() -> Self {
        Self::default()
    }
}

struct Foreground(AnsiColors);

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_ansi_fg(f)
    }
}

fn ansi_color(name: &str) -> Option<AnsiColors> {
    let color = match name {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "gray" | "grey" | "bright_black" => AnsiColors::BrightBlack,
        "bright_red" => AnsiColors::BrightRed,
        "bright_green" => AnsiColors::BrightGreen,
        "bright_yellow" => AnsiColors::BrightYellow,
        "bright_blue" => AnsiColors::BrightBlue,
        "bright_magenta" => AnsiColors::BrightMagenta,
        "bright_cyan" => AnsiColors::BrightCyan,
        "bright_white" => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

fn resolve_color(key: &str, name: &str) -> Result<ColorPair, ThemeError> {
    if name == "reset" {
        return Ok(ColorPair {
            open: RESET.to_string(),
            close: RESET.to_string(),
        });
    }

    let color = ansi_color(name).ok_or_else(|| ThemeError::UnknownColor {
        key: key.to_string(),
        name: name.to_string(),
    })?;

    Ok(ColorPair {
        open: Foreground(color).to_string(),
        close: DEFAULT_FG.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_default_theme_resolves() {
        let colors = Theme::default().resolve().unwrap();
        assert_eq!(colors.tag.open, "\x1b[36m");
        assert_eq!(colors.tag.close, "\x1b[39m");
        assert_eq!(colors.prop.open, "\x1b[33m");
        assert_eq!(colors.value.open, "\x1b[32m");
        assert_eq!(colors.content.open, "\x1b[0m");
        assert_eq!(colors.content.close, "\x1b[0m");
    }

    #[test]
    fn test_unknown_color_is_an_error() {
        let theme = Theme {
            prop: "chartreuse".into(),
            ..Theme::default()
        };
        let err = theme.resolve().unwrap_err();
        let ThemeError::UnknownColor { key, name } = &err;
        assert_eq!(key, "prop");
        assert_eq!(name, "chartreuse");
        assert!(err.to_string().contains("chartreuse"));
    }

    #[test]
    fn test_plain_pairs_are_identity() {
        let colors = Colors::plain();
        assert_eq!(colors.tag.paint("<div"), "<div");
        assert_eq!(ColorPair::plain().paint(""), "");
    }

    #[test]
    fn test_gray_alias() {
        let a = resolve_color("tag", "gray").unwrap();
        let b = resolve_color("tag", "grey").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.open, "\x1b[90m");
    }
}
