//! Display colors for cell states.
//!
//! Colors are presentation only: a [`Palette`] maps a state's color index to
//! a [`Color`] and never influences evolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 16 standard ANSI color names accepted in addition to hex codes.
pub const ANSI_COLORS: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

/// A validated color: `#rrggbb` (case preserved) or an ANSI color name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color '{0}': expected a 6 digit hex code or an ANSI color name")]
pub struct ColorParseError(pub String);

impl Color {
    /// Wrap a color literal known to be valid.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(s.parse::<Color>().is_ok(), "invalid color literal {s}");
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_ansi(&self) -> bool {
        !self.0.starts_with('#')
    }
}

fn is_hex(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ANSI_COLORS.contains(&s) {
            return Ok(Self(s.to_string()));
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if is_hex(hex) {
            Ok(Self(format!("#{hex}")))
        } else {
            Err(ColorParseError(s.to_string()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed-length list of colors, one per possible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette. Its length is fixed from here on.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Replace the colors, keeping the palette length.
    ///
    /// Short input is right-padded with the current colors, surplus colors
    /// are dropped.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        let len = self.colors.len();
        let mut colors: Vec<Color> = colors.into_iter().take(len).collect();
        let given = colors.len();
        colors.extend(self.colors.drain(given..));
        self.colors = colors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn two_colors() -> Palette {
        Palette::new(vec![color("green"), color("red")])
    }

    #[test]
    fn test_hex_normalized() {
        assert_eq!(color("ff0000").as_str(), "#ff0000");
        assert_eq!(color("FF0000").as_str(), "#FF0000");
        assert_eq!(color("#315771").as_str(), "#315771");
        assert!(!color("#315771").is_ansi());
    }

    #[test]
    fn test_ansi_names() {
        assert_eq!(color("red").as_str(), "red");
        assert!(color("bright_cyan").is_ansi());
        assert!("orange".parse::<Color>().is_err());
        assert!("RED".parse::<Color>().is_err());
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["FF!000", "FF000", "FF00000", "GG0000", "#", ""] {
            assert!(bad.parse::<Color>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_set_colors_exact() {
        let mut palette = two_colors();
        palette.set_colors([color("blue"), color("yellow")]);
        assert_eq!(palette.colors(), &[color("blue"), color("yellow")]);
    }

    #[test]
    fn test_set_colors_pads_with_previous() {
        let mut palette = two_colors();
        palette.set_colors([color("blue")]);
        assert_eq!(palette.colors(), &[color("blue"), color("red")]);
    }

    #[test]
    fn test_set_colors_truncates() {
        let mut palette = two_colors();
        palette.set_colors([color("black"), color("white"), color("cyan")]);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.colors(), &[color("black"), color("white")]);
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let parsed: Vec<Color> = serde_json::from_str(r#"["blue", "00ff00"]"#).unwrap();
        assert_eq!(parsed, vec![color("blue"), color("#00ff00")]);
        assert!(serde_json::from_str::<Color>("\"chartreuse\"").is_err());
    }
}
