//! Typeface styles

use std::fmt;

/// The four style variants a family can provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl Style {
    /// Build a style from its bold/italic flags
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Style::Regular,
            (true, false) => Style::Bold,
            (false, true) => Style::Italic,
            (true, true) => Style::BoldItalic,
        }
    }

    pub fn is_bold(self) -> bool {
        matches!(self, Style::Bold | Style::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, Style::Italic | Style::BoldItalic)
    }

    /// Suffix appended to a family name to form a variant name
    /// (e.g. "roboto-bold-italic")
    pub fn suffix(self) -> &'static str {
        match self {
            Style::Regular => "",
            Style::Bold => "-bold",
            Style::Italic => "-italic",
            Style::BoldItalic => "-bold-italic",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Regular => "regular",
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::BoldItalic => "bold italic",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Style::from_flags(false, false), Style::Regular);
        assert_eq!(Style::from_flags(true, false), Style::Bold);
        assert_eq!(Style::from_flags(false, true), Style::Italic);
        assert_eq!(Style::from_flags(true, true), Style::BoldItalic);
    }

    #[test]
    fn test_flags_roundtrip() {
        for style in [Style::Regular, Style::Bold, Style::Italic, Style::BoldItalic] {
            assert_eq!(Style::from_flags(style.is_bold(), style.is_italic()), style);
        }
    }

    #[test]
    fn test_suffix() {
        assert_eq!(Style::Regular.suffix(), "");
        assert_eq!(Style::BoldItalic.suffix(), "-bold-italic");
    }

    #[test]
    fn test_display() {
        assert_eq!(Style::Bold.to_string(), "bold");
        assert_eq!(Style::BoldItalic.to_string(), "bold italic");
    }
}
