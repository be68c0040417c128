//! Typeface keys

use crate::Style;
use std::fmt;

/// Identifies a single typeface variant: a family plus a style.
///
/// Family matching is case-insensitive. The family name is normalized
/// (trimmed, ASCII-lowercased) at construction so the derived `Eq` and
/// `Hash` compare normalized forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypefaceKey {
    family: String,
    style: Style,
}

impl TypefaceKey {
    /// Create a key for the given family and style
    pub fn new(family: &str, style: Style) -> Self {
        Self {
            family: family.trim().to_ascii_lowercase(),
            style,
        }
    }

    /// The normalized family name
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// The same family with a different style
    pub fn with_style(&self, style: Style) -> Self {
        Self {
            family: self.family.clone(),
            style,
        }
    }

    /// Variant name for diagnostics and object naming
    /// (e.g. "roboto-bold")
    pub fn variant_name(&self) -> String {
        format!("{}{}", self.family, self.style.suffix())
    }
}

impl fmt::Display for TypefaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            Style::Regular => write!(f, "{}", self.family),
            style => write!(f, "{} ({})", self.family, style),
        }
    }
}
