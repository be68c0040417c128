//! Typeface selection and style resolution
//!
//! The selection state is a small explicit object rather than an ambient
//! "current font" variable: a base key plus the set of emphasis toggles in
//! effect, recomputed into an effective key on every draw call.

use crate::{BuildError, Result};
use font_core::{FontRegistry, Style, TypefaceKey};

/// An inline emphasis toggle, active over a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
}

/// Transient per-page selection state
///
/// Holds the base typeface plus the emphasis toggles currently in effect.
/// Discarded at page end; a new page starts with nothing selected.
#[derive(Debug, Default)]
pub struct ActiveSelection {
    base: Option<TypefaceKey>,
    bold: bool,
    italic: bool,
}

impl ActiveSelection {
    pub fn base(&self) -> Option<&TypefaceKey> {
        self.base.as_ref()
    }

    pub fn is_emphasized(&self, emphasis: Emphasis) -> bool {
        match emphasis {
            Emphasis::Bold => self.bold,
            Emphasis::Italic => self.italic,
        }
    }
}

/// Resolves the concrete typeface variant for each run of text
///
/// Owns the page's [`ActiveSelection`]; borrows the registry per call so
/// the registry stays owned by the build session.
#[derive(Debug, Default)]
pub struct StyleResolver {
    selection: ActiveSelection,
}

impl StyleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base typeface for subsequent runs
    ///
    /// Validates existence immediately; selection alone never marks a
    /// typeface as used.
    pub fn select(&mut self, registry: &FontRegistry, key: TypefaceKey) -> Result<()> {
        if registry.lookup(&key).is_none() {
            return Err(BuildError::TypefaceNotRegistered(key.to_string()));
        }
        self.selection.base = Some(key);
        Ok(())
    }

    /// Activate an emphasis toggle; pushing an already-active toggle is
    /// idempotent
    pub fn push_emphasis(&mut self, emphasis: Emphasis) {
        match emphasis {
            Emphasis::Bold => self.selection.bold = true,
            Emphasis::Italic => self.selection.italic = true,
        }
    }

    /// Deactivate an emphasis toggle; popping an inactive toggle is a no-op
    pub fn pop_emphasis(&mut self, emphasis: Emphasis) {
        match emphasis {
            Emphasis::Bold => self.selection.bold = false,
            Emphasis::Italic => self.selection.italic = false,
        }
    }

    /// The key a run drawn right now would use
    ///
    /// The effective style is the union of the base key's bold/italic flags
    /// and the active toggles, so emphasis on an already-bold base stays
    /// bold. Fails if the combined variant was never registered for the
    /// family; the caller must surface that rather than substitute another
    /// style.
    pub fn effective_key(&self, registry: &FontRegistry) -> Result<TypefaceKey> {
        let base = self
            .selection
            .base
            .as_ref()
            .ok_or(BuildError::NoTypefaceSelected)?;

        let style = Style::from_flags(
            base.style().is_bold() || self.selection.bold,
            base.style().is_italic() || self.selection.italic,
        );
        let key = base.with_style(style);

        if registry.lookup(&key).is_none() {
            return Err(BuildError::StyleVariantNotRegistered {
                family: key.family().to_string(),
                style: style.to_string(),
            });
        }
        Ok(key)
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    /// Discard the selection; called when a new page begins
    pub fn reset(&mut self) {
        self.selection = ActiveSelection::default();
    }
}
