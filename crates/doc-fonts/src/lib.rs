//! Doc Fonts - font liveness tracking for pagebind document builds
//!
//! This crate decides which registered typefaces actually end up in a
//! finished document. A build registers typeface variants up front, then
//! while pages are constructed it tracks which variants are *drawn* (as
//! opposed to merely selected). At page finalization each page gets a
//! minimal resource table; at document finalization a single sweep filters
//! the registry down to the typefaces drawn anywhere, in registration
//! order, so object numbering is deterministic across builds.
//!
//! # Example
//!
//! ```ignore
//! use doc_fonts::{BuildSession, Emphasis};
//! use font_core::Style;
//!
//! let mut build = BuildSession::new();
//! build.register_embedded("roboto", Style::Regular, regular_ttf)?;
//! build.register_embedded("roboto", Style::Bold, bold_ttf)?;
//!
//! build.begin_page();
//! build.select("roboto", Style::Regular)?;
//! build.push_emphasis(Emphasis::Bold);
//! let id = build.render_run()?; // marks the bold variant live on this page
//!
//! let fonts = build.finish();
//! assert_eq!(fonts.page(1).unwrap().resources().len(), 1);
//! ```

mod resources;
mod selection;
mod session;
mod sweep;
mod usage;

pub use resources::{resource_name, PageResource, ResourceBinder};
pub use selection::{ActiveSelection, Emphasis, StyleResolver};
pub use session::{BuildSession, DocumentFonts, PageFonts};
pub use sweep::{sweep, sweep_records, FontObject, SweptFont};
pub use usage::{PageUsage, UsageTracker};

use font_core::FontError;
use thiserror::Error;

/// Errors that can occur while constructing a document
#[derive(Debug, Error)]
pub enum BuildError {
    /// A `select` named a typeface that was never registered. Reported at
    /// selection time, not deferred to the draw call.
    #[error("Typeface not registered: {0}")]
    TypefaceNotRegistered(String),

    /// The active emphasis combination resolves to a variant that was never
    /// registered for this family. There is no silent fallback to another
    /// style.
    #[error("Style variant not registered: {family} ({style})")]
    StyleVariantNotRegistered { family: String, style: String },

    /// A draw call arrived before any typeface was selected on this page.
    #[error("No typeface selected")]
    NoTypefaceSelected,

    #[error("Font error: {0}")]
    Font(#[from] FontError),
}

/// Result type for document build operations
pub type Result<T> = std::result::Result<T, BuildError>;
