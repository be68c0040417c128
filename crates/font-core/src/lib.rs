//! Font Core - typeface registry for pagebind
//!
//! This crate provides the per-document font bookkeeping:
//! - Typeface keys (family + style) with case-insensitive family matching
//! - Font metrics (advance widths, ascent/descent) parsed from TrueType data
//!   or supplied directly by the caller
//! - An append-only registry that assigns each typeface a stable integer id
//!   at registration time
//!
//! Registration is deliberately cheap: font program bytes are held opaquely
//! and are only read when a document build embeds them, so registering many
//! speculative variants costs nothing beyond in-memory bookkeeping.
//!
//! # Example
//!
//! ```ignore
//! use font_core::{FontMetrics, FontRegistry, FontSource, Style, TypefaceKey};
//!
//! let mut registry = FontRegistry::new();
//! let data = std::fs::read("Roboto-Regular.ttf")?;
//! let metrics = FontMetrics::from_ttf(&data)?;
//! let id = registry.register(
//!     TypefaceKey::new("Roboto", Style::Regular),
//!     FontSource::Embedded { data },
//!     metrics,
//! )?;
//! assert_eq!(id.get(), 1);
//! ```

mod key;
mod metrics;
mod registry;
mod style;

pub use key::TypefaceKey;
pub use metrics::FontMetrics;
pub use registry::{FontId, FontRecord, FontRegistry, FontSource};
pub use style::Style;

use thiserror::Error;

/// Errors that can occur during font registration and parsing
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Typeface already registered with a different source: {0}")]
    SourceConflict(String),
}

/// Result type for font operations
pub type Result<T> = std::result::Result<T, FontError>;
