//! Usage tracking
//!
//! Records which typeface ids are actually drawn, per page and for the
//! document as a whole. The document-wide set is a running union kept
//! current on every mark, so the finalize-time sweep never re-scans pages.
//!
//! Sequencing violations (marking a page that was never begun or is already
//! finalized) are caller bugs, not recoverable conditions, and panic.

use font_core::FontId;
use std::collections::{BTreeMap, BTreeSet};

/// Liveness set for one page
///
/// Accumulates monotonically while the page is open; immutable once the
/// page is finalized.
#[derive(Debug)]
pub struct PageUsage {
    page: usize,
    live: BTreeSet<FontId>,
    finalized: bool,
}

impl PageUsage {
    fn new(page: usize) -> Self {
        Self {
            page,
            live: BTreeSet::new(),
            finalized: false,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Ids drawn on this page, ascending
    pub fn live_ids(&self) -> &BTreeSet<FontId> {
        &self.live
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

/// Tracks drawn typefaces across all pages of one document build
#[derive(Debug, Default)]
pub struct UsageTracker {
    pages: BTreeMap<usize, PageUsage>,
    document_live: BTreeSet<FontId>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a page
    ///
    /// Every page gets an entry even if nothing is ever drawn on it, so a
    /// render-free page finalizes to an empty resource table.
    ///
    /// # Panics
    /// If the page was already begun.
    pub fn begin_page(&mut self, page: usize) {
        let previous = self.pages.insert(page, PageUsage::new(page));
        assert!(previous.is_none(), "page {page} begun twice");
    }

    /// Record that `id` was drawn on `page`; idempotent
    ///
    /// Called once per rendered run of text, never for mere selection.
    ///
    /// # Panics
    /// If the page was never begun or is already finalized.
    pub fn mark_used(&mut self, page: usize, id: FontId) {
        let usage = self
            .pages
            .get_mut(&page)
            .unwrap_or_else(|| panic!("mark_used on page {page} that was never begun"));
        assert!(
            !usage.finalized,
            "mark_used on page {page} after finalize_page"
        );
        usage.live.insert(id);
        self.document_live.insert(id);
    }

    /// Freeze a page's live set
    ///
    /// # Panics
    /// If the page was never begun or is already finalized.
    pub fn finalize_page(&mut self, page: usize) {
        let usage = self
            .pages
            .get_mut(&page)
            .unwrap_or_else(|| panic!("finalize_page on page {page} that was never begun"));
        assert!(!usage.finalized, "page {page} finalized twice");
        usage.finalized = true;
    }

    pub fn page(&self, page: usize) -> Option<&PageUsage> {
        self.pages.get(&page)
    }

    /// Union of every page's live set
    ///
    /// Valid to query at any time; complete once all pages are finalized.
    pub fn document_live_set(&self) -> &BTreeSet<FontId> {
        &self.document_live
    }
}
