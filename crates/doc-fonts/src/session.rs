//! Document build session
//!
//! One `BuildSession` owns the font state of one document build: the
//! registry, the usage tracker, and the page under construction. Building
//! is single-writer and sequential; exactly one page is open at a time and
//! pages are numbered from 1 in construction order.
//!
//! Finishing the session is all-or-nothing: `finish` consumes the session
//! and produces the complete [`DocumentFonts`] artifact, while dropping an
//! unfinished session leaves nothing partially emitted.

use crate::resources::{font_dictionary, PageResource, ResourceBinder};
use crate::selection::{Emphasis, StyleResolver};
use crate::sweep::{sweep, SweptFont};
use crate::usage::UsageTracker;
use crate::Result;
use font_core::{FontId, FontMetrics, FontRegistry, FontSource, Style, TypefaceKey};
use lopdf::Dictionary;

/// Font resources of one finalized page
pub struct PageFonts {
    page: usize,
    resources: Vec<PageResource>,
}

impl PageFonts {
    pub fn page(&self) -> usize {
        self.page
    }

    /// Entries in ascending id order, exactly the typefaces drawn on this
    /// page
    pub fn resources(&self) -> &[PageResource] {
        &self.resources
    }

    /// The table as a lopdf Font dictionary for the page's resource entry
    pub fn font_dictionary(&self) -> Dictionary {
        font_dictionary(&self.resources)
    }
}

/// The finished font side of a document: per-page resource tables plus the
/// swept set of font objects to physically write
pub struct DocumentFonts {
    pages: Vec<PageFonts>,
    fonts: Vec<SweptFont>,
}

impl DocumentFonts {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Fonts of a page (1-indexed)
    pub fn page(&self, page: usize) -> Option<&PageFonts> {
        self.pages.get(page.checked_sub(1)?)
    }

    pub fn pages(&self) -> &[PageFonts] {
        &self.pages
    }

    /// Live font objects in registration order; typefaces never drawn
    /// anywhere appear in neither this list nor any page table
    pub fn fonts(&self) -> &[SweptFont] {
        &self.fonts
    }
}

/// Font bookkeeping for one document build
pub struct BuildSession {
    registry: FontRegistry,
    usage: UsageTracker,
    resolver: StyleResolver,
    open_page: Option<usize>,
    page_count: usize,
}

impl BuildSession {
    pub fn new() -> Self {
        Self {
            registry: FontRegistry::new(),
            usage: UsageTracker::new(),
            resolver: StyleResolver::new(),
            open_page: None,
            page_count: 0,
        }
    }

    /// Register a typeface variant
    ///
    /// Registration is cheap and never touches the page state; variants
    /// that end up undrawn cost nothing in the final document.
    pub fn register(
        &mut self,
        key: TypefaceKey,
        source: FontSource,
        metrics: FontMetrics,
    ) -> Result<FontId> {
        Ok(self.registry.register(key, source, metrics)?)
    }

    /// Register an embeddable font program, parsing metrics from its bytes
    pub fn register_embedded(
        &mut self,
        family: &str,
        style: Style,
        data: Vec<u8>,
    ) -> Result<FontId> {
        let metrics = FontMetrics::from_ttf(&data)?;
        self.register(
            TypefaceKey::new(family, style),
            FontSource::Embedded { data },
            metrics,
        )
    }

    /// Register a standard typeface the viewer resolves by name
    pub fn register_builtin(
        &mut self,
        family: &str,
        style: Style,
        base_font: &str,
    ) -> Result<FontId> {
        self.register(
            TypefaceKey::new(family, style),
            FontSource::Builtin {
                base_font: base_font.to_string(),
            },
            FontMetrics::default(),
        )
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    /// The usage tracker, for streaming queries of the running live set
    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }

    /// Open the next page, finalizing the current one if still open
    ///
    /// Each page starts with a fresh selection; nothing selected on an
    /// earlier page carries over.
    pub fn begin_page(&mut self) -> usize {
        if self.open_page.is_some() {
            self.finalize_page();
        }
        self.page_count += 1;
        let page = self.page_count;
        self.usage.begin_page(page);
        self.resolver.reset();
        self.open_page = Some(page);
        page
    }

    /// The page currently under construction
    pub fn current_page(&self) -> Option<usize> {
        self.open_page
    }

    /// Select the base typeface for subsequent runs on the open page
    pub fn select(&mut self, family: &str, style: Style) -> Result<()> {
        assert!(
            self.open_page.is_some(),
            "select called with no open page"
        );
        self.resolver
            .select(&self.registry, TypefaceKey::new(family, style))
    }

    pub fn push_emphasis(&mut self, emphasis: Emphasis) {
        assert!(
            self.open_page.is_some(),
            "push_emphasis called with no open page"
        );
        self.resolver.push_emphasis(emphasis);
    }

    pub fn pop_emphasis(&mut self, emphasis: Emphasis) {
        assert!(
            self.open_page.is_some(),
            "pop_emphasis called with no open page"
        );
        self.resolver.pop_emphasis(emphasis);
    }

    /// Record one rendered run of text
    ///
    /// Resolves the effective variant and marks it live on the open page,
    /// returning the id the content generator references as "F{id}". On a
    /// resolution error nothing is marked.
    pub fn render_run(&mut self) -> Result<FontId> {
        let page = self.open_page.expect("render_run called with no open page");
        let key = self.resolver.effective_key(&self.registry)?;
        let id = self
            .registry
            .lookup(&key)
            .map(|record| record.id)
            .expect("effective key is registered");
        self.usage.mark_used(page, id);
        Ok(id)
    }

    /// Width of a run under the effective variant's metrics, in points
    ///
    /// A measurement is not a draw; nothing is marked live.
    pub fn measure_text(&self, text: &str, font_size: f32) -> Result<f32> {
        let key = self.resolver.effective_key(&self.registry)?;
        let record = self
            .registry
            .lookup(&key)
            .expect("effective key is registered");
        Ok(record.metrics.text_width_points(text, font_size))
    }

    /// Freeze the open page
    ///
    /// # Panics
    /// If no page is open.
    pub fn finalize_page(&mut self) {
        let page = self
            .open_page
            .take()
            .expect("finalize_page called with no open page");
        self.usage.finalize_page(page);
        self.resolver.reset();
    }

    /// Finalize the build: bind every page's resource table and sweep the
    /// registry down to the typefaces drawn anywhere in the document
    pub fn finish(mut self) -> DocumentFonts {
        if self.open_page.is_some() {
            self.finalize_page();
        }

        let binder = ResourceBinder::new(&self.registry, &self.usage);
        let pages = (1..=self.page_count)
            .map(|page| PageFonts {
                page,
                resources: binder.page_resources(page),
            })
            .collect();

        let fonts = sweep(&self.registry, self.usage.document_live_set());

        DocumentFonts { pages, fonts }
    }
}

impl Default for BuildSession {
    fn default() -> Self {
        Self::new()
    }
}
