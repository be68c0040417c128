//! Per-page resource tables
//!
//! At page finalization the binder turns a page's frozen live set into the
//! minimal resource table the serializer embeds into that page: one entry
//! per drawn typeface, named "F{id}", in ascending id order so repeated
//! builds emit byte-identical tables.

use crate::UsageTracker;
use font_core::{FontId, FontRegistry};
use lopdf::{Dictionary, Object};

/// Deterministic resource name for a typeface id ("F1", "F2", ...)
///
/// The id is the registration id, so the name is stable across builds and
/// never renumbered by the sweep.
pub fn resource_name(id: FontId) -> String {
    format!("F{}", id.get())
}

/// One entry of a page's font resource table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResource {
    pub name: String,
    pub id: FontId,
}

/// Render a resource table as a lopdf Font dictionary
///
/// Entries reference font objects by their stable id; the document
/// serializer owns final object numbering and may remap the references
/// when it writes the container.
pub fn font_dictionary(resources: &[PageResource]) -> Dictionary {
    let mut dict = Dictionary::new();
    for resource in resources {
        dict.set(
            resource.name.as_bytes(),
            Object::Reference((resource.id.get(), 0)),
        );
    }
    dict
}

/// Builds minimal per-page font resource tables from frozen live sets
pub struct ResourceBinder<'a> {
    registry: &'a FontRegistry,
    usage: &'a UsageTracker,
}

impl<'a> ResourceBinder<'a> {
    pub fn new(registry: &'a FontRegistry, usage: &'a UsageTracker) -> Self {
        Self { registry, usage }
    }

    /// The page's resource table: exactly the ids marked used on that page,
    /// ascending
    ///
    /// # Panics
    /// If the page was never begun or is not finalized yet; the table of a
    /// still-open page is not meaningful.
    pub fn page_resources(&self, page: usize) -> Vec<PageResource> {
        let usage = self
            .usage
            .page(page)
            .unwrap_or_else(|| panic!("resources requested for page {page} that was never begun"));
        assert!(
            usage.is_finalized(),
            "resources requested for page {page} before finalize_page"
        );

        usage
            .live_ids()
            .iter()
            .map(|&id| {
                debug_assert!(
                    self.registry.get(id).is_some(),
                    "live id {} missing from registry",
                    id.get()
                );
                PageResource {
                    name: resource_name(id),
                    id,
                }
            })
            .collect()
    }

    /// The page's resource table as a lopdf Font dictionary
    pub fn page_font_dictionary(&self, page: usize) -> Dictionary {
        font_dictionary(&self.page_resources(page))
    }
}
