//! Embedding sweep
//!
//! The finalize-time pass over the registry: every record whose id is in
//! the document live set becomes a serializable font object. Every other
//! record is skipped outright, with no object written and no program bytes
//! copied. Sweep order is registration order, so object numbering is
//! deterministic across repeated builds.

use crate::resources::resource_name;
use font_core::{FontId, FontRecord, FontRegistry, FontSource};
use lopdf::{Dictionary, Object, Stream};
use std::collections::BTreeSet;

/// Serializable pieces of one embedded (or builtin) font
///
/// For embedded sources `font_file` holds the opaque program bytes and the
/// font dictionary's descriptor carries a placeholder `FontFile2`
/// reference; the document serializer writes the stream, then replaces the
/// placeholder with the real reference, the same fix-up it applies to every
/// indirect object it assembles.
pub struct FontObject {
    pub font_dict: Dictionary,
    pub font_file: Option<Stream>,
}

/// One live typeface ready for the serializer
pub struct SweptFont {
    pub id: FontId,
    /// Stable object name, "F{id}"
    pub name: String,
    pub object: FontObject,
}

/// The pure liveness filter: live records in ascending id order
///
/// Skipped records are never touched, so an unused registration costs
/// nothing in the output beyond the registry entry itself.
pub fn sweep_records<'a>(
    registry: &'a FontRegistry,
    live: &BTreeSet<FontId>,
) -> Vec<&'a FontRecord> {
    registry.all().filter(|r| live.contains(&r.id)).collect()
}

/// Build the serializable object for a single record
pub fn font_object(record: &FontRecord) -> FontObject {
    match &record.source {
        FontSource::Embedded { data } => {
            let name = record.key.variant_name();
            let font_file = Stream::new(
                Dictionary::from_iter(vec![("Length1", (data.len() as i32).into())]),
                data.clone(),
            );

            let descriptor = Dictionary::from_iter(vec![
                ("Type", "FontDescriptor".into()),
                ("FontName", Object::Name(name.clone().into_bytes())),
                ("Ascent", i32::from(record.metrics.ascent()).into()),
                ("Descent", i32::from(record.metrics.descent()).into()),
                // Placeholder, replaced by the serializer once the stream
                // has an object number
                ("FontFile2", Object::Reference((0, 0))),
            ]);

            let font_dict = Dictionary::from_iter(vec![
                ("Type", "Font".into()),
                ("Subtype", "TrueType".into()),
                ("BaseFont", Object::Name(name.into_bytes())),
                ("FontDescriptor", descriptor.into()),
            ]);

            FontObject {
                font_dict,
                font_file: Some(font_file),
            }
        }
        FontSource::Builtin { base_font } => {
            let font_dict = Dictionary::from_iter(vec![
                ("Type", "Font".into()),
                ("Subtype", "Type1".into()),
                ("BaseFont", Object::Name(base_font.clone().into_bytes())),
            ]);

            FontObject {
                font_dict,
                font_file: None,
            }
        }
    }
}

/// Sweep the registry against the document live set
///
/// Returns one [`SweptFont`] per live record, in registration order.
pub fn sweep(registry: &FontRegistry, live: &BTreeSet<FontId>) -> Vec<SweptFont> {
    sweep_records(registry, live)
        .into_iter()
        .map(|record| SweptFont {
            id: record.id,
            name: resource_name(record.id),
            object: font_object(record),
        })
        .collect()
}
