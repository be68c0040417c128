//! Integration tests for doc-fonts
//!
//! These tests drive whole document builds through the public API and
//! check the per-page resource tables and the swept object set.

use doc_fonts::{BuildError, BuildSession, Emphasis};
use font_core::{FontError, FontMetrics, FontSource, Style, TypefaceKey};
use pretty_assertions::assert_eq;

fn embedded(fill: u8) -> FontSource {
    FontSource::Embedded {
        data: vec![fill; 48],
    }
}

/// A session with an embedded family: regular (F1), bold (F2), italic (F3)
fn session_with_roboto() -> BuildSession {
    let mut build = BuildSession::new();
    for (style, fill) in [
        (Style::Regular, 0x01),
        (Style::Bold, 0x02),
        (Style::Italic, 0x03),
    ] {
        build
            .register(
                TypefaceKey::new("Roboto", style),
                embedded(fill),
                FontMetrics::default(),
            )
            .expect("register variant");
    }
    build
}

fn page_ids(fonts: &doc_fonts::DocumentFonts, page: usize) -> Vec<u32> {
    fonts
        .page(page)
        .expect("page exists")
        .resources()
        .iter()
        .map(|r| r.id.get())
        .collect()
}

fn swept_ids(fonts: &doc_fonts::DocumentFonts) -> Vec<u32> {
    fonts.fonts().iter().map(|f| f.id.get()).collect()
}

#[test]
fn test_unused_variants_not_included_per_page() {
    // Page 1 draws only a bold run, page 2 only an italic run, page 3 all
    // three variants
    let mut build = session_with_roboto();

    build.begin_page();
    build.select("Roboto", Style::Regular).expect("select");
    build.push_emphasis(Emphasis::Bold);
    build.render_run().expect("bold run");
    build.pop_emphasis(Emphasis::Bold);

    build.begin_page();
    build.select("Roboto", Style::Regular).expect("select");
    build.push_emphasis(Emphasis::Italic);
    build.render_run().expect("italic run");
    build.pop_emphasis(Emphasis::Italic);

    build.begin_page();
    build.select("Roboto", Style::Regular).expect("select");
    build.render_run().expect("regular run");
    build.push_emphasis(Emphasis::Bold);
    build.render_run().expect("bold run");
    build.pop_emphasis(Emphasis::Bold);
    build.push_emphasis(Emphasis::Italic);
    build.render_run().expect("italic run");
    build.pop_emphasis(Emphasis::Italic);

    let fonts = build.finish();
    assert_eq!(fonts.page_count(), 3);
    assert_eq!(page_ids(&fonts, 1), vec![2]);
    assert_eq!(page_ids(&fonts, 2), vec![3]);
    assert_eq!(page_ids(&fonts, 3), vec![1, 2, 3]);
    assert_eq!(swept_ids(&fonts), vec![1, 2, 3]);
}

#[test]
fn test_unused_registered_typeface_dropped_entirely() {
    let mut build = BuildSession::new();
    build
        .register(
            TypefaceKey::new("A", Style::Regular),
            embedded(0xAA),
            FontMetrics::default(),
        )
        .expect("register A");
    build
        .register(
            TypefaceKey::new("B", Style::Regular),
            embedded(0xBB),
            FontMetrics::default(),
        )
        .expect("register B");

    build.begin_page();
    build.select("A", Style::Regular).expect("select A");
    build.render_run().expect("run with A");

    let fonts = build.finish();
    assert_eq!(page_ids(&fonts, 1), vec![1]);
    assert_eq!(swept_ids(&fonts), vec![1]);

    // B's program bytes were not copied into any output object
    for swept in fonts.fonts() {
        if let Some(stream) = &swept.object.font_file {
            assert_eq!(stream.content, vec![0xAA; 48]);
        }
    }
}

#[test]
fn test_selection_without_render_is_a_noop() {
    let mut build = session_with_roboto();
    build.begin_page();
    build.select("Roboto", Style::Regular).expect("select");

    let fonts = build.finish();
    assert!(fonts.page(1).unwrap().resources().is_empty());
    assert!(fonts.fonts().is_empty());
}

#[test]
fn test_id_stability_across_reregistration() {
    let mut build = BuildSession::new();
    let first = build
        .register(
            TypefaceKey::new("A", Style::Regular),
            embedded(0xAA),
            FontMetrics::default(),
        )
        .expect("first registration");
    build
        .register(
            TypefaceKey::new("B", Style::Regular),
            embedded(0xBB),
            FontMetrics::default(),
        )
        .expect("register B");
    let again = build
        .register(
            TypefaceKey::new("A", Style::Regular),
            embedded(0xAA),
            FontMetrics::default(),
        )
        .expect("re-registration");

    assert_eq!(first, again);
    assert_eq!(first.get(), 1);
    assert_eq!(build.registry().len(), 2);
}

#[test]
fn test_conflicting_reregistration_rejected() {
    let mut build = BuildSession::new();
    build
        .register(
            TypefaceKey::new("A", Style::Regular),
            embedded(0xAA),
            FontMetrics::default(),
        )
        .expect("first registration");

    let result = build.register(
        TypefaceKey::new("A", Style::Regular),
        embedded(0xCC),
        FontMetrics::default(),
    );
    assert!(matches!(
        result,
        Err(BuildError::Font(FontError::SourceConflict(_)))
    ));
}

#[test]
fn test_selection_does_not_cross_pages() {
    let mut build = session_with_roboto();

    build.begin_page();
    build.select("Roboto", Style::Bold).expect("select bold");

    // The new page starts with nothing selected
    build.begin_page();
    let result = build.render_run();
    assert!(matches!(result, Err(BuildError::NoTypefaceSelected)));

    let fonts = build.finish();
    assert!(fonts.page(1).unwrap().resources().is_empty());
    assert!(fonts.page(2).unwrap().resources().is_empty());
}

#[test]
fn test_select_only_page_then_draw_on_next() {
    let mut build = BuildSession::new();
    build
        .register(
            TypefaceKey::new("A", Style::Regular),
            embedded(0xAA),
            FontMetrics::default(),
        )
        .expect("register A");
    let b = build
        .register(
            TypefaceKey::new("B", Style::Regular),
            embedded(0xBB),
            FontMetrics::default(),
        )
        .expect("register B");

    build.begin_page();
    build.select("A", Style::Regular).expect("select A");

    build.begin_page();
    build.select("B", Style::Regular).expect("select B");
    build.render_run().expect("run with B");

    let fonts = build.finish();
    assert!(fonts.page(1).unwrap().resources().is_empty());
    assert_eq!(page_ids(&fonts, 2), vec![b.get()]);
}

#[test]
fn test_unregistered_emphasis_combination_marks_nothing() {
    // No bold-italic variant registered
    let mut build = session_with_roboto();

    build.begin_page();
    build.select("Roboto", Style::Regular).expect("select");
    build.push_emphasis(Emphasis::Bold);
    build.push_emphasis(Emphasis::Italic);

    match build.render_run() {
        Err(BuildError::StyleVariantNotRegistered { family, style }) => {
            assert_eq!(family, "roboto");
            assert_eq!(style, "bold italic");
        }
        other => panic!("expected StyleVariantNotRegistered, got {other:?}"),
    }

    let fonts = build.finish();
    assert!(fonts.page(1).unwrap().resources().is_empty());
    assert!(fonts.fonts().is_empty());
}

#[test]
fn test_select_unregistered_family_fails_at_selection() {
    let mut build = session_with_roboto();
    build.begin_page();

    let result = build.select("nonexistent", Style::Regular);
    assert!(matches!(result, Err(BuildError::TypefaceNotRegistered(_))));
}

#[test]
fn test_family_matching_is_case_insensitive() {
    let mut build = session_with_roboto();
    build.begin_page();
    build.select("ROBOTO", Style::Regular).expect("select");
    let id = build.render_run().expect("run");
    assert_eq!(id.get(), 1);
}

#[test]
fn test_builtin_typeface_embeds_no_program() {
    let mut build = BuildSession::new();
    build
        .register_builtin("ui", Style::Regular, "Helvetica")
        .expect("register builtin");

    build.begin_page();
    build.select("ui", Style::Regular).expect("select");
    build.render_run().expect("run");

    let fonts = build.finish();
    assert_eq!(fonts.fonts().len(), 1);
    assert!(fonts.fonts()[0].object.font_file.is_none());
}

#[test]
fn test_repeated_builds_are_deterministic() {
    let run = || {
        let mut build = session_with_roboto();
        build.begin_page();
        build.select("Roboto", Style::Regular).expect("select");
        build.render_run().expect("run");
        build.push_emphasis(Emphasis::Bold);
        build.render_run().expect("bold run");
        build.finish()
    };

    let first = run();
    let second = run();

    assert_eq!(page_ids(&first, 1), page_ids(&second, 1));
    assert_eq!(swept_ids(&first), swept_ids(&second));

    let names = |fonts: &doc_fonts::DocumentFonts| {
        fonts
            .page(1)
            .unwrap()
            .resources()
            .iter()
            .map(|r| r.name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(names(&first), vec!["F1", "F2"]);
}

#[test]
fn test_running_live_set_during_build() {
    let mut build = session_with_roboto();

    build.begin_page();
    build.select("Roboto", Style::Regular).expect("select");
    build.push_emphasis(Emphasis::Bold);
    build.render_run().expect("bold run");

    // Queryable mid-build; complete once all pages are finalized
    let live: Vec<u32> = build
        .usage()
        .document_live_set()
        .iter()
        .map(|id| id.get())
        .collect();
    assert_eq!(live, vec![2]);
}

#[test]
fn test_drawn_run_resolves_to_selected_variant_id() {
    let mut build = session_with_roboto();
    build.begin_page();
    build.select("Roboto", Style::Italic).expect("select italic");

    let id = build.render_run().expect("run");
    assert_eq!(id.get(), 3);
    assert_eq!(doc_fonts::resource_name(id), "F3");
}
