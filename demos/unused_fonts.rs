//! Shows that registered-but-undrawn typefaces cost nothing in the output

use doc_fonts::{BuildSession, Emphasis};
use font_core::Style;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut build = BuildSession::new();

    // Register a full family up front; only drawn variants will survive
    build.register_builtin("roboto", Style::Regular, "Helvetica")?; // F1
    build.register_builtin("roboto", Style::Bold, "Helvetica-Bold")?; // F2
    build.register_builtin("roboto", Style::Italic, "Helvetica-Oblique")?; // F3
    build.register_builtin("mono", Style::Regular, "Courier")?; // F4, never drawn

    // Page 1: a single bold run
    build.begin_page();
    build.select("roboto", Style::Regular)?;
    build.push_emphasis(Emphasis::Bold);
    build.render_run()?;
    build.pop_emphasis(Emphasis::Bold);

    // Page 2: a single italic run
    build.begin_page();
    build.select("roboto", Style::Regular)?;
    build.push_emphasis(Emphasis::Italic);
    build.render_run()?;
    build.pop_emphasis(Emphasis::Italic);

    // Page 3: regular, bold, and italic runs
    build.begin_page();
    build.select("roboto", Style::Regular)?;
    build.render_run()?;
    build.push_emphasis(Emphasis::Bold);
    build.render_run()?;
    build.pop_emphasis(Emphasis::Bold);
    build.push_emphasis(Emphasis::Italic);
    build.render_run()?;
    build.pop_emphasis(Emphasis::Italic);

    let fonts = build.finish();

    for page in fonts.pages() {
        let names: Vec<&str> = page.resources().iter().map(|r| r.name.as_str()).collect();
        println!("page {}: {}", page.page(), names.join(" "));
    }
    println!(
        "document objects: {}",
        fonts
            .fonts()
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(())
}
