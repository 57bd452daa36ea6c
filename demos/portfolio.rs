//! Full portfolio page demo.
//!
//! Runs the complete interaction layer: typewriter hero line, pointer
//! trail, theme cycling, scrollable sections with the stats counters, and
//! the copy action.
//!
//! ```bash
//! cargo run --example portfolio
//!
//! # With reduced motion:
//! FOLIO_REDUCE_MOTION=1 cargo run --example portfolio
//! ```

use folio_tui::pipeline::{AppConfig, mount, run};
use folio_tui::{PhraseList, Section, Timings};

fn main() -> std::io::Result<()> {
    // Phrases arrive as JSON, exactly as a host page would attach them.
    // Malformed input would silently fall back to the default list.
    let phrases = PhraseList::from_json(Some(
        r#"["Systems Programmer.", "Terminal Enthusiast.", "Rustacean."]"#,
    ));

    let config = AppConfig {
        phrases,
        timings: Timings::default(),
        sections: vec![
            Section::new("home", 0, 20),
            Section::new("stats", 20, 10),
            Section::new("projects", 30, 30),
            Section::new("contact", 60, 20),
        ],
        stats_section: "stats".to_string(),
        stats: vec![
            ("crates".to_string(), 12),
            ("commits".to_string(), 3200),
            ("stars".to_string(), 480),
        ],
        code_snippet: concat!(
            "fn greet(name: &str) -> String {\n",
            "    format!(\"Hello, {name}!\")\n",
            "}\n",
        )
        .to_string(),
    };

    let mut handle = mount(config)?;
    run(&mut handle)?;
    handle.unmount();
    Ok(())
}
