//! Catalog demo: write a small config directory, load it, print it.
//!
//! Run with: cargo run -p dspchain-config --example catalog_demo

use dspchain_config::{
    CatalogPaths, GrammarVariant, PresetCatalog, PresetRecord, StageNode, parse,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = std::env::temp_dir().join("dspchain-catalog-demo");
    let paths = CatalogPaths::in_config_dir(&root);

    // --- Writing presets ---
    println!("=== Writing presets to {} ===\n", root.display());

    let mut current = PresetRecord::new(
        "Custom",
        vec![
            StageNode::new("eq").with_enabled(true).with_items(["100", "-3.0"]),
            StageNode::new("comp").with_enabled(false).with_item("0.5"),
        ],
    );
    current.is_current = true;
    current.save(&paths.current_config, GrammarVariant::WithEnabledFlag)?;

    let lead = PresetRecord::new(
        "lead",
        vec![StageNode::new("reverb").with_items(["0.8", "0.3"])],
    );
    lead.save(paths.preset_file("lead"), GrammarVariant::Bare)?;

    println!("{}", current.to_text(GrammarVariant::WithEnabledFlag));

    // --- Loading the catalog ---
    println!("=== Catalog ===\n");

    let catalog = PresetCatalog::open(paths)?;
    for preset in catalog.iter() {
        let marker = if preset.is_current { " (current)" } else { "" };
        println!("{}{}: {:?}", preset.name, marker, preset.stage_types());
    }

    // --- Diagnostics ---
    println!("\n=== Parse errors ===\n");

    for text in ["comp {\n0.5\n}", "eq 1 {\n1.0\n"] {
        match parse(text, GrammarVariant::WithEnabledFlag) {
            Ok(nodes) => println!("{text:?}: {} nodes", nodes.len()),
            Err(e) => println!("{text:?}: {e}"),
        }
    }

    std::fs::remove_dir_all(&root)?;
    Ok(())
}
