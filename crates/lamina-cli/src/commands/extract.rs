//! Tag extraction command

use lamina_pipeline::{extract_selection, DirectoryRegistry, OverlaySource};
use std::path::Path;

pub fn run(registry: &DirectoryRegistry, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let available = registry.available();

    let selection = extract_selection(&text, &available)?;

    println!("Filtered text:");
    println!("{}", selection.filtered_text.trim());
    println!();

    if selection.specs.is_empty() {
        println!("No overlay tags found.");
        return Ok(());
    }

    println!("Extracted tags:");
    for line in selection.tags.lines() {
        println!("  {}", line);
    }

    println!();
    println!("Overlay stack:");
    for spec in &selection.specs {
        println!(
            "  ({}, {}, {})",
            spec.name, spec.strength_model, spec.strength_encoder
        );
    }

    Ok(())
}
