//! Selection resolution command

use crate::OutputFormat;
use lamina_pipeline::{DirectoryRegistry, OverlaySource, SelectionTracker};
use std::path::Path;

pub fn run(
    registry: &DirectoryRegistry,
    input: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let available = registry.available();

    let mut tracker = SelectionTracker::new();
    let specs = tracker.reconcile(&text, &available)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(specs)?);
        }
        OutputFormat::Text => {
            if specs.is_empty() {
                println!("Selection is empty.");
                return Ok(());
            }

            println!("{} overlay(s) selected:", specs.len());
            for spec in specs {
                println!(
                    "  {}  model={}  encoder={}",
                    spec.name, spec.strength_model, spec.strength_encoder
                );
            }
        }
    }

    Ok(())
}
