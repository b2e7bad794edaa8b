//! Selection tracking and differential resource reconciliation
//!
//! A [`SelectionTracker`] owns the current overlay selection. Re-parsing
//! changed text replaces the selection, but loaded payloads are carried
//! over by name so that edits never force a reload of an overlay that is
//! still selected.

use crate::error::PipelineError;
use lamina_core::{extract_tags, parse_selection, OverlaySpec};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, trace};

/// Tracks the current overlay selection across re-parses
///
/// One tracker per logical pipeline instance. `reconcile` takes `&mut
/// self`, so serialized access is a compile-time property.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    current: Vec<OverlaySpec>,
}

impl SelectionTracker {
    /// Create a tracker with an empty selection
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The current reconciled selection
    pub fn selection(&self) -> &[OverlaySpec] {
        &self.current
    }

    /// Mutable view of the selection, used by the application fold to park
    /// lazily loaded payloads
    pub fn selection_mut(&mut self) -> &mut [OverlaySpec] {
        &mut self.current
    }

    /// Re-parse `text` and reconcile it against the current selection
    ///
    /// An unchanged selection is returned as-is, every cached payload left
    /// in place. A changed one replaces the current list after moving each
    /// still-selected payload, matched by name, into its new entry. Weight
    /// edits keep their payload; only the name is the transfer key.
    ///
    /// Validation is eager: unknown names fail the call before any state
    /// is committed, so the previous selection stays intact and usable.
    pub fn reconcile(
        &mut self,
        text: &str,
        available: &[String],
    ) -> Result<&[OverlaySpec], PipelineError> {
        let names = short_name_table(available);
        let mut new_specs = parse_selection(text, &names)?;

        let known: HashSet<&str> = available.iter().map(String::as_str).collect();
        let unknown: Vec<String> = new_specs
            .iter()
            .filter(|spec| !known.contains(spec.name.as_str()))
            .map(|spec| spec.name.clone())
            .collect();
        if !unknown.is_empty() {
            return Err(PipelineError::UnknownOverlays(unknown));
        }

        if new_specs == self.current {
            trace!(
                specs = self.current.len(),
                "selection unchanged, keeping cached payloads in place"
            );
            return Ok(&self.current);
        }

        // Index the outgoing list by name, last entry winning, and move
        // each payload into the first incoming entry that wants it.
        let mut old_by_name: HashMap<String, usize> = HashMap::new();
        for (idx, spec) in self.current.iter().enumerate() {
            old_by_name.insert(spec.name.clone(), idx);
        }

        let mut transferred = 0usize;
        for spec in &mut new_specs {
            if let Some(&idx) = old_by_name.get(spec.name.as_str()) {
                // take_resource clears the source slot, so a payload moves
                // to exactly one incoming entry
                if let Some(resource) = self.current[idx].take_resource() {
                    spec.set_resource(resource);
                    transferred += 1;
                }
            }
        }

        debug!(
            specs = new_specs.len(),
            transferred, "selection changed, payloads transferred by name"
        );

        self.current = new_specs;
        Ok(&self.current)
    }
}

/// Map each identifier's file stem to the full identifier
///
/// Rebuilt on every reconciliation; the registry can change between calls.
/// Later entries win on stem collisions.
fn short_name_table(available: &[String]) -> HashMap<String, String> {
    let mut table = HashMap::new();
    for id in available {
        if let Some(stem) = Path::new(id).file_stem().and_then(|s| s.to_str()) {
            table.insert(stem.to_string(), id.clone());
        }
    }
    table
}

/// A selection pulled out of free-form prompt text
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSelection {
    /// Prompt text with the overlay tags removed
    pub filtered_text: String,
    /// The extracted tag block, one tag per line
    pub tags: String,
    /// Parsed specs for the extracted tags, short names resolved
    ///
    /// Unknown names pass through literally; they fail later, when the
    /// specs reach [`SelectionTracker::reconcile`] or a load.
    pub specs: Vec<OverlaySpec>,
}

/// Split overlay tags out of `text` and resolve them against `available`
pub fn extract_selection(
    text: &str,
    available: &[String],
) -> Result<ExtractedSelection, PipelineError> {
    let extraction = extract_tags(text);
    let names = short_name_table(available);
    let specs = parse_selection(&extraction.tags, &names)?;

    Ok(ExtractedSelection {
        filtered_text: extraction.filtered_text,
        tags: extraction.tags,
        specs,
    })
}
