//! Overlay application fold

use crate::error::PipelineError;
use crate::source::{OverlayApplier, OverlaySource};
use lamina_core::OverlaySpec;
use tracing::{debug, trace};

/// Fold the selection over a base model/encoder pair, left to right
///
/// No-op entries (both strengths zero) pass the accumulator through
/// without touching their resource slot. Everything else is materialized
/// through `source` on first use and the payload parked in the spec, so a
/// later fold over the same specs reuses it.
///
/// A failed load or apply aborts the fold; payloads cached before the
/// failure stay cached.
pub fn apply_selection<S, A>(
    specs: &mut [OverlaySpec],
    model: A::Model,
    encoder: A::Encoder,
    source: &S,
    applier: &A,
) -> Result<(A::Model, A::Encoder), PipelineError>
where
    S: OverlaySource,
    A: OverlayApplier,
{
    let (mut model, mut encoder) = (model, encoder);

    for spec in specs.iter_mut() {
        if spec.is_noop() {
            trace!(overlay = %spec.name, "skipping no-op overlay");
            continue;
        }

        let name = spec.name.clone();
        let (strength_model, strength_encoder) = (spec.strength_model, spec.strength_encoder);

        if !spec.is_loaded() {
            debug!(overlay = %name, "materializing overlay payload");
        }
        let resource = spec
            .ensure_resource(|id| source.load(id))
            .map_err(|source| PipelineError::Load {
                name: name.clone(),
                source,
            })?;

        (model, encoder) = applier
            .apply(model, encoder, resource, strength_model, strength_encoder)
            .map_err(|source| PipelineError::Apply {
                name: name.clone(),
                source,
            })?;
    }

    Ok((model, encoder))
}
