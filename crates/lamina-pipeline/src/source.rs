//! Host collaborator traits
//!
//! The physical overlay store and the tensor math of composing an overlay
//! with a model live on the host side; these traits are the seam the
//! pipeline talks through.

use crate::error::{ApplyError, LoadError};
use lamina_core::OverlayResource;

/// Enumerates and materializes overlay payloads
pub trait OverlaySource {
    /// Identifiers currently loadable from this source
    ///
    /// Called on every reconciliation; the set may change between calls.
    fn available(&self) -> Vec<String>;

    /// Materialize the payload behind `name`
    fn load(&self, name: &str) -> Result<OverlayResource, LoadError>;
}

/// Composes one overlay into a model/encoder pair
///
/// Must behave as a pure transformation: it consumes the pair and returns
/// a new one, leaving the resource untouched.
pub trait OverlayApplier {
    type Model;
    type Encoder;

    fn apply(
        &self,
        model: Self::Model,
        encoder: Self::Encoder,
        resource: &OverlayResource,
        strength_model: f32,
        strength_encoder: f32,
    ) -> Result<(Self::Model, Self::Encoder), ApplyError>;
}
