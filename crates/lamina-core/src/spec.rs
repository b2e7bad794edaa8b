//! Overlay specifications and materialized resources

use serde::Serialize;
use std::path::PathBuf;

/// A materialized overlay payload
///
/// Expensive to construct, so it is cached by identifier and moved between
/// [`OverlaySpec`]s during reconciliation rather than reloaded.
#[derive(Debug, Clone)]
pub struct OverlayResource {
    /// Path the payload was read from
    pub source: PathBuf,
    /// Raw payload bytes
    pub data: Vec<u8>,
}

impl OverlayResource {
    /// Create a resource from a source path and its payload
    pub fn new(source: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }

    /// Payload size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

/// One entry of an overlay selection
///
/// Identity is the name plus the two strengths; the resource slot is cache
/// state and is deliberately excluded from equality.
#[derive(Debug, Clone, Serialize)]
pub struct OverlaySpec {
    /// Resolved overlay identifier
    pub name: String,
    /// Strength applied to the model side
    pub strength_model: f32,
    /// Strength applied to the encoder side
    pub strength_encoder: f32,
    /// Cached payload, populated lazily on first application
    #[serde(skip)]
    resource: Option<OverlayResource>,
}

impl OverlaySpec {
    /// Create a spec with an empty resource slot
    pub fn new(name: impl Into<String>, strength_model: f32, strength_encoder: f32) -> Self {
        Self {
            name: name.into(),
            strength_model,
            strength_encoder,
            resource: None,
        }
    }

    /// Whether both strengths are zero
    ///
    /// No-op entries are skipped during application and never trigger a
    /// resource load.
    pub fn is_noop(&self) -> bool {
        self.strength_model == 0.0 && self.strength_encoder == 0.0
    }

    /// Whether the resource slot is populated
    pub fn is_loaded(&self) -> bool {
        self.resource.is_some()
    }

    /// The cached resource, if any
    pub fn resource(&self) -> Option<&OverlayResource> {
        self.resource.as_ref()
    }

    /// Park a loaded resource in this spec
    pub fn set_resource(&mut self, resource: OverlayResource) {
        self.resource = Some(resource);
    }

    /// Move the cached resource out, leaving the slot empty
    ///
    /// The only way a resource changes owner: the source slot is cleared in
    /// the same step, so a payload is never reachable from two specs.
    pub fn take_resource(&mut self) -> Option<OverlayResource> {
        self.resource.take()
    }

    /// Return the cached resource, loading it through `load` if the slot
    /// is empty
    pub fn ensure_resource<E>(
        &mut self,
        load: impl FnOnce(&str) -> Result<OverlayResource, E>,
    ) -> Result<&OverlayResource, E> {
        let resource = match self.resource.take() {
            Some(resource) => resource,
            None => load(&self.name)?,
        };
        Ok(self.resource.insert(resource))
    }
}

impl PartialEq for OverlaySpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.strength_model == other.strength_model
            && self.strength_encoder == other.strength_encoder
    }
}
