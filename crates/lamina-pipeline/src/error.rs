//! Pipeline error types

use lamina_core::ParseError;
use thiserror::Error;

/// Errors from reconciliation and application
///
/// All of these abort the current call; none are retried internally.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Selection text did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Selected overlays are missing from the current registry
    #[error("unknown overlays: {}", .0.join(", "))]
    UnknownOverlays(Vec<String>),

    /// A resource could not be materialized
    #[error("failed to load overlay '{name}'")]
    Load {
        name: String,
        #[source]
        source: LoadError,
    },

    /// The host applier rejected an overlay
    #[error("failed to apply overlay '{name}'")]
    Apply {
        name: String,
        #[source]
        source: ApplyError,
    },
}

/// Errors from an [`OverlaySource`](crate::source::OverlaySource)
#[derive(Debug, Error)]
pub enum LoadError {
    /// The identifier does not resolve to a payload
    #[error("no payload found for '{0}'")]
    NotFound(String),

    /// The payload exists but could not be read
    #[error("payload unreadable: {0}")]
    Io(#[from] std::io::Error),

    /// The payload was read but could not be deserialized
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Errors from an [`OverlayApplier`](crate::source::OverlayApplier)
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The overlay could not be composed with the pair
    #[error("application failed: {0}")]
    Failed(String),

    /// The payload does not fit the target model architecture
    #[error("incompatible payload: {0}")]
    IncompatiblePayload(String),
}
