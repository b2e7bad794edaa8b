//! Lamina Pipeline - Selection Tracking and Overlay Application
//!
//! This crate holds the stateful half of the system: reconciling re-parsed
//! selection text against the previous selection so that already-loaded
//! overlay payloads are reused, and folding the reconciled selection over a
//! base model/encoder pair.
//!
//! # Data Flow
//!
//! ```text
//! selection text → parser → reconcile → [spec, spec, ...] → fold → (model, encoder)
//!                              ↑ resources transferred by name
//! ```
//!
//! The tensor math of applying an overlay and the physical overlay store
//! are host concerns, reached through the [`OverlayApplier`] and
//! [`OverlaySource`] traits. A filesystem-backed source is shipped as
//! [`DirectoryRegistry`].

pub mod apply;
pub mod error;
pub mod registry;
pub mod source;
pub mod tracker;

pub use apply::apply_selection;
pub use error::{ApplyError, LoadError, PipelineError};
pub use registry::DirectoryRegistry;
pub use source::{OverlayApplier, OverlaySource};
pub use tracker::{extract_selection, ExtractedSelection, SelectionTracker};
