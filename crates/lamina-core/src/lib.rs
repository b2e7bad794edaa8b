//! Lamina Core - Overlay Selection Language
//!
//! Parses the line-oriented overlay selection language into ordered
//! [`OverlaySpec`] lists and filters inline overlay tags out of free text.
//!
//! # Selection Language
//!
//! ```text
//! [<lora:]name[:strength_model[:strength_encoder]][>]  # comment
//! ```
//!
//! One overlay per line. Blank lines and comment-only lines contribute
//! nothing. Names may be short aliases (resolved through a caller-supplied
//! table) or fully-qualified identifiers.

pub mod error;
pub mod extract;
pub mod parser;
pub mod spec;

pub use error::ParseError;
pub use extract::{extract_tags, Extraction};
pub use parser::{parse_selection, parse_selection_with, DEFAULT_STRENGTH, WEIGHT_SEPARATOR};
pub use spec::{OverlayResource, OverlaySpec};
