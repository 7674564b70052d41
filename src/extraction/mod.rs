//! Source extraction module
//!
//! This module locates an article's sources box and turns each entry into
//! a citation: body text paired with its link or a placeholder.

pub mod config;
pub mod dom;
pub mod links;
pub mod sources;

pub use config::{SourceExtractorConfig, SourceExtractorConfigBuilder, DEFAULT_PLACEHOLDER};
pub use dom::SourceNode;
pub use links::LinkType;
pub use sources::{extract_sources, ArticleSources, SourceCitation, SourceExtractor};
