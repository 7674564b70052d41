//! Extractor configuration
//!
//! Defaults target the Politifact-style sources box: paragraphs inside
//! `.m-superbox__content`, each optionally carrying one `<a href>`.

use crate::error::ExtractionError;
use serde::{Deserialize, Serialize};

/// Class of the container that lists an article's sources
pub const DEFAULT_BLOCK_CLASS: &str = "m-superbox__content";

/// Sentinel used when a paragraph carries no link
pub const DEFAULT_PLACEHOLDER: &str = "No link";

/// Configuration for [`SourceExtractor`](super::SourceExtractor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceExtractorConfig {
    /// Class identifying the source block (default: `m-superbox__content`)
    pub block_class: String,
    /// Tag of one citation entry (default: `p`)
    pub paragraph_tag: String,
    /// Tag of the anchor inside an entry (default: `a`)
    pub link_tag: String,
    /// Attribute holding the link target (default: `href`)
    pub link_attribute: String,
    /// Value reported for entries without a link (default: `No link`)
    pub placeholder: String,
    /// Collapse whitespace runs and trim body text (default: false)
    pub normalize_whitespace: bool,
    /// Drop entries whose text is blank (default: false)
    pub skip_empty: bool,
}

impl Default for SourceExtractorConfig {
    fn default() -> Self {
        Self {
            block_class: DEFAULT_BLOCK_CLASS.to_string(),
            paragraph_tag: "p".to_string(),
            link_tag: "a".to_string(),
            link_attribute: "href".to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            normalize_whitespace: false,
            skip_empty: false,
        }
    }
}

impl SourceExtractorConfig {
    /// Create a new config builder
    pub fn builder() -> SourceExtractorConfigBuilder {
        SourceExtractorConfigBuilder::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs with empty names or placeholder, or a block class
    /// that is not a single CSS class name
    pub fn validate(&self) -> Result<(), ExtractionError> {
        let fields = [
            ("block_class", &self.block_class),
            ("paragraph_tag", &self.paragraph_tag),
            ("link_tag", &self.link_tag),
            ("link_attribute", &self.link_attribute),
            ("placeholder", &self.placeholder),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ExtractionError::InvalidConfig(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        if !is_class_name(&self.block_class) {
            return Err(ExtractionError::InvalidConfig(format!(
                "block_class must be a single class name, got {:?}",
                self.block_class
            )));
        }

        Ok(())
    }

    /// CSS selector for the source block
    pub(crate) fn block_selector(&self) -> String {
        format!(".{}", self.block_class)
    }
}

// Whitespace, `.`, `#`, `>` and the like would turn `.{class}` into a
// compound or descendant selector that matches some other element.
fn is_class_name(class: &str) -> bool {
    !class.starts_with(|c: char| c.is_ascii_digit())
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

/// Builder for SourceExtractorConfig
#[derive(Default)]
pub struct SourceExtractorConfigBuilder {
    config: SourceExtractorConfig,
}

impl SourceExtractorConfigBuilder {
    /// Set the source block class
    pub fn block_class<S: Into<String>>(mut self, class: S) -> Self {
        self.config.block_class = class.into();
        self
    }

    /// Set the citation entry tag
    pub fn paragraph_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.config.paragraph_tag = tag.into();
        self
    }

    /// Set the anchor tag and the attribute read from it
    pub fn link<T: Into<String>, A: Into<String>>(mut self, tag: T, attribute: A) -> Self {
        self.config.link_tag = tag.into();
        self.config.link_attribute = attribute.into();
        self
    }

    /// Set the missing-link placeholder
    pub fn placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Enable/disable whitespace normalization of body text
    pub fn normalize_whitespace(mut self, normalize: bool) -> Self {
        self.config.normalize_whitespace = normalize;
        self
    }

    /// Enable/disable dropping blank entries
    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.config.skip_empty = skip;
        self
    }

    /// Build the config
    pub fn build(self) -> SourceExtractorConfig {
        self.config
    }
}
