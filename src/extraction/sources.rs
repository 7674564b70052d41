//! Source citation extraction
//!
//! Pulls the cited sources out of a fact-check article's sources box. Each
//! paragraph of the box becomes one citation: its full text plus the `href`
//! of its first anchor, or the placeholder when there is none.

use super::config::SourceExtractorConfig;
use super::dom::{normalize_whitespace, SourceNode};
use super::links::LinkType;
use crate::error::{ExtractionError, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn, Level};
use url::Url;

/// One cited source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Zero-based index of the paragraph among all paragraphs of the
    /// sources box, blank ones included
    pub position: usize,
    /// Paragraph text, anchor text included
    pub text: String,
    /// Link target; `None` when the placeholder applies
    pub link: Option<String>,
    /// Classification of `link`
    pub link_type: LinkType,
}

impl SourceCitation {
    /// Link target, or `placeholder` when there is none
    pub fn link_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.link.as_deref().unwrap_or(placeholder)
    }
}

/// All citations found in one article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSources {
    /// Citations in document order
    pub citations: Vec<SourceCitation>,
}

impl ArticleSources {
    /// Number of citations
    pub fn len(&self) -> usize {
        self.citations.len()
    }

    /// Whether the sources box had no entries
    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    /// Body texts in document order
    pub fn bodies(&self) -> Vec<String> {
        self.citations.iter().map(|c| c.text.clone()).collect()
    }

    /// Link targets in document order, one per citation
    pub fn links(&self, placeholder: &str) -> Vec<String> {
        self.citations
            .iter()
            .map(|c| c.link_or(placeholder).to_string())
            .collect()
    }

    /// Citations that carry a real link
    pub fn linked(&self) -> impl Iterator<Item = &SourceCitation> {
        self.citations.iter().filter(|c| c.link.is_some())
    }

    /// Split into the parallel `(body_texts, link_targets)` pair
    pub fn into_parallel(self, placeholder: &str) -> (Vec<String>, Vec<String>) {
        self.citations
            .into_iter()
            .map(|c| {
                let link = c.link.unwrap_or_else(|| placeholder.to_string());
                (c.text, link)
            })
            .unzip()
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Extracts cited sources from parsed articles
///
/// Selectors are compiled once at construction, so one extractor can be
/// reused across documents and shared between threads.
#[derive(Debug)]
pub struct SourceExtractor {
    config: SourceExtractorConfig,
    block: Selector,
    paragraph: Selector,
    link: Selector,
    base_url: Option<Url>,
}

impl SourceExtractor {
    /// Create an extractor with the default sources-box layout
    pub fn new() -> Result<Self> {
        Self::with_config(SourceExtractorConfig::default())
    }

    /// Create an extractor from a config
    pub fn with_config(config: SourceExtractorConfig) -> Result<Self> {
        config.validate()?;

        let block = parse_selector(&config.block_selector())?;
        let paragraph = parse_selector(config.paragraph_tag.trim())?;
        let link = parse_selector(config.link_tag.trim())?;

        Ok(Self {
            config,
            block,
            paragraph,
            link,
            base_url: None,
        })
    }

    /// Classify links relative to the article's own URL
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &SourceExtractorConfig {
        &self.config
    }

    /// Extract citations from a parsed document
    #[instrument(skip_all)]
    pub fn extract(&self, document: &Html) -> Result<ArticleSources> {
        self.extract_from_node(&document.root_element())
    }

    /// Parse `html` as a document and extract citations from it
    #[instrument(skip_all, fields(len = html.len()))]
    pub fn extract_from_html(&self, html: &str) -> Result<ArticleSources> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// Extract citations from any element; the sources box is searched
    /// among its descendants
    #[instrument(skip_all, fields(block = %self.config.block_class))]
    pub fn extract_from_node<N: SourceNode>(&self, article: &N) -> Result<ArticleSources> {
        let block = self.find_block(article)?;
        let paragraphs = block.find_all(&self.paragraph);
        debug!("Found {} source paragraphs", paragraphs.len());

        let mut citations = Vec::with_capacity(paragraphs.len());
        for (position, paragraph) in paragraphs.iter().enumerate() {
            let text = if self.config.normalize_whitespace {
                normalize_whitespace(&paragraph.text())
            } else {
                paragraph.text()
            };

            if self.config.skip_empty && text.trim().is_empty() {
                trace!("Skipping blank source paragraph");
                continue;
            }

            let link = paragraph
                .find_first(&self.link)
                .and_then(|anchor| {
                    anchor
                        .attribute(&self.config.link_attribute)
                        .map(str::to_string)
                });
            let link_type = match &link {
                Some(href) => LinkType::classify(href, self.base_url.as_ref()),
                None => LinkType::Missing,
            };
            trace!(?link_type, has_link = link.is_some(), "Source paragraph");

            citations.push(SourceCitation {
                position,
                text,
                link,
                link_type,
            });
        }

        debug!(
            "Extracted {} citations, {} linked",
            citations.len(),
            citations.iter().filter(|c| c.link.is_some()).count()
        );
        Ok(ArticleSources { citations })
    }

    /// Extract the parallel `(body_texts, link_targets)` pair
    pub fn extract_sources<N: SourceNode>(
        &self,
        article: &N,
    ) -> Result<(Vec<String>, Vec<String>)> {
        let sources = self.extract_from_node(article)?;
        Ok(sources.into_parallel(&self.config.placeholder))
    }

    fn find_block<N: SourceNode>(&self, article: &N) -> Result<N> {
        let block = article
            .find_first(&self.block)
            .ok_or_else(|| ExtractionError::ElementNotFound(self.config.block_selector()))?;

        if tracing::enabled!(Level::WARN) {
            let matched = article.count_matching(&self.block);
            if matched > 1 {
                warn!(
                    "{} source blocks matched {}; using the first",
                    matched,
                    self.config.block_selector()
                );
            }
        }
        Ok(block)
    }
}

/// Extract `(body_texts, link_targets)` from a parsed article using the
/// default sources-box layout
///
/// # Example
///
/// ```
/// use scraper::Html;
///
/// let html = Html::parse_document(
///     r#"<div class="m-superbox__content">
///         <p>Text A<a href="http://x">link</a></p>
///         <p>Text B</p>
///     </div>"#,
/// );
/// let (bodies, links) = factcheck_sources::extract_sources(&html)?;
/// assert_eq!(bodies, ["Text Alink", "Text B"]);
/// assert_eq!(links, ["http://x", "No link"]);
/// # Ok::<(), factcheck_sources::Error>(())
/// ```
pub fn extract_sources(article: &Html) -> Result<(Vec<String>, Vec<String>)> {
    SourceExtractor::new()?.extract_sources(&article.root_element())
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {}", css, e)).into())
}
