//! factcheck-sources - Source Citation Extraction for Fact-Check Articles
//!
//! Fact-checking articles end with a "sources" box: a container of
//! paragraphs, each naming one cited source and usually linking to it. This
//! crate reads that box out of a parsed HTML document and returns the
//! citations in document order.
//!
//! # Features
//!
//! - **Paired extraction**: exactly one link entry per paragraph, with a
//!   `"No link"` placeholder where a paragraph carries no `<a href>`
//! - **Configurable layout**: block class, entry tag, anchor attribute and
//!   placeholder are all settable
//! - **Link classification**: internal, external, anchor, mailto and more
//!
//! # Quick Start
//!
//! ```rust
//! use factcheck_sources::SourceExtractor;
//!
//! let html = r#"
//!     <article>
//!       <div class="m-superbox__content">
//!         <p>CDC, <a href="https://www.cdc.gov/report">report</a>, Jan. 2, 2020</p>
//!         <p>Phone interview with a spokesperson</p>
//!       </div>
//!     </article>
//! "#;
//!
//! let extractor = SourceExtractor::new()?;
//! let sources = extractor.extract_from_html(html)?;
//!
//! assert_eq!(sources.len(), 2);
//! assert_eq!(sources.citations[0].link.as_deref(), Some("https://www.cdc.gov/report"));
//! assert_eq!(sources.citations[1].link, None);
//! # Ok::<(), factcheck_sources::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod extraction;

// Re-exports for convenience
pub use error::{Error, ExtractionError, Result};
pub use extraction::{
    extract_sources, ArticleSources, LinkType, SourceCitation, SourceExtractor,
    SourceExtractorConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
