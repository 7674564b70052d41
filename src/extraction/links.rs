//! Link classification
//!
//! Source links are reported verbatim; this module only labels them so
//! callers can separate outside references from same-site or dead ones.

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

/// Type of link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Internal link (relative, or same host as the base)
    Internal,
    /// External link (different host)
    External,
    /// Anchor link (same page)
    Anchor,
    /// mailto: link
    Email,
    /// tel: link
    Phone,
    /// JavaScript link
    JavaScript,
    /// Other/unknown
    Other,
    /// No link; the placeholder was reported
    Missing,
}

impl LinkType {
    /// Classify `href` relative to an optional base page URL
    pub fn classify(href: &str, base: Option<&Url>) -> Self {
        let href = href.trim();
        if href.is_empty() {
            return LinkType::Other;
        }
        if href.starts_with('#') {
            return LinkType::Anchor;
        }

        let lower = href.to_ascii_lowercase();
        if lower.starts_with("mailto:") {
            return LinkType::Email;
        }
        if lower.starts_with("tel:") {
            return LinkType::Phone;
        }
        if lower.starts_with("javascript:") {
            return LinkType::JavaScript;
        }

        let resolved = match Url::parse(href) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => match base {
                Some(base) => match base.join(href) {
                    Ok(url) => url,
                    Err(_) => return LinkType::Other,
                },
                // Scheme-relative links name a host, so they leave the page's site
                None if href.starts_with("//") => return LinkType::External,
                None => return LinkType::Internal,
            },
            Err(_) => return LinkType::Other,
        };

        if !matches!(resolved.scheme(), "http" | "https") {
            return LinkType::Other;
        }

        match (base.and_then(Url::host_str), resolved.host_str()) {
            (Some(base_host), Some(host)) if base_host.eq_ignore_ascii_case(host) => {
                LinkType::Internal
            }
            _ => LinkType::External,
        }
    }

    /// Whether the link points somewhere off the page's site
    pub fn is_external(self) -> bool {
        self == LinkType::External
    }
}
