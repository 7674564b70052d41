//! Extraction module tests
//!
//! These tests run the extractor over article-shaped documents end to end.

use factcheck_sources::extraction::{LinkType, SourceExtractorConfig};
use factcheck_sources::{extract_sources, ArticleSources, SourceExtractor};
use pretty_assertions::assert_eq;
use scraper::{Html, Selector};
use url::Url;

const ARTICLE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Fact-check: claim about vaccines</title></head>
<body>
  <main>
    <article class="m-textblock">
      <p>The claim spread widely on social media.</p>
    </article>
    <section class="o-pick">
      <div class="m-superbox">
        <header class="m-superbox__header">Our Sources</header>
        <div class="m-superbox__content">
          <p>CDC, <a href="https://www.cdc.gov/vaccines/report.html">Vaccine safety report</a>, Jan. 2, 2021</p>
          <p>Email interview with a CDC spokesperson, Jan. 3, 2021</p>
          <p>PolitiFact, <a href="/factchecks/2020/dec/01/earlier/">Earlier fact-check</a>, Dec. 1, 2020</p>
          <p><a>Archived post</a> (link removed)</p>
        </div>
      </div>
    </section>
  </main>
</body>
</html>
"#;

#[test]
fn test_article_sources_are_paired() {
    let document = Html::parse_document(ARTICLE);
    let (bodies, links) = extract_sources(&document).unwrap();

    assert_eq!(
        bodies,
        vec![
            "CDC, Vaccine safety report, Jan. 2, 2021".to_string(),
            "Email interview with a CDC spokesperson, Jan. 3, 2021".to_string(),
            "PolitiFact, Earlier fact-check, Dec. 1, 2020".to_string(),
            "Archived post (link removed)".to_string(),
        ]
    );
    assert_eq!(
        links,
        vec![
            "https://www.cdc.gov/vaccines/report.html".to_string(),
            "No link".to_string(),
            "/factchecks/2020/dec/01/earlier/".to_string(),
            "No link".to_string(),
        ]
    );
}

#[test]
fn test_article_paragraphs_outside_box_ignored() {
    let document = Html::parse_document(ARTICLE);
    let (bodies, _) = extract_sources(&document).unwrap();
    assert!(bodies.iter().all(|b| !b.contains("social media")));
}

#[test]
fn test_extract_from_subtree() {
    let document = Html::parse_document(ARTICLE);
    let selector = Selector::parse("section.o-pick").unwrap();
    let section = document.select(&selector).next().unwrap();

    let extractor = SourceExtractor::new().unwrap();
    let (bodies, links) = extractor.extract_sources(&section).unwrap();
    assert_eq!(bodies.len(), 4);
    assert_eq!(links.len(), 4);
}

#[test]
fn test_subtree_without_box_is_not_found() {
    let document = Html::parse_document(ARTICLE);
    let selector = Selector::parse("article.m-textblock").unwrap();
    let article = document.select(&selector).next().unwrap();

    let err = SourceExtractor::new()
        .unwrap()
        .extract_sources(&article)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_link_types_with_article_url() -> anyhow::Result<()> {
    let extractor = SourceExtractor::new()?.with_base_url(Url::parse(
        "https://www.politifact.com/factchecks/2021/jan/05/claim/",
    )?);
    let sources = extractor.extract_from_html(ARTICLE)?;

    let types: Vec<LinkType> = sources.citations.iter().map(|c| c.link_type).collect();
    assert_eq!(
        types,
        vec![
            LinkType::External,
            LinkType::Missing,
            LinkType::Internal,
            LinkType::Missing,
        ]
    );

    let linked: Vec<usize> = sources.linked().map(|c| c.position).collect();
    assert_eq!(linked, vec![0, 2]);
    Ok(())
}

#[test]
fn test_structured_and_parallel_forms_agree() -> anyhow::Result<()> {
    let extractor = SourceExtractor::new()?;
    let document = Html::parse_document(ARTICLE);

    let sources = extractor.extract(&document)?;
    let (bodies, links) = extract_sources(&document)?;

    assert_eq!(sources.bodies(), bodies);
    assert_eq!(sources.links("No link"), links);
    assert_eq!(sources.into_parallel("No link"), (bodies, links));
    Ok(())
}

#[test]
fn test_json_roundtrip_of_article() -> anyhow::Result<()> {
    let sources = SourceExtractor::new()?.extract_from_html(ARTICLE)?;
    let json = sources.to_json()?;
    let back: ArticleSources = serde_json::from_str(&json)?;
    assert_eq!(back, sources);
    Ok(())
}

#[test]
fn test_list_layout_via_config() -> anyhow::Result<()> {
    let config = SourceExtractorConfig::from_json(
        r#"{
            "block_class": "sources",
            "paragraph_tag": "li",
            "placeholder": "none",
            "normalize_whitespace": true
        }"#,
    )?;
    let extractor = SourceExtractor::with_config(config)?;
    let html = r#"
        <ul class="sources">
          <li>
            Report <a href="https://example.org/r">here</a>
          </li>
          <li>Book</li>
        </ul>
    "#;

    let document = Html::parse_document(html);
    let (bodies, links) = extractor.extract_sources(&document.root_element())?;
    assert_eq!(bodies, vec!["Report here".to_string(), "Book".to_string()]);
    assert_eq!(
        links,
        vec!["https://example.org/r".to_string(), "none".to_string()]
    );
    Ok(())
}
