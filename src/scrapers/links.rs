//! Link and image harvesting via CSS selectors.

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::models::ImageCandidate;

/// Collect absolute URLs for elements matched by `selector`, in document
/// order.
///
/// Relative hrefs resolve against the page's own URL, not the crawl's root
/// URL; tournament pages sit at a different path depth than root pages.
pub fn harvest_links(doc: &Html, selector: &Selector, base: &Url) -> Vec<Url> {
    let mut links = Vec::new();
    for element in doc.select(selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        match base.join(href) {
            Ok(url) => links.push(url),
            Err(e) => debug!("unresolvable href {:?} on {}: {}", href, base, e),
        }
    }
    links
}

/// Collect (source URL, display name) pairs for image elements matched by
/// `selector`, in document order.
///
/// Elements missing either the src attribute or the alt text are skipped;
/// that is normal page noise, not an error.
pub fn harvest_images(doc: &Html, selector: &Selector, base: &Url) -> Vec<ImageCandidate> {
    let mut images = Vec::new();
    for element in doc.select(selector) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };
        let Some(alt) = element.value().attr("alt") else {
            continue;
        };
        if src.is_empty() || alt.is_empty() {
            continue;
        }
        match base.join(src) {
            Ok(url) => images.push(ImageCandidate {
                url,
                display_name: alt.to_string(),
            }),
            Err(e) => debug!("unresolvable image src {:?} on {}: {}", src, base, e),
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/football/africa/cup/").unwrap()
    }

    #[test]
    fn test_harvest_links_resolves_against_page_url() {
        let doc = Html::parse_document(concat!(
            r#"<a class="leftMenu__href" href="/football/africa/one/">One</a>"#,
            r#"<a class="leftMenu__href" href="two/">Two</a>"#,
            r#"<a class="leftMenu__href" href="https://other.com/abs">Abs</a>"#,
        ));
        let selector = Selector::parse("a.leftMenu__href").unwrap();
        let links = harvest_links(&doc, &selector, &base());
        assert_eq!(
            links.iter().map(Url::as_str).collect::<Vec<_>>(),
            vec![
                "https://example.com/football/africa/one/",
                "https://example.com/football/africa/cup/two/",
                "https://other.com/abs",
            ]
        );
    }

    #[test]
    fn test_harvest_links_skips_missing_and_empty_href() {
        let doc = Html::parse_document(concat!(
            r#"<a class="leftMenu__href">no href</a>"#,
            r#"<a class="leftMenu__href" href="">empty</a>"#,
            r#"<a class="leftMenu__href" href="/ok">ok</a>"#,
        ));
        let selector = Selector::parse("a.leftMenu__href").unwrap();
        let links = harvest_links(&doc, &selector, &base());
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].as_str(), "https://example.com/ok");
    }

    #[test]
    fn test_harvest_images_pairs_src_and_alt() {
        let doc = Html::parse_document(concat!(
            r#"<img class="heading__logo heading__logo--1" src="/res/logo.png" alt="Cup One">"#,
            r#"<img class="heading__logo heading__logo--1" src="/res/other.png">"#,
            r#"<img class="heading__logo heading__logo--1" alt="No Source">"#,
            r#"<img class="heading__logo heading__logo--1" src="" alt="Empty Source">"#,
        ));
        let selector = Selector::parse("img.heading__logo.heading__logo--1").unwrap();
        let images = harvest_images(&doc, &selector, &base());
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url.as_str(), "https://example.com/res/logo.png");
        assert_eq!(images[0].display_name, "Cup One");
    }

    #[test]
    fn test_harvest_images_ignores_unselected_elements() {
        let doc = Html::parse_document(concat!(
            r#"<img class="banner" src="/res/banner.png" alt="Banner">"#,
            r#"<img class="heading__logo heading__logo--1" src="/res/logo.png" alt="Logo">"#,
        ));
        let selector = Selector::parse("img.heading__logo.heading__logo--1").unwrap();
        let images = harvest_images(&doc, &selector, &base());
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].display_name, "Logo");
    }
}
