//! URL resolution.
//!
//! Maps an arbitrary post URL to a concrete fetchable media URL: a direct
//! image link, an album archive link, or nothing when the page gives no
//! image away.

use url::Url;

use crate::net::{ensure_scheme, Transport};
use crate::scrape;
use crate::selectors::SelectorRegistry;

/// File extensions recognized as direct images.
const IMAGE_FORMATS: [&str; 5] = [".png", ".gif", ".gifv", ".jpg", ".jpeg"];

/// Path marker identifying album links.
const ALBUM_MARKER: &str = "/a/";

/// Suffix appended to an album URL to request its archive form.
const ALBUM_ARCHIVE_SUFFIX: &str = "/zip";

/// Outcome of resolving a post URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// URL pointing straight at an image file.
    DirectImage(String),
    /// Album URL transformed to its archive form.
    Album(String),
    /// No direct media link could be found.
    Unresolved,
}

/// Maps arbitrary post URLs to concrete fetchable media URLs.
pub struct Resolver {
    registry: SelectorRegistry,
}

impl Resolver {
    /// Create a resolver over a selector registry.
    pub fn new(registry: SelectorRegistry) -> Self {
        Self { registry }
    }

    /// True when the URL carries the album marker.
    pub fn is_album(url: &str) -> bool {
        url.contains(ALBUM_MARKER)
    }

    /// True when the URL's extension names a known image format.
    pub fn is_direct_image(url: &str) -> bool {
        let url = url.to_lowercase();
        IMAGE_FORMATS.iter().any(|ext| url.ends_with(ext))
    }

    /// True for gif-form URLs.
    pub fn is_gif(url: &str) -> bool {
        let url = url.to_lowercase();
        url.ends_with(".gif") || url.ends_with(".gifv")
    }

    /// Resolve a post URL to a concrete media URL.
    ///
    /// Album links are rewritten to their archive form, direct image links
    /// pass through unchanged, and anything else is scraped for an image
    /// link. All failures resolve to [`Resolution::Unresolved`].
    pub async fn resolve(&self, transport: &dyn Transport, url: &str) -> Resolution {
        if Self::is_album(url) {
            return Resolution::Album(format!("{}{}", url, ALBUM_ARCHIVE_SUFFIX));
        }

        if Self::is_direct_image(url) {
            return Resolution::DirectImage(url.to_string());
        }

        self.scrape_image_url(transport, url).await
    }

    /// Fetch an indirect page and pull the image link out with the
    /// domain's selector rule.
    async fn scrape_image_url(&self, transport: &dyn Transport, url: &str) -> Resolution {
        let page = match transport.get(url).await {
            Ok(page) => page,
            // already logged by the transport
            Err(_) => return Resolution::Unresolved,
        };

        let domain = domain_of(url).unwrap_or_default();
        let rule = self.registry.rule_for(&domain);

        match scrape::extract_link(&page.text(), rule) {
            Some(link) => Resolution::DirectImage(link),
            None => {
                tracing::warn!("Encountered unsupported URL: {} (domain {})", url, domain);
                Resolution::Unresolved
            }
        }
    }
}

/// Host portion of a URL: "http://imgur.com/ASoeL" -> "imgur.com".
fn domain_of(url: &str) -> Option<String> {
    Url::parse(ensure_scheme(url).as_ref())
        .ok()?
        .host_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::testing::StubTransport;

    fn resolver() -> Resolver {
        Resolver::new(SelectorRegistry::builtin())
    }

    #[test]
    fn test_direct_image_extensions() {
        for url in [
            "http://x.com/pic.png",
            "http://x.com/pic.gif",
            "http://x.com/pic.gifv",
            "http://x.com/pic.jpg",
            "http://x.com/pic.jpeg",
            "http://x.com/PIC.JPG",
        ] {
            assert!(Resolver::is_direct_image(url), "{}", url);
        }

        assert!(!Resolver::is_direct_image("http://x.com/pic.bmp"));
        assert!(!Resolver::is_direct_image("http://x.com/page"));
    }

    #[test]
    fn test_gif_detection() {
        assert!(Resolver::is_gif("http://x.com/anim.gif"));
        assert!(Resolver::is_gif("http://x.com/anim.gifv"));
        assert!(!Resolver::is_gif("http://x.com/pic.jpg"));
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("http://imgur.com/ASoeL").as_deref(), Some("imgur.com"));
        assert_eq!(domain_of("imgur.com/ASoeL").as_deref(), Some("imgur.com"));
    }

    #[tokio::test]
    async fn test_resolve_direct_image_unchanged() {
        let transport = StubTransport::new();

        let resolution = resolver()
            .resolve(&transport, "http://x.com/pic.jpg")
            .await;

        assert_eq!(
            resolution,
            Resolution::DirectImage("http://x.com/pic.jpg".to_string())
        );
        // no fetch needed for direct links
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_album_appends_archive_suffix() {
        let transport = StubTransport::new();

        let resolution = resolver()
            .resolve(&transport, "http://imgur.com/a/XYZ")
            .await;

        assert_eq!(
            resolution,
            Resolution::Album("http://imgur.com/a/XYZ/zip".to_string())
        );
    }

    #[tokio::test]
    async fn test_album_marker_takes_precedence_over_extension() {
        let transport = StubTransport::new();

        let resolution = resolver()
            .resolve(&transport, "http://imgur.com/a/pic.jpg")
            .await;

        assert_eq!(
            resolution,
            Resolution::Album("http://imgur.com/a/pic.jpg/zip".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_scrapes_indirect_page() {
        let page = r#"<html><head>
            <link rel="image_src" href="http://i.imgur.com/ASoeL.jpg">
        </head></html>"#;
        let transport = StubTransport::new().with_response("http://imgur.com/ASoeL", page);

        let resolution = resolver().resolve(&transport, "http://imgur.com/ASoeL").await;

        assert_eq!(
            resolution,
            Resolution::DirectImage("http://i.imgur.com/ASoeL.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_uses_default_rule_for_unmapped_domain() {
        let page = r#"<html><head>
            <meta property="og:image" content="http://cdn.example.com/pic.jpg">
        </head></html>"#;
        let transport = StubTransport::new().with_response("http://example.com/post/1", page);

        let resolution = resolver()
            .resolve(&transport, "http://example.com/post/1")
            .await;

        assert_eq!(
            resolution,
            Resolution::DirectImage("http://cdn.example.com/pic.jpg".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_unresolved_on_failed_fetch() {
        let transport = StubTransport::new();

        let resolution = resolver()
            .resolve(&transport, "http://example.com/gone")
            .await;

        assert_eq!(resolution, Resolution::Unresolved);
    }

    #[tokio::test]
    async fn test_resolve_unresolved_on_missing_element() {
        let transport =
            StubTransport::new().with_response("http://example.com/page", "<html></html>");

        let resolution = resolver()
            .resolve(&transport, "http://example.com/page")
            .await;

        assert_eq!(resolution, Resolution::Unresolved);
    }
}
