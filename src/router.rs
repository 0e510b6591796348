//! Post routing and filtering.
//!
//! Applies post-level filters, asks the resolver for a concrete media URL,
//! and dispatches to the matching download strategy. Every per-post
//! failure resolves to a logged skip; one bad post never aborts the run.

use std::path::PathBuf;

use crate::download::{download_album, download_image, SubredditStats};
use crate::feed::Post;
use crate::net::Transport;
use crate::output::{print_skip, print_success};
use crate::resolve::{Resolution, Resolver};

/// Options controlling which posts are downloaded and where.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    pub download_albums: bool,
    pub download_gifs: bool,
    pub download_nsfw: bool,
    /// Destination directory. Must already exist.
    pub destination: PathBuf,
}

/// Route posts to the correct download strategy, in feed order.
pub async fn route_posts(
    transport: &dyn Transport,
    resolver: &Resolver,
    options: &RouteOptions,
    posts: &[Post],
    stats: &mut SubredditStats,
) {
    for post in posts {
        route_post(transport, resolver, options, post, stats).await;
    }
}

async fn route_post(
    transport: &dyn Transport,
    resolver: &Resolver,
    options: &RouteOptions,
    post: &Post,
    stats: &mut SubredditStats,
) {
    // sticky and self posts carry no image link
    if post.stickied || post.is_self {
        tracing::debug!("Skipping sticky or self post: {}", post.title);
        stats.increment_filtered();
        return;
    }

    if post.over_18 && !options.download_nsfw {
        tracing::debug!("Skipping NSFW post: {}", post.title);
        stats.increment_filtered();
        return;
    }

    if Resolver::is_album(&post.url) && !options.download_albums {
        print_skip(&format!("Ignoring album {}", post.url));
        stats.increment_skipped();
        return;
    }

    let resolution = resolver.resolve(transport, &post.url).await;

    let url = match &resolution {
        Resolution::DirectImage(url) | Resolution::Album(url) => url.clone(),
        // already logged by the resolver
        Resolution::Unresolved => {
            stats.increment_skipped();
            return;
        }
    };

    if Resolver::is_gif(&url) && !options.download_gifs {
        print_skip(&format!("Ignoring gif {}", url));
        stats.increment_skipped();
        return;
    }

    let fetched = match transport.get(&url).await {
        Ok(fetched) => fetched,
        // already logged by the transport
        Err(_) => {
            stats.increment_skipped();
            return;
        }
    };

    let outcome = match resolution {
        Resolution::Album(_) => download_album(&fetched, &options.destination)
            .await
            .map(|()| stats.increment_album()),
        _ => download_image(&fetched, &options.destination)
            .await
            .map(|_| stats.increment_image()),
    };

    match outcome {
        Ok(()) => print_success(&format!("Downloaded {}", post.title)),
        Err(e) => {
            tracing::warn!("Failed to download {}: {}", url, e);
            stats.increment_skipped();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::album::make_zip;
    use crate::net::testing::StubTransport;
    use crate::selectors::SelectorRegistry;

    fn post(url: &str) -> Post {
        Post {
            url: url.to_string(),
            title: "a post".to_string(),
            stickied: false,
            is_self: false,
            over_18: false,
        }
    }

    fn options(destination: &std::path::Path) -> RouteOptions {
        RouteOptions {
            download_albums: true,
            download_gifs: true,
            download_nsfw: false,
            destination: destination.to_path_buf(),
        }
    }

    fn resolver() -> Resolver {
        Resolver::new(SelectorRegistry::builtin())
    }

    async fn run_one(
        transport: &StubTransport,
        options: &RouteOptions,
        post: Post,
    ) -> SubredditStats {
        let mut stats = SubredditStats::new("pics".to_string());
        route_posts(transport, &resolver(), options, &[post], &mut stats).await;
        stats
    }

    #[tokio::test]
    async fn test_sticky_post_produces_no_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new();

        let mut sticky = post("http://x.com/pic.jpg");
        sticky.stickied = true;
        let stats = run_one(&transport, &options(dir.path()), sticky).await;

        assert!(transport.requests().is_empty());
        assert_eq!(stats.filtered_count, 1);
    }

    #[tokio::test]
    async fn test_self_post_produces_no_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new();

        let mut selfpost = post("http://x.com/pic.jpg");
        selfpost.is_self = true;
        run_one(&transport, &options(dir.path()), selfpost).await;

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_nsfw_post_skipped_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new();

        let mut nsfw = post("http://x.com/pic.jpg");
        nsfw.over_18 = true;
        let stats = run_one(&transport, &options(dir.path()), nsfw).await;

        assert!(transport.requests().is_empty());
        assert_eq!(stats.filtered_count, 1);
    }

    #[tokio::test]
    async fn test_nsfw_post_downloaded_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new().with_response("http://x.com/pic.jpg", b"jpeg".to_vec());

        let mut nsfw = post("http://x.com/pic.jpg");
        nsfw.over_18 = true;
        let mut opts = options(dir.path());
        opts.download_nsfw = true;
        let stats = run_one(&transport, &opts, nsfw).await;

        assert_eq!(stats.image_count, 1);
        assert!(dir.path().join("pic.jpg").exists());
    }

    #[tokio::test]
    async fn test_direct_image_fetched_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new().with_response("http://x.com/pic.jpg", b"jpeg".to_vec());

        let stats = run_one(&transport, &options(dir.path()), post("http://x.com/pic.jpg")).await;

        assert_eq!(transport.requests(), vec!["http://x.com/pic.jpg".to_string()]);
        assert_eq!(stats.image_count, 1);
        assert_eq!(std::fs::read(dir.path().join("pic.jpg")).unwrap(), b"jpeg");
    }

    #[tokio::test]
    async fn test_album_resolved_to_archive_and_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let body = make_zip(&[("one.jpg", b"first"), ("two.jpg", b"second")]);
        let transport = StubTransport::new().with_response("http://imgur.com/a/XYZ/zip", body);

        let stats = run_one(&transport, &options(dir.path()), post("http://imgur.com/a/XYZ")).await;

        assert_eq!(
            transport.requests(),
            vec!["http://imgur.com/a/XYZ/zip".to_string()]
        );
        assert_eq!(stats.album_count, 1);
        assert!(dir.path().join("one.jpg").exists());
        assert!(dir.path().join("two.jpg").exists());
    }

    #[tokio::test]
    async fn test_album_skipped_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new();

        let mut opts = options(dir.path());
        opts.download_albums = false;
        let stats = run_one(&transport, &opts, post("http://imgur.com/a/XYZ")).await;

        assert!(transport.requests().is_empty());
        assert_eq!(stats.skipped_count, 1);
    }

    #[tokio::test]
    async fn test_gif_skipped_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new();

        let mut opts = options(dir.path());
        opts.download_gifs = false;
        let stats = run_one(&transport, &opts, post("http://x.com/anim.gif")).await;

        assert!(transport.requests().is_empty());
        assert_eq!(stats.skipped_count, 1);
    }

    #[tokio::test]
    async fn test_scraped_gif_link_respects_gif_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let page = r#"<meta property="og:url" content="http://giant.gfycat.example/clip.gifv">"#;
        let transport = StubTransport::new().with_response("http://gfycat.com/clip", page);

        let mut opts = options(dir.path());
        opts.download_gifs = false;
        let stats = run_one(&transport, &opts, post("http://gfycat.com/clip")).await;

        // page was scraped but the gif itself was never fetched
        assert_eq!(transport.requests(), vec!["http://gfycat.com/clip".to_string()]);
        assert_eq!(stats.skipped_count, 1);
    }

    #[tokio::test]
    async fn test_unresolved_post_skipped_without_panic() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new();

        let stats = run_one(&transport, &options(dir.path()), post("http://example.com/page")).await;

        assert_eq!(stats.skipped_count, 1);
        assert_eq!(stats.total_downloaded(), 0);
    }

    #[tokio::test]
    async fn test_failed_media_fetch_skips_post() {
        let dir = tempfile::tempdir().unwrap();
        // direct link resolves without a fetch, the download itself 404s
        let transport = StubTransport::new();

        let stats = run_one(&transport, &options(dir.path()), post("http://x.com/pic.jpg")).await;

        assert_eq!(stats.skipped_count, 1);
    }

    #[tokio::test]
    async fn test_archive_failure_does_not_abort_remaining_posts() {
        let dir = tempfile::tempdir().unwrap();
        let transport = StubTransport::new()
            .with_response("http://imgur.com/a/BAD/zip", b"not a zip".to_vec())
            .with_response("http://x.com/pic.jpg", b"jpeg".to_vec());

        let posts = vec![post("http://imgur.com/a/BAD"), post("http://x.com/pic.jpg")];
        let mut stats = SubredditStats::new("pics".to_string());
        route_posts(
            &transport,
            &resolver(),
            &options(dir.path()),
            &posts,
            &mut stats,
        )
        .await;

        assert_eq!(stats.skipped_count, 1);
        assert_eq!(stats.image_count, 1);
        assert!(dir.path().join("pic.jpg").exists());
    }
}
