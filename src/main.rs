//! imgbot - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::task::JoinSet;
use tracing_subscriber::{fmt, EnvFilter};

use imgbot::{
    cli::Args,
    config::{clean_subreddit_name, validate_config, Config, SortMode, TimeWindow},
    download::{GlobalStats, SubredditStats},
    error::{exit_codes, Error, Result},
    feed::{PostFeed, RedditFeed},
    net::{HttpTransport, Transport},
    output::{
        print_banner, print_config_summary, print_error, print_global_stats, print_info,
        print_subreddit_stats, print_warning,
    },
    resolve::Resolver,
    router::{route_posts, RouteOptions},
    selectors::SelectorRegistry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Feed(_) => ExitCode::from(exit_codes::FEED_ERROR as u8),
                Error::Download(_) | Error::Archive(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let subreddits: Vec<String> = config
        .sources
        .subreddits
        .iter()
        .map(|name| clean_subreddit_name(name).to_string())
        .collect();

    print_config_summary(
        &subreddits,
        &config.options.sort.to_string(),
        &config.download_directory().display().to_string(),
    );

    // Selector registry: built-ins merged with optional user overrides
    let registry = match &config.selectors.overrides_file {
        Some(path) => SelectorRegistry::with_overrides(path),
        None => SelectorRegistry::builtin(),
    };

    // Shared collaborators; the transport reuses connections across all
    // requests in the process
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config.options.user_agent)?);
    let feed = Arc::new(RedditFeed::new(Arc::clone(&transport)));
    let resolver = Arc::new(Resolver::new(registry));
    let options = Arc::new(RouteOptions {
        download_albums: config.options.download_albums,
        download_gifs: config.options.download_gifs,
        download_nsfw: config.options.download_nsfw,
        destination: config.download_directory(),
    });

    let sort = config.options.sort;
    let time = config.options.time;
    let limit = config.options.limit;

    let mut global_stats = GlobalStats::default();

    if subreddits.len() > 1 {
        // One worker per subreddit; no shared mutable state between
        // workers beyond the destination directory
        let mut workers = JoinSet::new();

        for subreddit in subreddits {
            let feed = Arc::clone(&feed);
            let transport = Arc::clone(&transport);
            let resolver = Arc::clone(&resolver);
            let options = Arc::clone(&options);

            workers.spawn(async move {
                let result = process_subreddit(
                    feed.as_ref(),
                    transport.as_ref(),
                    &resolver,
                    &options,
                    &subreddit,
                    sort,
                    time,
                    limit,
                )
                .await;
                (subreddit, result)
            });
        }

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok((_, Ok(stats))) => {
                    print_subreddit_stats(&stats);
                    global_stats.add_subreddit_stats(&stats);
                }
                Ok((subreddit, Err(e))) => {
                    print_error(&format!("Failed to process r/{}: {}", subreddit, e));
                    global_stats.mark_subreddit_failed();
                }
                Err(e) => {
                    print_error(&format!("Worker failed: {}", e));
                    global_stats.mark_subreddit_failed();
                }
            }
        }
    } else {
        for subreddit in &subreddits {
            match process_subreddit(
                feed.as_ref(),
                transport.as_ref(),
                &resolver,
                &options,
                subreddit,
                sort,
                time,
                limit,
            )
            .await
            {
                Ok(stats) => {
                    print_subreddit_stats(&stats);
                    global_stats.add_subreddit_stats(&stats);
                }
                Err(e) => {
                    print_error(&format!("Failed to process r/{}: {}", subreddit, e));
                    global_stats.mark_subreddit_failed();
                }
            }
        }
    }

    print_global_stats(&global_stats);

    if global_stats.subreddits_failed > 0 {
        return Err(Error::Feed(format!(
            "{} subreddit(s) failed",
            global_stats.subreddits_failed
        )));
    }

    Ok(())
}

/// Run the full pipeline for one subreddit.
#[allow(clippy::too_many_arguments)]
async fn process_subreddit(
    feed: &dyn PostFeed,
    transport: &dyn Transport,
    resolver: &Resolver,
    options: &RouteOptions,
    subreddit: &str,
    sort: SortMode,
    time: TimeWindow,
    limit: u32,
) -> Result<SubredditStats> {
    print_info(&format!("Fetching posts from r/{}", subreddit));

    let posts = feed.posts(subreddit, sort, time, limit).await?;

    tracing::debug!("Got {} post(s) from r/{}", posts.len(), subreddit);

    let mut stats = SubredditStats::new(subreddit.to_string());
    route_posts(transport, resolver, options, &posts, &mut stats).await;

    Ok(stats)
}
