//! CLI command implementations

use std::io::{self, Write};

use anyhow::Context;
use driftnet_core::{DriftnetConfig, init_tracing};
use driftnet_search::{SearchDispatcher, SearchReport};

use crate::progress::SearchProgress;
use crate::render::Renderer;

/// Search both platforms for `keywords` and print the report to stdout.
///
/// # Errors
/// - `DriftnetError::Configuration` - An environment override is invalid
/// - `DriftnetError::Logging` - Tracing could not be initialized
/// - `io::Error` - Writing the report to stdout failed
pub async fn search(keywords: &str) -> anyhow::Result<()> {
    let config = DriftnetConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_level.as_tracing_level())?;

    tracing::info!(keywords, "Starting search");

    let dispatcher = SearchDispatcher::from_config(&config);
    let progress = SearchProgress::stdout();
    let mut renderer = Renderer::stdout();

    run_search(&dispatcher, keywords, &progress, &mut renderer)
        .await
        .context("Failed to write results")?;

    Ok(())
}

/// Run both platform queries behind the spinner, then render the report.
///
/// Platform failures never surface here; they are part of the report.
///
/// # Errors
/// - `io::Error` - The renderer's output rejected a write
pub async fn run_search<W: Write>(
    dispatcher: &SearchDispatcher,
    keywords: &str,
    progress: &SearchProgress,
    renderer: &mut Renderer<W>,
) -> io::Result<SearchReport> {
    let report = dispatcher
        .run_with_progress(keywords, |platform| progress.start(platform))
        .await;
    progress.finish();

    renderer.render_report(&report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use driftnet_search::providers::StaticProvider;
    use driftnet_search::{Platform, ResultItem};

    use super::*;

    fn story(id: u32, title: &str) -> ResultItem {
        ResultItem::new(
            Platform::HackerNews,
            title,
            format!("https://news.ycombinator.com/item?id={id}"),
        )
        .with_author("tptacek")
    }

    async fn run(dispatcher: SearchDispatcher, keywords: &str) -> (SearchReport, String) {
        let progress = SearchProgress::hidden();
        let mut renderer = Renderer::new(Vec::new(), 60, false);
        let report = run_search(&dispatcher, keywords, &progress, &mut renderer)
            .await
            .unwrap();
        (report, String::from_utf8(renderer.into_inner()).unwrap())
    }

    #[tokio::test]
    async fn test_two_stories_and_no_submissions() {
        let dispatcher = SearchDispatcher::with_providers(
            Box::new(StaticProvider::returning(
                Platform::HackerNews,
                vec![
                    story(1, "Rust 1.80 released"),
                    story(2, "Why [we] rewrote it in Rust"),
                ],
            )),
            Box::new(StaticProvider::returning(Platform::Reddit, vec![])),
        );

        let (report, output) = run(dispatcher, "rust").await;

        assert!(report.failures.is_empty());
        assert!(output.contains("Hacker News Results"));
        assert!(output.contains("Rust 1.80 released"));
        assert!(output.contains(r"Why \[we] rewrote it in Rust"));
        assert_eq!(output.matches("by tptacek").count(), 2);
        assert_eq!(
            output
                .lines()
                .filter(|line| !line.is_empty() && line.chars().all(|c| c == '─'))
                .count(),
            1
        );

        let reddit_section = &output[output.find("Reddit Results").unwrap()..];
        assert!(reddit_section.contains("No results found on Reddit."));
        assert!(!output.contains("No results found on Hacker News."));
        assert!(!output.contains("Error searching"));
    }

    #[tokio::test]
    async fn test_both_platforms_failing_still_renders() {
        let dispatcher = SearchDispatcher::with_providers(
            Box::new(StaticProvider::failing(Platform::HackerNews, "timed out")),
            Box::new(StaticProvider::failing(Platform::Reddit, "401 Unauthorized")),
        );

        let (report, output) = run(dispatcher, "rust").await;

        assert_eq!(report.failures.len(), 2);
        assert!(output.contains("Error searching Hacker News: Provider error: timed out"));
        assert!(output.contains("Error searching Reddit: Provider error: 401 Unauthorized"));
        assert!(output.contains("No results found on Hacker News."));
        assert!(output.contains("No results found on Reddit."));
    }

    #[tokio::test]
    async fn test_reddit_results_survive_hacker_news_failure() {
        let dispatcher = SearchDispatcher::with_providers(
            Box::new(StaticProvider::failing(Platform::HackerNews, "algolia down")),
            Box::new(StaticProvider::returning(
                Platform::Reddit,
                vec![
                    ResultItem::new(
                        Platform::Reddit,
                        "Driftnet 0.1",
                        "https://www.reddit.com/r/rust/comments/x/driftnet/",
                    )
                    .with_author("ferris")
                    .with_community("rust"),
                ],
            )),
        );

        let (_, output) = run(dispatcher, "driftnet").await;

        assert!(output.contains("No results found on Hacker News."));
        assert!(output.contains("in r/rust by ferris"));
        assert!(output.contains("https://www.reddit.com/r/rust/comments/x/driftnet/"));
    }
}
