//! Scrape coordinator - the two-pass run
//!
//! The homepage pass records external resources and hyperlinks and resolves
//! the followed link. The target pass counts the words visible on the linked
//! page up to the terminator. Every step either succeeds or aborts the run;
//! files written before a failure are left as they are.

use crate::config::Config;
use crate::output::{json_path, write_frequency, write_tag_records, OutputError};
use crate::scrape::fetcher::PageFetcher;
use crate::scrape::filter::{external_resources, hyperlinks};
use crate::scrape::frequency::{tabulate_with_stats, TabulationStats, WordFrequency};
use crate::scrape::resolver::resolve_target;
use crate::ScrapeError;
use std::path::{Path, PathBuf};
use url::Url;

/// Number of words listed in the run report
const TOP_WORDS: usize = 10;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Homepage that was scraped
    pub page_url: Url,

    /// Page the followed link resolved to
    pub target_url: Url,

    /// Number of external-resource records written
    pub resources: usize,

    /// Number of hyperlink records written
    pub links: usize,

    /// Text fragments read from the target page
    pub fragments_consumed: usize,

    /// Whether counting stopped at the terminator
    pub terminator_reached: bool,

    /// Distinct words counted
    pub distinct_words: usize,

    /// Sum of all word counts
    pub total_words: u64,

    /// Most frequent words, highest first
    pub top_words: Vec<(String, u64)>,

    pub resources_path: PathBuf,
    pub links_path: PathBuf,
    pub frequency_path: PathBuf,
}

/// Homepage pass results carried into the target pass
struct HomepageSurvey {
    resources: usize,
    links: usize,
    target_url: Url,
}

/// Main scrape coordinator structure
pub struct Coordinator {
    config: Config,
    fetcher: PageFetcher,
}

impl Coordinator {
    /// Creates a coordinator with an HTTP client built from `config`
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        let fetcher = PageFetcher::new(&config.user_agent, &config.fetch)?;
        Ok(Self { config, fetcher })
    }

    /// Runs both passes and writes the three output files
    pub async fn run(&self) -> Result<RunReport, ScrapeError> {
        let page_url = Url::parse(&self.config.scrape.page_url)?;
        let output = &self.config.output;
        let directory = Path::new(&output.directory);

        std::fs::create_dir_all(directory).map_err(|source| OutputError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let resources_path = json_path(directory, &output.resources_name);
        let links_path = json_path(directory, &output.links_name);
        let frequency_path = json_path(directory, &output.frequency_name);

        let survey = self
            .survey_homepage(&page_url, &resources_path, &links_path)
            .await?;

        let (freq, stats) = self.count_target_words(&survey.target_url).await?;
        write_frequency(&freq, &frequency_path)?;
        tracing::info!(
            "Counted {} words ({} distinct) from {} fragments",
            freq.total(),
            freq.len(),
            stats.fragments_consumed
        );

        Ok(RunReport {
            page_url,
            target_url: survey.target_url,
            resources: survey.resources,
            links: survey.links,
            fragments_consumed: stats.fragments_consumed,
            terminator_reached: stats.terminator_reached,
            distinct_words: freq.len(),
            total_words: freq.total(),
            top_words: freq
                .most_common(TOP_WORDS)
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
            resources_path,
            links_path,
            frequency_path,
        })
    }

    /// First pass: record resources and links, resolve the followed link
    async fn survey_homepage(
        &self,
        page_url: &Url,
        resources_path: &Path,
        links_path: &Path,
    ) -> Result<HomepageSurvey, ScrapeError> {
        tracing::info!("Fetching homepage {}", page_url);
        let homepage = self.fetcher.render(page_url).await?;
        let document = &homepage.document;

        let resources = external_resources(document);
        write_tag_records(&resources, resources_path)?;
        tracing::info!(
            "Recorded {} external resources in {}",
            resources.len(),
            resources_path.display()
        );

        let links = hyperlinks(document);
        write_tag_records(&links, links_path)?;
        tracing::info!(
            "Recorded {} hyperlinks in {}",
            links.len(),
            links_path.display()
        );

        let search_text = &self.config.scrape.search_text;
        // Relative hrefs resolve against where the homepage actually lives
        let target_url = resolve_target(&homepage.url, search_text, &links)?;
        tracing::info!("Following '{}' to {}", search_text, target_url);

        Ok(HomepageSurvey {
            resources: resources.len(),
            links: links.len(),
            target_url,
        })
    }

    /// Second pass: tabulate the target page's visible body text
    async fn count_target_words(
        &self,
        target_url: &Url,
    ) -> Result<(WordFrequency, TabulationStats), ScrapeError> {
        let target = self.fetcher.render(target_url).await?;
        let terminator = &self.config.scrape.terminator;

        let (freq, stats) = match target.document.body() {
            Some(body) => tabulate_with_stats(body.stripped_strings(), terminator),
            None => {
                tracing::warn!("{} has no <body>; nothing to count", target_url);
                (WordFrequency::new(), TabulationStats::default())
            }
        };

        if !stats.terminator_reached {
            tracing::warn!(
                "Terminator '{}' was not found on {}; counted all {} fragments",
                terminator,
                target_url,
                stats.fragments_consumed
            );
        }

        Ok((freq, stats))
    }
}
