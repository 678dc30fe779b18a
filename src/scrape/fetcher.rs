//! HTTP page fetcher
//!
//! This module builds the HTTP client from configuration and turns a URL
//! into a parsed [`Document`] together with the URL the page was finally
//! served from. Requests are made once: there is no retry logic, and any
//! transport error or non-success status aborts the run.
//!
//! Pages are parsed as delivered by the server. Content produced by
//! client-side scripts is not executed.

use crate::config::{FetchConfig, UserAgentConfig};
use crate::dom::Document;
use crate::ScrapeError;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Identification sent with every request
/// * `fetch` - Timeouts and redirect limit
///
/// # Example
///
/// ```no_run
/// use policy_scout::config::Config;
/// use policy_scout::scrape::build_http_client;
///
/// let config = Config::default();
/// let client = build_http_client(&config.user_agent, &config.fetch).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetch: &FetchConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(fetch.connect_timeout_secs))
        .redirect(Policy::limited(fetch.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// A fetched and parsed page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Where the page was served from once redirects were followed
    pub url: Url,

    pub document: Document,
}

/// Fetches pages and parses them into markup trees
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(user_agent: &UserAgentConfig, fetch: &FetchConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: build_http_client(user_agent, fetch)?,
        })
    }

    /// Fetches `url` and returns its parsed markup tree
    ///
    /// The returned page's `url` is the final URL after redirects, which is
    /// the base relative links on the page resolve against.
    ///
    /// # Errors
    ///
    /// * `ScrapeError::Http` - connection, timeout, redirect or body read failure
    /// * `ScrapeError::HttpStatus` - the final response was not 2xx
    pub async fn render(&self, url: &Url) -> Result<RenderedPage, ScrapeError> {
        let (final_url, html) = self.fetch_html(url).await?;
        let document = Document::parse(&html);
        tracing::debug!("Parsed {} nodes from {}", document.len(), final_url);
        Ok(RenderedPage {
            url: final_url,
            document,
        })
    }

    /// Fetches the raw body of `url` along with the final URL it came from
    pub async fn fetch_html(&self, url: &Url) -> Result<(Url, String), ScrapeError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScrapeError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        if &final_url != url {
            tracing::debug!("{} redirected to {}", url, final_url);
        }

        let body = response.text().await.map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!("Fetched {} bytes from {} ({})", body.len(), final_url, status);
        Ok((final_url, body))
    }
}
