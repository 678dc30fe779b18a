use serde::Deserialize;

/// Homepage scraped when no configuration overrides it
pub const DEFAULT_PAGE_URL: &str = "https://www.cfcunderwriting.com";

/// Text of the link followed to the second page
pub const DEFAULT_SEARCH_TEXT: &str = "Privacy Policy";

/// Last visible string of the reference site's body, before the footer boilerplate
pub const DEFAULT_TERMINATOR: &str = "© 2023 CFC Underwriting Ltd";

/// Main configuration structure for Policy-Scout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// What to scrape and where to stop counting
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Homepage of the target site
    #[serde(rename = "page-url")]
    pub page_url: String,

    /// Exact text of the link to follow from the homepage
    #[serde(rename = "search-text")]
    pub search_text: String,

    /// Last visible string of the followed page; text after it is ignored
    pub terminator: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            search_text: DEFAULT_SEARCH_TEXT.to_string(),
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }
}

/// HTTP client behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of redirects followed per request
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for scraper-related contact (optional)
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "policy-scout".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/policy-scout/policy-scout".to_string(),
            contact_email: String::new(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        if self.contact_email.is_empty() {
            format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, self.contact_url
            )
        } else {
            format!(
                "{}/{} (+{}; {})",
                self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
            )
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the three JSON files are written to
    pub directory: String,

    /// Base name of the external-resource records file
    #[serde(rename = "resources-name")]
    pub resources_name: String,

    /// Base name of the hyperlink records file
    #[serde(rename = "links-name")]
    pub links_name: String,

    /// Base name of the word-frequency file
    #[serde(rename = "frequency-name")]
    pub frequency_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            resources_name: "resources".to_string(),
            links_name: "links".to_string(),
            frequency_name: "frequency".to_string(),
        }
    }
}
