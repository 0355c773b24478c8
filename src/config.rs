use std::time::Duration;

/// Desktop Chrome user agent sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Total time allowed for a single page request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Pages scraped on every run, in order
pub const DEFAULT_TARGETS: &[&str] = &[
    "https://bigsoundbank.com/detail-0863-horse-neighing-3.html",
    "https://www.freesoundslibrary.com/horse-neigh-sound-effect/",
];

/// Settings for a scrape run
///
/// Nothing here is read from the command line or a file; `Default` carries the
/// values the binary runs with, and tests build their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// pages to visit, processed in order
    pub targets: Vec<String>,

    /// value of the `User-Agent` header
    pub user_agent: String,

    /// request timeout covering connect, send and body read
    pub timeout: Duration,
}

impl Configuration {
    /// default settings aimed at `targets` instead of the embedded list
    pub fn with_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
