use std::fmt;

use crate::extractor::Discovery;

/// One line of standard output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<'a> {
    /// printed before a page is fetched
    Scraping(&'a str),

    /// an MP3 link found on the page
    Found(&'a Discovery),

    /// neither scan matched anything
    NoResult(&'a str),

    /// the page could not be processed
    Failed { url: &'a str, message: String },
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Scraping(url) => write!(f, "Scraping {}...", url),
            Report::Found(discovery) => write!(f, "{}", discovery),
            Report::NoResult(url) => write!(f, "No MP3 found on {}", url),
            Report::Failed { url, message } => write!(f, "Error scraping {}: {}", url, message),
        }
    }
}
