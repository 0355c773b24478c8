use anyhow::{Context, Result};
use reqwest::blocking::Client;

use crate::config::Configuration;

/// Source of raw page bodies
pub trait Fetch {
    /// retrieve the body found at `url`
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher; one GET per call, no retries
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// build the underlying client with the configured user agent and timeout
    pub fn new(config: &Configuration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .context("Could not build the HTTP client")?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    /// GET `url` and return the body bytes, whatever the status code
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        log::trace!("enter: fetch({})", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.bytes()?;

        log::debug!("{} responded {} with {} bytes", url, status, body.len());

        Ok(body.to_vec())
    }
}
