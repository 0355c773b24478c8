use std::io::Write;

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use crate::{
    client::Fetch,
    config::Configuration,
    extractor::extract,
    report::Report,
};

/// How a single page ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// this many links were printed
    Found(usize),

    /// the page was fetched but held no MP3 link
    Empty,

    /// the fetch failed and an error line was printed
    Failed,
}

/// Totals over a whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: usize,
    pub links: usize,
    pub failures: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: PageOutcome) {
        self.pages += 1;
        match outcome {
            PageOutcome::Found(n) => self.links += n,
            PageOutcome::Empty => {}
            PageOutcome::Failed => self.failures += 1,
        }
    }
}

/// Walks the configured targets one after the other and prints what it finds
pub struct Runner<'a, F: Fetch> {
    config: &'a Configuration,
    fetcher: F,
    bar: ProgressBar,
}

impl<'a, F: Fetch> Runner<'a, F> {
    pub fn new(config: &'a Configuration, fetcher: F, bar: ProgressBar) -> Self {
        Self {
            config,
            fetcher,
            bar,
        }
    }

    /// process every target in order; a failing page never stops the run
    ///
    /// Only a failure to write to `out` is returned as an error.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for url in &self.config.targets {
            self.bar.set_message(url.clone());
            let outcome = self.scrape_page(url, out)?;
            summary.record(outcome);
            self.bar.inc(1);
        }

        self.bar.finish_and_clear();
        out.flush().context("Could not flush the report")?;

        log::info!(
            "scraped {} page(s): {} link(s) found, {} failure(s)",
            summary.pages,
            summary.links,
            summary.failures
        );

        Ok(summary)
    }

    /// fetch, scan and report a single page
    pub fn scrape_page<W: Write>(&self, url: &str, out: &mut W) -> Result<PageOutcome> {
        log::trace!("enter: scrape_page({})", url);

        self.emit(out, &Report::Scraping(url))?;

        let body = match self.fetcher.fetch(url) {
            Ok(body) => body,
            Err(e) => {
                log::warn!("{}: {:#}", url, e);
                self.emit(
                    out,
                    &Report::Failed {
                        url,
                        message: format!("{:#}", e),
                    },
                )?;
                return Ok(PageOutcome::Failed);
            }
        };

        let discoveries = extract(&body, url);

        if discoveries.is_empty() {
            self.emit(out, &Report::NoResult(url))?;
            return Ok(PageOutcome::Empty);
        }

        for discovery in &discoveries {
            self.emit(out, &Report::Found(discovery))?;
        }

        Ok(PageOutcome::Found(discoveries.len()))
    }

    /// write one report line with the progress bar out of the way
    fn emit<W: Write>(&self, out: &mut W, report: &Report<'_>) -> Result<()> {
        self.bar
            .suspend(|| writeln!(out, "{}", report))
            .context("Could not write to the report")
    }
}
