use std::io;

use anyhow::Result;

use mp3_scout::{
    client::HttpFetcher, config::Configuration, logger, progress::page_bar, runner::Runner,
};

fn main() -> Result<()> {
    logger::initialize();

    let config = Configuration::default();
    let fetcher = HttpFetcher::new(&config)?;
    let bar = page_bar(config.targets.len() as u64, false);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    Runner::new(&config, fetcher, bar).run(&mut out)?;

    Ok(())
}
