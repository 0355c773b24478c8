//! Scrape a fixed list of pages for MP3 links.
//!
//! Each page is fetched once, parsed, and scanned for `<a href>` values and
//! `<audio><source src>` values mentioning `.mp3`. Matches are resolved
//! against the page URL and printed one per line.

pub mod client;
pub mod config;
pub mod extractor;
pub mod logger;
pub mod progress;
pub mod report;
pub mod resolve;
pub mod runner;
