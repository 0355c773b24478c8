use std::io::Write;
use std::time::Instant;

use env_logger::{Builder, Env};

/// level used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "warn";

/// Install an env_logger that writes `[elapsed] LEVEL target: message` to stderr
///
/// Respects `RUST_LOG`; stdout stays reserved for the scrape report.
pub fn initialize() {
    let start = Instant::now();

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:>9.3}] {:<5} {}: {}",
                start.elapsed().as_secs_f32(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
