use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Bar counting processed pages, drawn on stderr
///
/// indicatif stops drawing on its own when stderr is not a terminal; `hidden`
/// forces that regardless.
pub fn page_bar(length: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::with_draw_target(Some(length), ProgressDrawTarget::stderr());

    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
    {
        bar.set_style(style.progress_chars("#>-"));
    }

    bar
}
