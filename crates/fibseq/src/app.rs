//! Application entry point and dispatch.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use fibseq_cli::presenter::CliPresenter;
use fibseq_core::{sequence, timing};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibseq_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut presenter = CliPresenter::new(stdout.lock());

    debug!(count = config.count, "generating sequence");

    // The measured window covers generation and line output, matching the
    // routine measured as a whole.
    let timed = timing::time(|| {
        let seq = sequence::generate(config.count);
        presenter.present_sequence(&seq)
    });
    timed.value.context("failed to write sequence")?;

    presenter
        .present_elapsed(timed.elapsed)
        .context("failed to write timing line")?;
    presenter.finish().context("failed to flush output")?;

    Ok(())
}
