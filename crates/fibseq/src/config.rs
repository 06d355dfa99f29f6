//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibseq_core::DEFAULT_COUNT;

/// fibseq — print the Fibonacci sequence and time its generation.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Highest sequence index to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, env = "FIBSEQ_N")]
    pub count: u32,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
