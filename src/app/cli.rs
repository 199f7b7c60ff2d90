use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "Permission Auditor Svjpr0uf",
    version,
    about = "A fast CLI utility to audit files and directories straight from the terminal."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Accepted for compatibility; inspection never writes anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose || self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
