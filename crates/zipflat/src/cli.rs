use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::Level;
use zipflat::{DEFAULT_EXTENSION, DEFAULT_MAX_DEPTH, FlattenOptions};

#[derive(Clone, Debug, Parser)]
#[command(name = "zipflat", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Folder to process; prompted for on stdin when omitted
    #[arg(env = "ZIPFLAT_ROOT")]
    pub root: Option<PathBuf>,

    /// Archive extension to expand
    #[arg(long, env = "ZIPFLAT_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Deepest archive-inside-archive level to expand
    #[arg(long, env = "ZIPFLAT_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn options(&self) -> FlattenOptions {
        FlattenOptions::new()
            .extension(&self.extension)
            .max_depth(self.max_depth)
    }
}
