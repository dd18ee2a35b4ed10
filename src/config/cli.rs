use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "myna-tools")]
#[command(about = "Template filters and CSS build configuration for the myna site")]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip '/' and '-' from inputs to make HTML-safe identifiers
    Sanitize {
        /// Strings to sanitize; reads stdin lines when omitted
        input: Vec<String>,
    },

    /// Load and validate a build configuration
    Check {
        /// Path to the TOML build configuration
        config: PathBuf,
    },

    /// Emit the JSON configuration the CSS build tool consumes
    Emit {
        /// Path to the TOML build configuration
        config: PathBuf,

        #[arg(long, help = "Write JSON to this file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// List the content files matched by the purge globs
    Scan {
        /// Path to the TOML build configuration
        config: PathBuf,

        #[arg(long, default_value = ".", help = "Base directory for the globs")]
        base: PathBuf,
    },

    /// Write the default build configuration as TOML
    Init {
        /// Destination path; refuses to overwrite
        #[arg(default_value = "myna.toml")]
        path: PathBuf,
    },
}
