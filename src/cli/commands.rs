//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagtrack")]
#[command(about = "Track [!name]/[~name] marker pairs in documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List marker occurrences in a file or directory tree
    Scan {
        /// File or directory to scan (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show statistics for one marker name in a document
    Stats {
        /// Document to inspect
        file: PathBuf,

        /// Marker name, without brackets or sigil
        name: String,
    },

    /// Report marker names whose opening and closing counts differ
    Check {
        /// File or directory to check (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List the unique marker literals in a file or directory tree
    Tags {
        /// File or directory to list (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
