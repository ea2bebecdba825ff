use crate::schema::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fragmapper")]
#[command(about = "Map fragrance descriptions to canonical catalog URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a custom rules file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the full envelope details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map an input text in the given mode
    Map {
        /// The mode to execute
        #[arg(short, long, value_enum)]
        mode: Mode,

        /// The input text to process
        #[arg(required = true)]
        input: String,

        /// Output the full JSON envelope instead of the simple string
        #[arg(short, long)]
        json: bool,
    },

    /// List supported modes
    Modes,

    /// Show version information for the router and all skills
    Version,
}
