//! CLI parsing for nvdq

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "nvdq")]
#[command(about = "Terminal viewer for NVD CVE records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a CVE record and render it as a page
    Show(commands::show::Args),

    /// Fetch a CVE record and print the raw response as JSON
    Json(commands::json::Args),
}
