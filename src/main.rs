use clap::Parser as _;
use miette::Result;

use nvdq::cli::{Cli, Commands};
use nvdq::commands;
use nvdq::config::Config;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "nvdq=debug" } else { "nvdq=warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Show(args) => commands::show::run(args, &config),
        Commands::Json(args) => commands::json::run(args, &config),
    }
}
