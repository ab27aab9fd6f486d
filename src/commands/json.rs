use clap::Args as ClapArgs;
use miette::IntoDiagnostic as _;

use crate::config::Config;
use crate::nvd::NvdClient;

#[derive(ClapArgs)]
pub struct Args {
    /// CVE identifier to look up
    pub cve_id: String,
}

pub fn run(args: Args, config: &Config) -> miette::Result<()> {
    let client = NvdClient::new(config);

    let response = super::block_on_runtime_aware(async {
        client.get_cve(&args.cve_id).await.into_diagnostic()
    })?;

    let raw = serde_json::to_string_pretty(&response).into_diagnostic()?;
    println!("{raw}");

    Ok(())
}
