#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use devnet_utils::logging::init_logging;
use devnet_utils::probe::DEVNET_ENDPOINTS;
use devnet_utils::{parse_predeployed_accounts, EndpointProbe};
use tracing::{info, warn};

mod args;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let _ = init_logging(&args.verbose, &["find_devnet_accounts", "devnet_utils"]);

    if let Err(err) = run(args).await {
        eprintln!("Error: {err:#}");
    }
}

async fn run(args: Args) -> Result<()> {
    info!(url = %args.rpc_url, "Probing devnet endpoints.");

    let probe = EndpointProbe::new(args.rpc_url.clone(), args.timeout())
        .context("Failed to build the HTTP client")?;

    let mut stdout = io::stdout();
    let report = probe
        .probe_all(DEVNET_ENDPOINTS, args.stop_on_success, &mut stdout)
        .await
        .context("Failed to write the probe results")?;

    for (path, body) in report.successes() {
        let Some(accounts) = parse_predeployed_accounts(body) else {
            continue;
        };

        info!(path, count = accounts.len(), "Found predeployed accounts.");
        for account in accounts {
            info!(
                address = %account.address,
                initial_balance = %account.initial_balance,
                "Predeployed account."
            );
        }
    }

    if report.first_success().is_none() {
        warn!(url = %probe.base_url(), "No endpoint answered.");
    }

    Ok(())
}
