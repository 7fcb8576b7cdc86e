#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use anyhow::{Context, Result};
use args::{ContractPreset, DeployArgs};
use clap::Parser;
use devnet_utils::logging::init_logging;
use devnet_utils::WalletCli;
use tracing::{info, warn};

mod args;

// The wallet's outcome is only reported: this script exits successfully whatever happens
// to the deployment.
fn main() {
    let args = DeployArgs::parse();
    let _ = init_logging(&args.verbose, &["deploy_udc", "devnet_utils"]);

    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
    }
}

fn run(args: DeployArgs) -> Result<()> {
    let deployment = args.deployment();

    println!("Deploying {}...", args.target_name());

    let invoke = deployment.invoke(&args.rpc_url, &args.account_address, &args.private_key);
    let command = WalletCli::new(&args.wallet_path).with_launcher(args.launcher()).command(&invoke);

    println!("Running: {command}");
    let output = command.run().context("Failed to run the wallet")?;
    println!("{}", output.stdout);
    println!("{}", output.stderr);

    if output.success() {
        info!(status = %output.status, "Wallet exited.");
    } else {
        warn!(status = %output.status, "Wallet exited with a failure status.");
    }

    match deployment.expected_address() {
        Ok(address) => println!("Expected contract address: {address:#066x}"),
        Err(e) => warn!(%e, "Cannot compute the expected contract address."),
    }

    println!();
    println!("Check the transaction on the devnet to confirm the contract address.");
    if args.class_hash.is_none() && args.contract == ContractPreset::MockBtc {
        println!(
            "Then deploy the vault with that address as constructor argument: \
             `deploy_udc --contract vault --constructor-calldata <MOCK_BTC_ADDRESS>`"
        );
    }

    Ok(())
}
