use std::time::Duration;

use clap::Parser;
use devnet_utils::env::{DEVNET_RPC_URL, STARKNET_RPC_URL_ENV_VAR};
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Find which HTTP endpoints of a local devnet expose its predeployed accounts.")]
pub struct Args {
    #[arg(long, env = STARKNET_RPC_URL_ENV_VAR, default_value = DEVNET_RPC_URL)]
    #[arg(value_name = "URL")]
    #[arg(help = "Base URL of the devnet.")]
    pub rpc_url: Url,

    #[arg(long, value_name = "SECONDS")]
    #[arg(help = "Per-request timeout. Requests wait indefinitely when not set.")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Stop at the first endpoint that answers.")]
    pub stop_on_success: bool,

    #[clap(help = "Logging verbosity.")]
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}
