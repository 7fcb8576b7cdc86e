use clap::{Parser, ValueEnum};
use devnet_utils::env::{
    default_launcher, DEVNET_ACCOUNT_ADDRESS, DEVNET_ACCOUNT_ADDRESS_ENV_VAR, DEVNET_PRIVATE_KEY,
    DEVNET_PRIVATE_KEY_ENV_VAR, DEVNET_RPC_URL, MOCK_BTC_CLASS_HASH, STARKLI_PATH,
    STARKLI_PATH_ENV_VAR, STARKNET_RPC_URL_ENV_VAR, VAULT_CLASS_HASH, WALLET_LAUNCHER_ENV_VAR,
};
use devnet_utils::udc::DEFAULT_SALT;
use devnet_utils::UdcDeployment;
use url::Url;

/// Declared classes that can be deployed without spelling out their class hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContractPreset {
    MockBtc,
    Vault,
}

impl ContractPreset {
    pub fn name(&self) -> &'static str {
        match self {
            ContractPreset::MockBtc => "MockBTC",
            ContractPreset::Vault => "Vault",
        }
    }

    pub fn class_hash(&self) -> &'static str {
        match self {
            ContractPreset::MockBtc => MOCK_BTC_CLASS_HASH,
            ContractPreset::Vault => VAULT_CLASS_HASH,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Deploy a declared class through the Universal Deployer Contract (UDC) using \
                   the starkli wallet.")]
pub struct DeployArgs {
    #[arg(long, env = STARKNET_RPC_URL_ENV_VAR, default_value = DEVNET_RPC_URL)]
    #[arg(value_name = "URL")]
    #[arg(help = "The Starknet RPC endpoint.")]
    pub rpc_url: Url,

    #[arg(long, env = DEVNET_ACCOUNT_ADDRESS_ENV_VAR, default_value = DEVNET_ACCOUNT_ADDRESS)]
    #[arg(value_name = "ADDRESS")]
    #[arg(help = "The account paying for the deployment.")]
    pub account_address: String,

    #[arg(long, env = DEVNET_PRIVATE_KEY_ENV_VAR, default_value = DEVNET_PRIVATE_KEY)]
    #[arg(hide_default_value = true, hide_env_values = true)]
    #[arg(help = "The raw private key associated with the account contract.")]
    pub private_key: String,

    #[arg(long, env = STARKLI_PATH_ENV_VAR, default_value = STARKLI_PATH)]
    #[arg(value_name = "PATH")]
    #[arg(help = "Path to the starkli executable.")]
    pub wallet_path: String,

    #[arg(long, env = WALLET_LAUNCHER_ENV_VAR, conflicts_with = "no_launcher")]
    #[arg(value_name = "PROGRAM")]
    #[arg(help = "Program the wallet is started through. Defaults to `wsl` on Windows.")]
    pub launcher: Option<String>,

    #[arg(long, help = "Run the wallet directly, without any launcher.")]
    pub no_launcher: bool,

    #[arg(long, value_enum, default_value_t = ContractPreset::MockBtc)]
    #[arg(conflicts_with = "class_hash")]
    #[arg(help = "Declared contract to deploy.")]
    pub contract: ContractPreset,

    #[arg(long, value_name = "CLASS_HASH")]
    #[arg(help = "Deploy this class hash instead of a preset.")]
    pub class_hash: Option<String>,

    #[arg(long, default_value = DEFAULT_SALT, help = "Salt to use for the deployment.")]
    pub salt: String,

    #[arg(long, value_name = "ARG", num_args = 0..)]
    #[arg(required_if_eq("contract", "vault"))]
    #[arg(help = "Constructor calldata elements (space separated). Defaults to the account \
                  address for MockBTC.")]
    pub constructor_calldata: Option<Vec<String>>,

    #[clap(help = "Logging verbosity.")]
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

impl DeployArgs {
    /// Human readable name of what is being deployed.
    pub fn target_name(&self) -> &str {
        match &self.class_hash {
            Some(class_hash) => class_hash,
            None => self.contract.name(),
        }
    }

    pub fn deployment(&self) -> UdcDeployment {
        let class_hash = match &self.class_hash {
            Some(class_hash) => class_hash.clone(),
            None => self.contract.class_hash().to_string(),
        };

        let constructor_calldata = match &self.constructor_calldata {
            Some(calldata) => calldata.clone(),
            // The MockBTC token is owned by the deploying account.
            None if self.class_hash.is_none() && self.contract == ContractPreset::MockBtc => {
                vec![self.account_address.clone()]
            }
            None => Vec::new(),
        };

        UdcDeployment::new(class_hash, constructor_calldata).with_salt(self.salt.clone())
    }

    pub fn launcher(&self) -> Option<String> {
        if self.no_launcher {
            return None;
        }

        self.launcher.clone().or_else(|| default_launcher().map(String::from))
    }
}
