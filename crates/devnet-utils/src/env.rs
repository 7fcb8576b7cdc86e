//! Defaults for the local devnet and the environment variables that override them.

pub const STARKNET_RPC_URL_ENV_VAR: &str = "STARKNET_RPC_URL";
pub const DEVNET_ACCOUNT_ADDRESS_ENV_VAR: &str = "DEVNET_ACCOUNT_ADDRESS";
pub const DEVNET_PRIVATE_KEY_ENV_VAR: &str = "DEVNET_PRIVATE_KEY";
pub const STARKLI_PATH_ENV_VAR: &str = "STARKLI_PATH";
pub const WALLET_LAUNCHER_ENV_VAR: &str = "WALLET_LAUNCHER";

pub const DEVNET_RPC_URL: &str = "http://127.0.0.1:5060";

/// Predeployed account of the devnet (seeded, not a real secret).
pub const DEVNET_ACCOUNT_ADDRESS: &str =
    "0x064b48806902a367c8598f4f95c305e8c1a1acba5f082d294a43793113115691";
pub const DEVNET_PRIVATE_KEY: &str =
    "0x0000000000000000000000000000000071d7bb07b9a64f6f78ac4c816aff4da9";

// Declared class hashes.
pub const MOCK_BTC_CLASS_HASH: &str =
    "0x04dbf6009feb48d7a1100d9c5aeb7607f7dfc02d8f984fe7f8ac8d7d79a5189b";
pub const VAULT_CLASS_HASH: &str =
    "0x067f2255713ea2c7abdafcfa8978013c0856e2f77841432e1b9598a66b0df9a2";

pub const STARKLI_PATH: &str = "/home/sl/.starkli/bin/starkli";

/// The wallet lives inside WSL when the scripts run from a Windows host.
pub fn default_launcher() -> Option<&'static str> {
    if cfg!(windows) {
        Some("wsl")
    } else {
        None
    }
}
