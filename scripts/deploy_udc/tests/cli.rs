use devnet_utils::env::{
    DEVNET_ACCOUNT_ADDRESS, DEVNET_ACCOUNT_ADDRESS_ENV_VAR, DEVNET_PRIVATE_KEY,
    DEVNET_PRIVATE_KEY_ENV_VAR, MOCK_BTC_CLASS_HASH, STARKLI_PATH_ENV_VAR,
    STARKNET_RPC_URL_ENV_VAR, WALLET_LAUNCHER_ENV_VAR,
};
use devnet_utils::udc::UDC_ADDRESS;
use snapbox::cmd::{cargo_bin, Command};

fn deploy_udc() -> Command {
    Command::new(cargo_bin("deploy_udc"))
        .env_remove(STARKNET_RPC_URL_ENV_VAR)
        .env_remove(DEVNET_ACCOUNT_ADDRESS_ENV_VAR)
        .env_remove(DEVNET_PRIVATE_KEY_ENV_VAR)
        .env_remove(STARKLI_PATH_ENV_VAR)
        .env_remove(WALLET_LAUNCHER_ENV_VAR)
}

#[cfg(unix)]
#[test]
fn wallet_receives_udc_invoke() {
    let assert = deploy_udc().args(["--wallet-path", "echo", "--no-launcher"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    let invoke = format!(
        "invoke {UDC_ADDRESS} deployContract {MOCK_BTC_CLASS_HASH} 0x0 0x0 1 \
         {DEVNET_ACCOUNT_ADDRESS} --rpc http://127.0.0.1:5060/ --account \
         {DEVNET_ACCOUNT_ADDRESS} --private-key {DEVNET_PRIVATE_KEY}"
    );

    assert!(stdout.starts_with("Deploying MockBTC...\n"), "{stdout}");
    assert!(stdout.contains(&format!("Running: echo {invoke}\n")), "{stdout}");
    // `echo` hands the arguments back on stdout.
    assert!(stdout.contains(&format!("\n{invoke}\n")), "{stdout}");
    assert!(stdout.contains("Expected contract address: 0x"), "{stdout}");
    assert!(stdout.contains("--contract vault"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn wallet_runs_through_launcher() {
    let assert = deploy_udc()
        .args(["--wallet-path", "/opt/starkli", "--launcher", "echo", "--class-hash", "0xabc"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.starts_with("Deploying 0xabc...\n"), "{stdout}");
    let echoed = format!("\n/opt/starkli invoke {UDC_ADDRESS} deployContract 0xabc 0x0 0x0 0 --rpc");
    assert!(stdout.contains(&echoed), "{stdout}");
    assert!(!stdout.contains("--contract vault"), "{stdout}");
}

#[cfg(unix)]
#[test]
fn failing_wallet_still_exits_successfully() {
    let assert = deploy_udc().args(["--wallet-path", "false", "--no-launcher"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert!(stdout.contains("Running: false invoke"), "{stdout}");
}

#[test]
fn missing_wallet_is_reported() {
    let assert = deploy_udc()
        .args(["--wallet-path", "/definitely/not/starkli", "--no-launcher"])
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stderr.contains("Error: Failed to run the wallet: failed to spawn"), "{stderr}");
    assert!(stderr.contains("/definitely/not/starkli"), "{stderr}");
}

#[test]
fn vault_without_calldata_is_rejected() {
    deploy_udc().args(["--contract", "vault"]).assert().failure();
}
