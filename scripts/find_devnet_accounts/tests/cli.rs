use httpmock::prelude::*;
use snapbox::cmd::{cargo_bin, Command};

fn find_devnet_accounts(url: &str) -> Command {
    Command::new(cargo_bin("find_devnet_accounts"))
        .env_remove("STARKNET_RPC_URL")
        .env_remove("RUST_LOG")
        .args(["--rpc-url", url])
}

#[test]
fn reports_every_endpoint_in_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/version");
        then.status(200).body("0.2.0");
    });

    let assert = find_devnet_accounts(&server.base_url()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5, "{stdout}");
    assert!(lines[0].starts_with("Error: ") && lines[0].ends_with("/predeployed_accounts"));
    assert!(lines[1].starts_with("Error: ") && lines[1].ends_with("/predeployed-accounts"));
    assert!(lines[2].starts_with("Error: ") && lines[2].ends_with("/accounts"));
    assert!(lines[3].starts_with("Error: ") && lines[3].ends_with("/config"));
    assert_eq!(lines[4], "Success on /version: 0.2.0");
}

#[test]
fn logs_predeployed_accounts() {
    let server = MockServer::start();
    let body = r#"[{"initial_balance":"1000","address":"0x64b4","public_key":"0x39d9","private_key":"0x71d7"}]"#;
    server.mock(|when, then| {
        when.method(GET).path("/predeployed_accounts");
        then.status(200).body(body);
    });

    let assert =
        find_devnet_accounts(&server.base_url()).arg("--stop-on-success").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    assert_eq!(stdout, format!("Success on /predeployed_accounts: {body}\n"));
    assert!(stderr.contains("Found predeployed accounts."), "{stderr}");
    assert!(stderr.contains("0x64b4"), "{stderr}");
}

#[test]
fn unreachable_node_still_exits_successfully() {
    let assert = find_devnet_accounts("http://127.0.0.1:9").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();

    assert_eq!(stdout.lines().count(), 5, "{stdout}");
    assert!(stdout.lines().all(|line| line.starts_with("Error: ")), "{stdout}");
}
