//! The wallet CLI (starkli) runs as a child process. Nothing here signs or sends a
//! transaction itself: the wallet does it, and its output is handed back untouched.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn { program: String, source: io::Error },
}

/// An `invoke` of a contract entrypoint, as understood by the wallet CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoke {
    pub contract: String,
    pub entrypoint: String,
    pub calldata: Vec<String>,
    pub rpc_url: Url,
    pub account: String,
    pub private_key: String,
}

#[derive(Debug, Clone)]
pub struct WalletCli {
    program: String,
    /// Program the wallet is started through (e.g. `wsl`), if any.
    launcher: Option<String>,
}

impl WalletCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), launcher: None }
    }

    pub fn with_launcher(mut self, launcher: Option<String>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn command(&self, invoke: &Invoke) -> WalletCommand {
        let mut args = Vec::with_capacity(invoke.calldata.len() + 10);

        let program = match &self.launcher {
            Some(launcher) => {
                args.push(self.program.clone());
                launcher.clone()
            }
            None => self.program.clone(),
        };

        args.push("invoke".to_string());
        args.push(invoke.contract.clone());
        args.push(invoke.entrypoint.clone());
        args.extend(invoke.calldata.iter().cloned());
        args.push("--rpc".to_string());
        args.push(invoke.rpc_url.to_string());
        args.push("--account".to_string());
        args.push(invoke.account.clone());
        args.push("--private-key".to_string());
        args.push(invoke.private_key.clone());

        WalletCommand { program, args }
    }
}

/// A fully built command line, ready to be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletCommand {
    program: String,
    args: Vec<String>,
}

impl WalletCommand {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command to completion, capturing both output streams.
    ///
    /// A non-zero exit status is not an error: it is reported in [`WalletOutput::status`].
    /// Blocks until the child exits, there is no timeout.
    pub fn run(&self) -> Result<WalletOutput, WalletError> {
        debug!(program = %self.program, "Spawning wallet.");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| WalletError::Spawn { program: self.program.clone(), source })?;

        trace!(status = %output.status, "Wallet exited.");

        Ok(WalletOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl fmt::Display for WalletCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct WalletOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl WalletOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}
