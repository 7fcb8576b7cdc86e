#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod env;
pub mod logging;
pub mod probe;
pub mod udc;
pub mod wallet;

pub use probe::{
    parse_predeployed_accounts, EndpointProbe, EndpointReport, PredeployedAccount, ProbeError,
    ProbeReport,
};
pub use udc::{UdcDeployment, UdcError};
pub use wallet::{Invoke, WalletCli, WalletCommand, WalletError, WalletOutput};
