//! Calldata for deployments through the Universal Deployer Contract.

use std::str::FromStr;

use starknet::core::types::Felt;
use starknet::core::utils::get_contract_address;
use thiserror::Error;
use url::Url;

use crate::wallet::Invoke;

pub const UDC_ADDRESS: &str = "0x041a78e741e5af2fec34b695679bc6891742439f7afb8484ecd7766661ad02bf";
pub const UDC_DEPLOY_ENTRYPOINT: &str = "deployContract";

pub const DEFAULT_SALT: &str = "0x0";

/// `unique = false`: the deployed address does not depend on the caller.
const NOT_UNIQUE: &str = "0x0";

#[derive(Debug, Error)]
pub enum UdcError {
    #[error("`{value}` is not a valid field element ({field})")]
    InvalidFelt { field: &'static str, value: String },
}

/// A `deployContract` call on the UDC.
///
/// Values are kept as the strings handed over by the operator, so they reach the wallet
/// exactly as typed (leading zeros included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdcDeployment {
    pub class_hash: String,
    pub salt: String,
    pub constructor_calldata: Vec<String>,
}

impl UdcDeployment {
    pub fn new(class_hash: impl Into<String>, constructor_calldata: Vec<String>) -> Self {
        Self { class_hash: class_hash.into(), salt: DEFAULT_SALT.to_string(), constructor_calldata }
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    /// The full `deployContract` calldata:
    /// `[class_hash, salt, unique, calldata_len, ...constructor_calldata]`.
    pub fn calldata(&self) -> Vec<String> {
        let mut calldata = Vec::with_capacity(4 + self.constructor_calldata.len());
        calldata.push(self.class_hash.clone());
        calldata.push(self.salt.clone());
        calldata.push(NOT_UNIQUE.to_string());
        calldata.push(self.constructor_calldata.len().to_string());
        calldata.extend(self.constructor_calldata.iter().cloned());
        calldata
    }

    /// Address the UDC deploys to. With `unique = false` the deployer address is zero.
    pub fn expected_address(&self) -> Result<Felt, UdcError> {
        let class_hash = parse_felt("class hash", &self.class_hash)?;
        let salt = parse_felt("salt", &self.salt)?;
        let constructor_calldata = self
            .constructor_calldata
            .iter()
            .map(|value| parse_felt("constructor calldata", value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(get_contract_address(salt, class_hash, &constructor_calldata, Felt::ZERO))
    }

    pub fn invoke(&self, rpc_url: &Url, account: &str, private_key: &str) -> Invoke {
        Invoke {
            contract: UDC_ADDRESS.to_string(),
            entrypoint: UDC_DEPLOY_ENTRYPOINT.to_string(),
            calldata: self.calldata(),
            rpc_url: rpc_url.clone(),
            account: account.to_string(),
            private_key: private_key.to_string(),
        }
    }
}

fn parse_felt(field: &'static str, value: &str) -> Result<Felt, UdcError> {
    Felt::from_str(value).map_err(|_| UdcError::InvalidFelt { field, value: value.to_string() })
}
