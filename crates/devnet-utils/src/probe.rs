//! Discovery of the HTTP endpoints exposed by a local devnet.

use std::io::{self, Write};
use std::string::FromUtf8Error;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

/// Paths probed, in order, to find the predeployed accounts of the devnet.
pub const DEVNET_ENDPOINTS: [&str; 5] =
    ["/predeployed_accounts", "/predeployed-accounts", "/accounts", "/config", "/version"];

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid endpoint `{path}`: {source}")]
    InvalidUrl { path: String, source: url::ParseError },
    #[error("connection to {url} failed: {source}")]
    Connect { url: Url, source: reqwest::Error },
    #[error("request to {url} timed out")]
    Timeout { url: Url },
    #[error("HTTP Error {} {} for {url}", .status.as_u16(), .status.canonical_reason().unwrap_or("Unknown"))]
    Status { url: Url, status: StatusCode },
    #[error("failed to read response body from {url}: {source}")]
    Body { url: Url, source: reqwest::Error },
    #[error("failed to decode response body from {url}: {source}")]
    Decode { url: Url, source: FromUtf8Error },
    #[error("request to {url} failed: {source}")]
    Request { url: Url, source: reqwest::Error },
}

impl ProbeError {
    fn from_send(url: Url, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { url }
        } else if source.is_connect() {
            Self::Connect { url, source }
        } else {
            Self::Request { url, source }
        }
    }
}

/// Outcome of a single endpoint.
#[derive(Debug)]
pub struct EndpointReport {
    pub path: String,
    pub outcome: Result<String, ProbeError>,
}

#[derive(Debug, Default)]
pub struct ProbeReport {
    pub endpoints: Vec<EndpointReport>,
}

impl ProbeReport {
    /// The first endpoint that answered, with its body.
    pub fn first_success(&self) -> Option<(&str, &str)> {
        self.endpoints.iter().find_map(|report| match &report.outcome {
            Ok(body) => Some((report.path.as_str(), body.as_str())),
            Err(_) => None,
        })
    }

    pub fn successes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.endpoints.iter().filter_map(|report| match &report.outcome {
            Ok(body) => Some((report.path.as_str(), body.as_str())),
            Err(_) => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct EndpointProbe {
    client: Client,
    base_url: Url,
}

impl EndpointProbe {
    /// Without a timeout, a request waits as long as the node keeps the connection open.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { client: builder.build()?, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute paths replace any path of the base URL: `http://host/rpc` + `/version` is
    /// `http://host/version`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ProbeError> {
        self.base_url
            .join(path)
            .map_err(|source| ProbeError::InvalidUrl { path: path.to_string(), source })
    }

    /// GET the given path, returning the body of a 2xx response. The body must be valid UTF-8.
    pub async fn fetch(&self, path: &str) -> Result<String, ProbeError> {
        let url = self.endpoint(path)?;
        debug!(%url, "Probing endpoint.");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ProbeError::from_send(url.clone(), source))?;

        let status = response.status();
        trace!(%url, %status, "Endpoint answered.");

        if !status.is_success() {
            return Err(ProbeError::Status { url, status });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ProbeError::Body { url: url.clone(), source })?;

        String::from_utf8(bytes.to_vec()).map_err(|source| ProbeError::Decode { url, source })
    }

    /// Probes the paths one after the other, writing one line per endpoint to `out`.
    ///
    /// A failing endpoint never interrupts the iteration. When `stop_on_success` is set, the
    /// remaining paths are skipped once an endpoint answers.
    pub async fn probe_all<W, I, P>(
        &self,
        paths: I,
        stop_on_success: bool,
        out: &mut W,
    ) -> io::Result<ProbeReport>
    where
        W: Write,
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut report = ProbeReport::default();

        for path in paths {
            let path = path.as_ref();
            let outcome = self.fetch(path).await;

            match &outcome {
                Ok(body) => writeln!(out, "Success on {path}: {body}")?,
                Err(e) => writeln!(out, "Error: {e}")?,
            }

            let done = stop_on_success && outcome.is_ok();
            report.endpoints.push(EndpointReport { path: path.to_string(), outcome });

            if done {
                break;
            }
        }

        Ok(report)
    }
}

/// An account funded by the devnet at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredeployedAccount {
    pub address: String,
    pub public_key: String,
    pub private_key: String,
    pub initial_balance: String,
    #[serde(default)]
    pub balance: Option<serde_json::Value>,
}

/// `None` when the body is not a list of predeployed accounts.
pub fn parse_predeployed_accounts(body: &str) -> Option<Vec<PredeployedAccount>> {
    serde_json::from_str(body).ok()
}
