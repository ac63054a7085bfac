//! Breach lookup against the Have I Been Pwned range API.
//!
//! The core never sees the network: it talks to a [`BreachChecker`]
//! capability that fails open. Only the first 5 hex characters of the
//! password's SHA-1 digest leave the process; the remaining 35 are compared
//! locally against the returned candidate list (k-anonymity).

use std::future::Future;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

const HIBP_BASE_URL: &str = "https://api.pwnedpasswords.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Hex digits of the digest prefix sent to the remote service.
pub const RANGE_PREFIX_LEN: usize = 5;

/// Outcome of a breach lookup.
///
/// `Unknown` covers every transport, service or cancellation failure: the
/// collaborator being unreachable never blocks or fails a strength
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// The password appears in the breach corpus.
    Breached,
    /// The password does not appear in the breach corpus.
    Clear,
    /// The lookup could not be completed.
    Unknown,
}

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Breach lookup request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Capability to report whether a password is known-compromised.
///
/// Implementations must fail open: any internal error is reported as
/// [`BreachStatus::Unknown`], never propagated.
pub trait BreachChecker {
    fn check(&self, password: &SecretString) -> impl Future<Output = BreachStatus> + Send;
}

/// HTTP client for the HIBP range endpoint.
#[derive(Debug, Clone)]
pub struct HibpClient {
    http: reqwest::Client,
}

impl HibpClient {
    /// Builds a client with the default request timeout.
    pub fn new() -> Result<Self, BreachError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Builds a client bounded by `timeout` per lookup.
    pub fn with_timeout(timeout: Duration) -> Result<Self, BreachError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Performs one range lookup, surfacing transport errors.
    ///
    /// Prefer [`BreachChecker::check`] which maps errors to
    /// [`BreachStatus::Unknown`].
    pub async fn lookup(&self, password: &SecretString) -> Result<bool, BreachError> {
        let (prefix, suffix) = range_key(password);
        let url = format!("{HIBP_BASE_URL}/range/{prefix}");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(suffix_in_range(&body, &suffix))
    }
}

impl BreachChecker for HibpClient {
    fn check(&self, password: &SecretString) -> impl Future<Output = BreachStatus> + Send {
        async move {
            match self.lookup(password).await {
                Ok(true) => BreachStatus::Breached,
                Ok(false) => BreachStatus::Clear,
                Err(_error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Breach lookup failed, treating as unknown: {}", _error);
                    BreachStatus::Unknown
                }
            }
        }
    }
}

/// Runs a breach lookup and sends the status over a channel.
///
/// Cancelling `token` resolves the lookup to [`BreachStatus::Unknown`]
/// without touching any concurrent strength evaluation.
pub async fn check_breached_tx<C>(
    checker: &C,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<BreachStatus>,
) where
    C: BreachChecker + Sync,
{
    let status = tokio::select! {
        biased;
        _ = token.cancelled() => BreachStatus::Unknown,
        status = checker.check(password) => status,
    };

    if let Err(_error) = tx.send(status).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send breach status: {}", _error);
    }
}

/// Splits the uppercase hex SHA-1 digest of `password` into the 5-character
/// range prefix and the 35-character local suffix.
fn range_key(password: &SecretString) -> (String, String) {
    let mut hasher = Sha1::new();
    hasher.update(password.expose_secret().as_bytes());
    let digest = format!("{:X}", hasher.finalize());

    let (prefix, suffix) = digest.split_at(RANGE_PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}

/// Scans a range response (`SUFFIX:COUNT` per line) for the local suffix.
fn suffix_in_range(body: &str, suffix: &str) -> bool {
    body.lines().any(|line| {
        line.split_once(':')
            .is_some_and(|(candidate, _count)| candidate.trim().eq_ignore_ascii_case(suffix))
    })
}
