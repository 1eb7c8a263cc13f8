use thiserror::Error;

/// Top-level error type for the `wlc-api` crate.
///
/// Only caller-side failures surface here: MAC-address validation and client
/// construction. Connectivity failures are never returned as errors -- the
/// request primitive retries them and degrades to the operation's negative
/// result (`false` or an empty list) with log output. See
/// [`WlcClient`](crate::restconf::WlcClient).
#[derive(Debug, Error)]
pub enum Error {
    // ── Input validation ────────────────────────────────────────────
    /// MAC address did not reduce to 12 hex characters after stripping
    /// separators.
    #[error("invalid MAC address {input:?}: expected 12 hex characters, got {len}")]
    InvalidMacLength { input: String, len: usize },

    /// MAC address contains a non-hexadecimal character.
    #[error("invalid MAC address {input:?}: invalid character {ch:?}")]
    InvalidMacChar { input: String, ch: char },

    // ── Construction ────────────────────────────────────────────────
    /// Controller host could not be turned into a base URL.
    #[error("invalid controller URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// CA bundle could not be loaded, or the HTTP client failed to build.
    #[error("TLS error: {0}")]
    Tls(String),
}

impl Error {
    /// Returns `true` if this error is a caller input error (invalid MAC),
    /// as opposed to a construction failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMacLength { .. } | Self::InvalidMacChar { .. }
        )
    }
}
