// RESTCONF HTTP client
//
// Wraps `reqwest::Client` with WLC-specific URL construction, basic-auth
// credential handling, and the shared GET/retry primitive. Endpoint groups
// (clients, addresses) are implemented as inherent methods in separate files
// to keep this module focused on transport mechanics.

use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, warn};
use url::Url;

use crate::error::Error;
use crate::mac::MacAddr;
use crate::transport::TransportConfig;

/// Path prefix for the wireless client operational data tree.
const CLIENT_OPER_DATA: &str =
    "restconf/data/Cisco-IOS-XE-wireless-client-oper:client-oper-data";

/// Media type RESTCONF servers use for YANG-modeled JSON payloads.
const YANG_DATA_JSON: &str = "application/yang-data+json";

/// Attempts per request before giving up.
const DEFAULT_RETRY: u32 = 3;

/// Basic-auth credentials for the controller.
///
/// Held behind a lock so [`WlcClient::update_creds`] can swap both fields
/// atomically while requests are in flight; each attempt snapshots the pair
/// current at that moment. The password never appears in `Debug` output or
/// logs -- it is exposed only when the Authorization header is built.
#[derive(Clone)]
struct Credentials {
    username: String,
    password: SecretString,
}

/// Client for a Cisco IOS-XE wireless controller's (e.g. Catalyst 9800)
/// RESTCONF API.
///
/// Queries operational state only: connected wireless clients and their
/// SISF address bindings. All requests are authenticated GETs with a fixed
/// retry policy -- connectivity failures are retried and then degrade to a
/// negative result (`false` or an empty list) with log output, never an
/// error. Only invalid caller input (a malformed MAC filter) is returned
/// as [`Error`].
///
/// ```no_run
/// use secrecy::SecretString;
/// use wlc_api::{TransportConfig, WlcClient};
///
/// # async fn example() -> Result<(), wlc_api::Error> {
/// let wlc = WlcClient::new(
///     "wlc1.example.net",
///     "admin",
///     SecretString::from("secret".to_string()),
///     &TransportConfig::default(),
/// )?;
///
/// if wlc.test().await {
///     let clients = wlc.get_clients(None, true).await?;
///     println!("{} clients connected", clients.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct WlcClient {
    http: reqwest::Client,
    base_url: Url,
    host: String,
    creds: RwLock<Credentials>,
    timeout: Duration,
    retry: u32,
}

impl WlcClient {
    /// Create a new client for the controller at `host`.
    ///
    /// The host is turned into an `https://{host}/` base URL and the HTTP
    /// client is built from the transport config (TLS trust, 5 s default
    /// timeout). Credentials are not verified here -- use [`Self::test`].
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let host = host.into();
        let base_url = Url::parse(&format!("https://{host}/"))?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            host,
            creds: RwLock::new(Credentials {
                username: username.into(),
                password,
            }),
            timeout: transport.timeout,
            retry: DEFAULT_RETRY,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` and base URL.
    ///
    /// Use this when you need full control over the HTTP client (custom
    /// middleware, a plain-HTTP test server). The caller is responsible for
    /// the request timeout normally supplied by
    /// [`TransportConfig::build_client`].
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        let host = base_url.host_str().unwrap_or_default().to_owned();
        Self {
            http,
            base_url,
            host,
            creds: RwLock::new(Credentials {
                username: username.into(),
                password,
            }),
            timeout: Duration::from_secs(5),
            retry: DEFAULT_RETRY,
        }
    }

    /// The controller host this client talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replace the username/password used for subsequent requests.
    ///
    /// Both fields are swapped atomically; an attempt already in flight
    /// finishes with the old pair, the next attempt picks up the new one.
    /// The old password is discarded and only the new username is logged.
    pub fn update_creds(&self, username: impl Into<String>, password: SecretString) {
        let username = username.into();
        debug!(host = %self.host, %username, "updating credentials");
        let mut creds = self.creds.write().unwrap_or_else(PoisonError::into_inner);
        *creds = Credentials { username, password };
    }

    /// Snapshot the current credential pair.
    fn credentials(&self) -> Credentials {
        self.creds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// The RESTCONF service root, used as a connectivity probe target.
    pub(crate) fn restconf_root(&self) -> Url {
        self.base_url
            .join("restconf/")
            .expect("invalid RESTCONF root URL")
    }

    /// Build a URL under the client-oper data tree, optionally keyed by MAC:
    /// `{base}/restconf/data/...:client-oper-data/{leaf}[={mac}]`
    pub(crate) fn oper_url(&self, leaf: &str, key: Option<&MacAddr>) -> Url {
        let mut full = format!("{}{CLIENT_OPER_DATA}/{leaf}", self.base_url);
        if let Some(mac) = key {
            full.push('=');
            full.push_str(mac.as_str());
        }
        Url::parse(&full).expect("invalid oper URL")
    }

    // ── Request/retry primitive ──────────────────────────────────────

    /// Issue a GET with the shared retry policy.
    ///
    /// Runs up to `retry` sequential attempts against `url`, timing each.
    /// The first 200 response is returned with its body unconsumed; any
    /// other status or transport failure (timeout, DNS, TLS, reset) is
    /// logged at warn level and the next attempt starts immediately, with
    /// no backoff. Exhaustion is logged at error level and yields `None` --
    /// connectivity failures never escape this primitive as errors.
    pub(crate) async fn get_with_retry(&self, url: &Url, op: &str) -> Option<reqwest::Response> {
        for attempt in 1..=self.retry {
            let creds = self.credentials();
            let start = Instant::now();
            let result = self
                .http
                .get(url.clone())
                .basic_auth(&creds.username, Some(creds.password.expose_secret()))
                .header(reqwest::header::ACCEPT, YANG_DATA_JSON)
                .send()
                .await;
            let elapsed = start.elapsed();

            match result {
                Ok(resp) if resp.status() == reqwest::StatusCode::OK => {
                    debug!(host = %self.host, op, attempt, ?elapsed, "request succeeded");
                    return Some(resp);
                }
                Ok(resp) => {
                    warn!(
                        host = %self.host,
                        op,
                        attempt,
                        status = %resp.status(),
                        ?elapsed,
                        "request failed"
                    );
                }
                Err(e) => {
                    warn!(host = %self.host, op, attempt, error = %e, "request failed");
                }
            }
        }

        error!(
            host = %self.host,
            op,
            attempts = self.retry,
            timeout_secs = self.timeout.as_secs(),
            "all attempts failed; check credentials and host"
        );
        None
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Probe the RESTCONF service root with the configured credentials.
    ///
    /// `GET /restconf/`. Returns `true` on the first HTTP 200 (the response
    /// body is not inspected), `false` once the retry budget is exhausted.
    pub async fn test(&self) -> bool {
        debug!(host = %self.host, "testing connectivity");
        let url = self.restconf_root();
        self.get_with_retry(&url, "test").await.is_some()
    }
}
