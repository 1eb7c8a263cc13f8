// RESTCONF response types
//
// Models for the Cisco-IOS-XE-wireless-client-oper YANG module. Each listing
// endpoint wraps its records in a single-key envelope named after the module;
// a missing key means "no entries" and decodes to an empty list. Records keep
// a flatten catch-all because the YANG model grows fields across releases.

use serde::{Deserialize, Serialize};

// ── Response envelopes ───────────────────────────────────────────────

/// Envelope for `GET .../client-oper-data/common-oper-data`.
#[derive(Debug, Deserialize)]
pub(crate) struct CommonOperData {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-client-oper:common-oper-data",
        default
    )]
    pub clients: Vec<ClientRecord>,
}

/// Envelope for `GET .../client-oper-data/sisf-db-mac`.
#[derive(Debug, Deserialize)]
pub(crate) struct SisfDbMac {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:sisf-db-mac", default)]
    pub entries: Vec<SisfEntry>,
}

// ── Client record ────────────────────────────────────────────────────

/// One connected wireless client from `common-oper-data`.
///
/// The controller returns dozens of fields per client; the commonly needed
/// ones are modeled explicitly and everything else lands in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    #[serde(rename = "client-mac")]
    pub client_mac: String,
    #[serde(default, rename = "ap-name")]
    pub ap_name: Option<String>,
    #[serde(default, rename = "wlan-id")]
    pub wlan_id: Option<u32>,
    /// Client state machine position, e.g. `client-status-run`.
    #[serde(default, rename = "co-state")]
    pub co_state: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "ms-radio-type")]
    pub radio_type: Option<String>,
    /// SISF bindings attached by the enrichment pass in
    /// [`get_clients`](crate::restconf::WlcClient::get_clients);
    /// not part of the wire format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_addr: Option<Vec<SisfEntry>>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── SISF entry ───────────────────────────────────────────────────────

/// One IP-to-MAC binding from the SISF database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SisfEntry {
    #[serde(rename = "mac-addr")]
    pub mac_addr: String,
    /// IPv4 binding subtree, kept raw -- the shape is firmware-dependent.
    #[serde(default, rename = "ipv4-binding", skip_serializing_if = "Option::is_none")]
    pub ipv4_binding: Option<serde_json::Value>,
    /// IPv6 binding subtree, kept raw.
    #[serde(default, rename = "ipv6-binding", skip_serializing_if = "Option::is_none")]
    pub ipv6_binding: Option<serde_json::Value>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
