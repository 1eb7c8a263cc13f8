// Client listing endpoints
//
// Connected-client queries via common-oper-data, with optional per-client
// SISF enrichment.

use tracing::{debug, error};

use crate::error::Error;
use crate::mac::MacAddr;
use crate::restconf::client::WlcClient;
use crate::restconf::models::{ClientRecord, CommonOperData};

impl WlcClient {
    /// List connected wireless clients, or a single client by MAC address.
    ///
    /// `GET /restconf/data/Cisco-IOS-XE-wireless-client-oper:client-oper-data/common-oper-data[={mac}]`
    ///
    /// The filter accepts any common MAC notation (colons, dashes, Cisco
    /// dotted, bare hex); invalid input fails with a validation error before
    /// any request is sent. With `get_ip_info`, each record is enriched with
    /// its SISF bindings via [`Self::get_client_addresses`] -- one extra
    /// round trip per client, sequentially.
    ///
    /// Connectivity failures are retried and then degrade to an empty list,
    /// so an empty result can mean either "no clients connected" or
    /// "controller unreachable". The log output distinguishes the two.
    pub async fn get_clients(
        &self,
        client: Option<&str>,
        get_ip_info: bool,
    ) -> Result<Vec<ClientRecord>, Error> {
        let key = client.map(str::parse::<MacAddr>).transpose()?;
        debug!(host = %self.host(), client = ?key, "listing clients");

        let url = self.oper_url("common-oper-data", key.as_ref());
        let Some(resp) = self.get_with_retry(&url, "get_clients").await else {
            return Ok(Vec::new());
        };

        let mut records = match resp.json::<CommonOperData>().await {
            Ok(envelope) => envelope.clients,
            Err(e) => {
                error!(host = %self.host(), error = %e, "undecodable client-oper response");
                return Ok(Vec::new());
            }
        };

        if get_ip_info {
            for record in &mut records {
                let bindings = self
                    .get_client_addresses(Some(record.client_mac.as_str()))
                    .await?;
                record.ip_addr = Some(bindings);
            }
        }

        debug!(host = %self.host(), count = records.len(), "listed clients");
        Ok(records)
    }
}
