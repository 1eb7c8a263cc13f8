// SISF address-binding endpoints
//
// The SISF (Switch Integrated Security Features) database maps client IP
// addresses to MAC addresses; the WLC exposes it per wireless client under
// client-oper-data/sisf-db-mac.

use tracing::{debug, error};

use crate::error::Error;
use crate::mac::MacAddr;
use crate::restconf::client::WlcClient;
use crate::restconf::models::{SisfDbMac, SisfEntry};

impl WlcClient {
    /// List SISF address bindings, or the bindings of one client by MAC.
    ///
    /// `GET /restconf/data/Cisco-IOS-XE-wireless-client-oper:client-oper-data/sisf-db-mac[={mac}]`
    ///
    /// Same contract as [`Self::get_clients`]: an invalid MAC fails before
    /// any request is sent, and retry exhaustion degrades to an empty list.
    pub async fn get_client_addresses(
        &self,
        client: Option<&str>,
    ) -> Result<Vec<SisfEntry>, Error> {
        let key = client.map(str::parse::<MacAddr>).transpose()?;
        debug!(host = %self.host(), client = ?key, "listing address bindings");

        let url = self.oper_url("sisf-db-mac", key.as_ref());
        let Some(resp) = self.get_with_retry(&url, "get_client_addresses").await else {
            return Ok(Vec::new());
        };

        match resp.json::<SisfDbMac>().await {
            Ok(envelope) => {
                debug!(
                    host = %self.host(),
                    count = envelope.entries.len(),
                    "listed address bindings"
                );
                Ok(envelope.entries)
            }
            Err(e) => {
                error!(host = %self.host(), error = %e, "undecodable sisf-db response");
                Ok(Vec::new())
            }
        }
    }
}
