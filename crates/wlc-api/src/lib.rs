// wlc-api: Async Rust client for the Cisco IOS-XE wireless controller RESTCONF API

pub mod error;
pub mod mac;
pub mod restconf;
pub mod transport;

pub use error::Error;
pub use mac::MacAddr;
pub use restconf::WlcClient;
pub use restconf::models::{ClientRecord, SisfEntry};
pub use transport::{TlsMode, TransportConfig};
