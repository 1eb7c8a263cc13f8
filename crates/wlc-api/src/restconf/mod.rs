// RESTCONF client modules
//
// Hand-written client for the IOS-XE wireless controller's operational-data
// endpoints under
// `/restconf/data/Cisco-IOS-XE-wireless-client-oper:client-oper-data`.

pub mod addresses;
pub mod client;
pub mod clients;
pub mod models;

pub use client::WlcClient;
