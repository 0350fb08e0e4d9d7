//! Auth server relay
//!
//! The gateway is not an authentication authority: it forwards login
//! credentials to the external auth server and relays whatever comes back.

pub mod client;

pub use client::{AuthServerClient, AuthServerStatus, RelayedResponse};
