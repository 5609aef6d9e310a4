//! Blocking HTTP adapters for the remote services the core depends on.
//!
//! Each adapter splits into a request half, which talks to the network, and a
//! pure `parse_*` half that turns a status code and body into a domain value.
//! The parse halves carry the error mapping and are what the unit tests cover.
//!
//! # Public API
//! - [`DummyApiClient`]: profile listing and detail ([`ListingFetcher`], [`DetailFetcher`])
//! - [`ReqresAuthenticator`]: email/password login ([`Authenticator`])
//! - [`NominatimGeocoder`]: address lookup ([`LookupFetcher`])
//!
//! [`ListingFetcher`]: crate::core::loader::ListingFetcher
//! [`DetailFetcher`]: crate::core::detail::DetailFetcher
//! [`Authenticator`]: crate::core::session::Authenticator
//! [`LookupFetcher`]: crate::core::geocache::LookupFetcher

pub mod dummy;
pub mod nominatim;
pub mod reqres;

pub use dummy::DummyApiClient;
pub use nominatim::NominatimGeocoder;
pub use reqres::ReqresAuthenticator;

use crate::core::error::Result;
use reqwest::blocking::{Client, Response};

pub(crate) fn build_client(user_agent: &str) -> Result<Client> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Status code and body text, read in full
pub(crate) fn read_response(response: Response) -> Result<(u16, String)> {
    let status = response.status().as_u16();
    let body = response.text()?;
    log::debug!("HTTP {status}, {} bytes", body.len());
    Ok((status, body))
}

pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
