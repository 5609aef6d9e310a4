use crate::api::{build_client, is_success, read_response};
use crate::core::{
    config::GeocodingConfig,
    error::{ProfileDirError, Result},
    geocache::{Coordinates, LookupFetcher},
};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Forward geocoding against a Nominatim search endpoint
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(&config.user_agent)?,
            search_url: config.search_url.clone(),
        })
    }
}

impl LookupFetcher for NominatimGeocoder {
    fn lookup(&self, address: &str) -> Result<Coordinates> {
        if address.trim().is_empty() {
            return Err(ProfileDirError::lookup_failed(address, "empty address"));
        }

        log::debug!("Geocoding '{address}' via {}", self.search_url);
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| ProfileDirError::lookup_failed(address, e.to_string()))?;
        let (status, body) = read_response(response)
            .map_err(|e| ProfileDirError::lookup_failed(address, e.to_string()))?;
        parse_search(address, status, &body)
    }
}

/// First result of a search response
pub fn parse_search(address: &str, status: u16, body: &str) -> Result<Coordinates> {
    if !is_success(status) {
        return Err(ProfileDirError::lookup_failed(
            address,
            format!("geocoder returned status {status}"),
        ));
    }

    let results: Vec<SearchResult> = serde_json::from_str(body).map_err(|e| {
        ProfileDirError::lookup_failed(address, format!("failed to parse geocoding response: {e}"))
    })?;

    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| ProfileDirError::lookup_failed(address, "no results"))?;

    let lat = first
        .lat
        .parse::<f64>()
        .map_err(|e| ProfileDirError::lookup_failed(address, format!("invalid lat: {e}")))?;
    let lon = first
        .lon
        .parse::<f64>()
        .map_err(|e| ProfileDirError::lookup_failed(address, format!("invalid lon: {e}")))?;

    Ok(Coordinates::new(lat, lon))
}
