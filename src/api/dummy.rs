use crate::api::{build_client, is_success, read_response};
use crate::core::{
    config::ListingConfig,
    detail::DetailFetcher,
    error::{ProfileDirError, Result},
    loader::ListingFetcher,
    record::{Page, PageCursor, Profile, ProfileDetail},
};
use reqwest::blocking::Client;
use serde::Deserialize;

const APP_ID_HEADER: &str = "app-id";

/// Client for the dummyapi.io user endpoints
pub struct DummyApiClient {
    client: Client,
    config: ListingConfig,
}

#[derive(Deserialize)]
struct ListingBody {
    data: Vec<Profile>,
    #[serde(default)]
    total: Option<usize>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl DummyApiClient {
    pub fn new(config: ListingConfig) -> Result<Self> {
        let user_agent = format!("profile-directory/{}", env!("CARGO_PKG_VERSION"));
        Ok(Self {
            client: build_client(&user_agent)?,
            config,
        })
    }

    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<(u16, String)> {
        log::debug!("GET {url} {query:?}");
        let response = self
            .client
            .get(url)
            .header(APP_ID_HEADER, &self.config.app_id)
            .query(query)
            .send()?;
        read_response(response)
    }
}

impl ListingFetcher for DummyApiClient {
    type Record = Profile;

    fn fetch(&self, cursor: PageCursor) -> Result<Page<Profile>> {
        let url = format!("{}/user", self.config.base_url.trim_end_matches('/'));
        let (status, body) = self.get(
            &url,
            &[
                ("limit", self.config.page_limit.to_string()),
                ("page", cursor.page().to_string()),
            ],
        )?;
        parse_listing(status, &body)
    }
}

impl DetailFetcher for DummyApiClient {
    fn fetch_detail(&self, id: &str) -> Result<ProfileDetail> {
        let url = format!("{}/user/{id}", self.config.base_url.trim_end_matches('/'));
        let (status, body) = self.get(&url, &[])?;
        parse_detail(status, &body)
    }
}

pub fn parse_listing(status: u16, body: &str) -> Result<Page<Profile>> {
    if !is_success(status) {
        return Err(api_error(status, body));
    }

    let listing: ListingBody = serde_json::from_str(body)
        .map_err(|e| ProfileDirError::bad_response(format!("Invalid listing payload: {e}")))?;

    Ok(Page {
        records: listing.data,
        total: listing.total,
    })
}

pub fn parse_detail(status: u16, body: &str) -> Result<ProfileDetail> {
    if !is_success(status) {
        return Err(api_error(status, body));
    }

    // The API answers some failures with 200 and an error object
    if let Ok(error) = serde_json::from_str::<ErrorBody>(body) {
        return Err(ProfileDirError::bad_response(error.error));
    }

    serde_json::from_str(body)
        .map_err(|e| ProfileDirError::bad_response(format!("Invalid profile payload: {e}")))
}

fn api_error(status: u16, body: &str) -> ProfileDirError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => ProfileDirError::bad_response(format!("HTTP {status}: {}", error.error)),
        Err(_) => ProfileDirError::bad_status(status, body),
    }
}
