use crate::api::{build_client, is_success, read_response};
use crate::core::{
    config::AuthConfig,
    error::{ProfileDirError, Result},
    session::Authenticator,
};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-api-key";

pub struct ReqresAuthenticator {
    client: Client,
    config: AuthConfig,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ReqresAuthenticator {
    pub fn new(config: AuthConfig) -> Result<Self> {
        let user_agent = format!("profile-directory/{}", env!("CARGO_PKG_VERSION"));
        Ok(Self {
            client: build_client(&user_agent)?,
            config,
        })
    }
}

impl Authenticator for ReqresAuthenticator {
    fn login(&self, email: &str, password: &str) -> Result<String> {
        log::debug!("POST {}", self.config.login_url);
        let response = self
            .client
            .post(&self.config.login_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&LoginRequest { email, password })
            .send()?;
        let (status, body) = read_response(response)?;
        parse_login(status, &body)
    }
}

/// Extract the token, or the server's reason for refusing it
pub fn parse_login(status: u16, body: &str) -> Result<String> {
    let parsed: Option<LoginBody> = serde_json::from_str(body).ok();

    match parsed {
        Some(LoginBody {
            token: Some(token), ..
        }) if is_success(status) && !token.is_empty() => Ok(token),
        Some(LoginBody {
            error: Some(error), ..
        }) => Err(ProfileDirError::invalid_credentials(error)),
        _ if status >= 500 => Err(ProfileDirError::bad_status(status, body)),
        _ => Err(ProfileDirError::invalid_credentials("Unknown error occurred")),
    }
}
