//! Signed-in user state backed by persisted credentials.
//!
//! [`SessionManager`] is an explicit object rather than process-wide state:
//! each instance owns its store and authenticator, so tests can run isolated
//! sessions side by side.
//!
//! # Public API
//! - [`Authenticator`]: Exchanges email and password for a token
//! - [`SessionState`]: Token and email of the signed-in user
//! - [`SessionManager`]: Restore, login, logout

use crate::core::{
    error::{ProfileDirError, Result},
    observer::{Observers, StateObserver},
    store::{KeyValueStore, USER_EMAIL_KEY, USER_TOKEN_KEY},
};
use serde::{Deserialize, Serialize};

pub trait Authenticator {
    /// Returns the session token on success.
    fn login(&self, email: &str, password: &str) -> Result<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.email.is_some()
    }
}

pub struct SessionManager<S: KeyValueStore, A: Authenticator> {
    store: S,
    authenticator: A,
    state: SessionState,
    observers: Observers<SessionState>,
}

impl<S: KeyValueStore, A: Authenticator> SessionManager<S, A> {
    /// A signed-out session. Call [`restore`](Self::restore) to pick up stored credentials.
    pub fn new(store: S, authenticator: A) -> Self {
        Self {
            store,
            authenticator,
            state: SessionState::default(),
            observers: Observers::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscribe(&mut self, observer: impl StateObserver<SessionState> + 'static) {
        self.observers.subscribe(observer);
    }

    /// Load credentials saved by an earlier login. Both token and email must be present.
    pub fn restore(&mut self) -> Result<&SessionState> {
        let token = self.store.get(USER_TOKEN_KEY)?;
        let email = self.store.get(USER_EMAIL_KEY)?;

        self.state = match (token, email) {
            (Some(token), Some(email)) => {
                log::debug!("Restored session for {email}");
                SessionState {
                    token: Some(token),
                    email: Some(email),
                }
            }
            _ => {
                log::debug!("No stored session");
                SessionState::default()
            }
        };

        self.observers.notify(&self.state);
        Ok(&self.state)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<&SessionState> {
        let token = self.authenticator.login(email, password).map_err(|e| {
            log::warn!("Login for {email} failed: {e}");
            e
        })?;

        self.store.set(USER_TOKEN_KEY, &token)?;
        self.store.set(USER_EMAIL_KEY, email)?;

        log::info!("Signed in as {email}");
        self.state = SessionState {
            token: Some(token),
            email: Some(email.to_string()),
        };
        self.observers.notify(&self.state);
        Ok(&self.state)
    }

    /// Forget the stored credentials and sign out.
    pub fn logout(&mut self) -> Result<()> {
        self.store.remove(USER_TOKEN_KEY)?;
        self.store.remove(USER_EMAIL_KEY)?;

        if let Some(email) = &self.state.email {
            log::info!("Signed out {email}");
        }
        self.state = SessionState::default();
        self.observers.notify(&self.state);
        Ok(())
    }

    pub fn require_token(&self) -> Result<&str> {
        match (&self.state.token, &self.state.email) {
            (Some(token), Some(_)) => Ok(token.as_str()),
            _ => Err(ProfileDirError::NotLoggedIn),
        }
    }
}
