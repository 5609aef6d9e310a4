//! Single-profile loading for the detail view.

use crate::core::{
    error::{FailureInfo, Result},
    observer::{Observers, StateObserver},
    record::ProfileDetail,
};

pub trait DetailFetcher {
    fn fetch_detail(&self, id: &str) -> Result<ProfileDetail>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub profile: Option<ProfileDetail>,
    pub is_loading: bool,
    pub last_error: Option<FailureInfo>,
}

pub struct ProfileDetailLoader<F: DetailFetcher> {
    fetcher: F,
    state: DetailState,
    observers: Observers<DetailState>,
}

impl<F: DetailFetcher> ProfileDetailLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: DetailState::default(),
            observers: Observers::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn subscribe(&mut self, observer: impl StateObserver<DetailState> + 'static) {
        self.observers.subscribe(observer);
    }

    /// Replace the current profile with the one identified by `id`.
    ///
    /// A failed fetch leaves no profile behind, so a stale one is never shown
    /// under a new id.
    pub fn load(&mut self, id: &str) -> &DetailState {
        self.state.is_loading = true;
        self.state.last_error = None;
        self.state.profile = None;
        self.observers.notify(&self.state);

        match self.fetcher.fetch_detail(id) {
            Ok(profile) => {
                log::debug!("Loaded profile {id}");
                self.state.profile = Some(profile);
            }
            Err(e) => {
                log::warn!("Failed to load profile {id}: {e}");
                self.state.last_error = Some(FailureInfo::from(&e));
            }
        }

        self.state.is_loading = false;
        self.observers.notify(&self.state);
        &self.state
    }

    pub fn clear(&mut self) {
        self.state.profile = None;
        self.observers.notify(&self.state);
    }
}
