//! Centralized initialization for CLI commands.
//!
//! Every command needs the same setup: load the config, open the credential
//! store, restore the session. Commands that talk to the profile API also
//! need a signed-in session. [`CommandInit`] does this once so each command
//! only handles its own work.
//!
//! # Initialization Steps
//! 1. **Config**: load or create `config.json` in the config directory
//! 2. **Session store**: open the [`FileStore`] in the data directory
//! 3. **Restore**: pick up credentials from an earlier `login`
//! 4. **Sign-in check** (optional): fail with `NotLoggedIn` when there is no session

use crate::api::{NominatimGeocoder, ReqresAuthenticator};
use crate::core::{
    config::AppConfig,
    dirs::{get_cache_directory, get_data_directory},
    error::Result,
    geocache::{KeyedCoordinateCache, ReadFailurePolicy},
    session::SessionManager,
    store::FileStore,
};

pub type CliSession = SessionManager<FileStore, ReqresAuthenticator>;

pub struct CommandContext {
    pub config: AppConfig,
    pub session: CliSession,
}

impl CommandContext {
    /// Geocode cache in the cache directory. A corrupt or unreadable cache
    /// degrades to uncached lookups instead of failing the command.
    pub fn geocode_cache(&self) -> Result<KeyedCoordinateCache<FileStore>> {
        let store = FileStore::new(get_cache_directory()?);
        Ok(KeyedCoordinateCache::new(store)
            .with_read_failure_policy(ReadFailurePolicy::TreatAsMiss))
    }

    pub fn geocoder(&self) -> Result<NominatimGeocoder> {
        NominatimGeocoder::new(&self.config.geocoding)
    }
}

pub struct CommandInit;

impl CommandInit {
    pub fn initialize() -> Result<CommandContext> {
        let config = AppConfig::load_or_create()?;
        let data_dir = get_data_directory()?;
        log::debug!("Session store: {}", data_dir.display());

        let authenticator = ReqresAuthenticator::new(config.auth.clone())?;
        let mut session = SessionManager::new(FileStore::new(data_dir), authenticator);
        session.restore()?;

        Ok(CommandContext { config, session })
    }

    /// Like [`initialize`](Self::initialize), but requires a stored session
    pub fn initialize_signed_in() -> Result<CommandContext> {
        let context = Self::initialize()?;
        context.session.require_token()?;
        Ok(context)
    }
}
