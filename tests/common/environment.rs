//! Isolated XDG directories for running the CLI binary

#![allow(dead_code)]

use assert_cmd::prelude::*;
use profile_directory::core::config::AppConfig;
use profile_directory::core::error::Result;
use profile_directory::core::store::{USER_EMAIL_KEY, USER_TOKEN_KEY};
use profile_directory::{FileStore, KeyValueStore};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// The TempDir must outlive every command run against it
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub config_home: PathBuf,
    pub data_home: PathBuf,
    pub cache_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            temp_dir,
            config_home: root.join("config"),
            data_home: root.join("data"),
            cache_home: root.join("cache"),
        })
    }

    /// Command for the binary with all XDG directories pointed into the temp dir
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("profile-directory").expect("binary is built");
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("XDG_DATA_HOME", &self.data_home)
            .env("XDG_CACHE_HOME", &self.cache_home)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn session_store(&self) -> FileStore {
        FileStore::new(self.data_home.join("profile-directory").join("session"))
    }

    pub fn cache_store(&self) -> FileStore {
        FileStore::new(self.cache_home.join("profile-directory"))
    }

    pub fn sign_in(&self, email: &str, token: &str) -> Result<()> {
        let store = self.session_store();
        store.set(USER_TOKEN_KEY, token)?;
        store.set(USER_EMAIL_KEY, email)
    }

    /// Write a config whose remote endpoints refuse connections
    pub fn offline_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::default();
        config.listing.base_url = "http://127.0.0.1:9/data/v1".to_string();
        config.auth.login_url = "http://127.0.0.1:9/api/login".to_string();
        config.geocoding.search_url = "http://127.0.0.1:9/search".to_string();
        config.save_in(&self.config_home.join("profile-directory"))?;
        Ok(config)
    }
}
