//! Shared test utilities for profile-directory integration tests.
//!
//! Fakes stand in for the remote services and the store so the core can be
//! exercised offline; the environment helpers give each CLI test its own
//! config, data and cache directories.

pub mod assertions;
pub mod environment;
pub mod fakes;
