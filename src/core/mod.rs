//! Core functionality for the profile-directory client.
//!
//! This module provides the state-holding components (paginated loader,
//! detail loader, session, geocode cache), their collaborator traits, and the
//! ambient pieces shared by commands: errors, config, directories, storage
//! and output formatting.

pub mod command_init;
pub mod config;
pub mod detail;
pub mod dirs;
pub mod error;
pub mod geocache;
pub mod loader;
pub mod observer;
pub mod output;
pub mod record;
pub mod session;
pub mod store;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ErrorKind, FailureInfo, ProfileDirError, Result};

// === Records ===
// Listing entries and pagination primitives
pub use record::{AddressPrecision, Location, Page, PageCursor, Profile, ProfileDetail, Record};

// === Paginated loading ===
// Deduplicating infinite-scroll loader and its listing collaborator
pub use loader::{CollectionState, ListingFetcher, PageRequest, PaginatedCollectionLoader};

// === Detail loading ===
pub use detail::{DetailFetcher, DetailState, ProfileDetailLoader};

// === Geocode cache ===
// Address-keyed coordinate cache over a key-value store
pub use geocache::{
    CacheOutcome, Coordinates, KeyedCoordinateCache, LookupFetcher, ReadFailurePolicy,
};

// === Session ===
// Signed-in user state with persisted credentials
pub use session::{Authenticator, SessionManager, SessionState};

// === Persistence ===
pub use store::{FileStore, KeyValueStore, MemoryStore};

// === Change notification ===
pub use observer::{Observers, StateObserver};

// === Command initialization ===
pub use command_init::{CommandContext, CommandInit};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success};
