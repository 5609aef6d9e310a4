//! Profile Directory - a client for browsing a remote profile directory.
//!
//! The library holds the client-side state and data-fetching layer: an
//! incremental, deduplicating page loader, a persisted address-to-coordinates
//! cache in front of a geocoding service, and a session manager that keeps
//! credentials in a key-value store. HTTP adapters for the demo services and
//! a small CLI sit on top.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - [`PaginatedCollectionLoader`] and the [`ListingFetcher`] collaborator
//! - [`KeyedCoordinateCache`] and the [`LookupFetcher`] collaborator
//! - [`SessionManager`] and the [`Authenticator`] collaborator
//! - [`KeyValueStore`] with file and in-memory implementations
//! - Error handling and result types

pub mod api;
pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Session
    Authenticator,
    CacheOutcome,
    // Paginated loading
    CollectionState,
    // Geocode cache
    Coordinates,
    DetailFetcher,
    DetailState,
    ErrorKind,
    FailureInfo,
    // Persistence
    FileStore,
    KeyValueStore,
    KeyedCoordinateCache,
    ListingFetcher,
    Location,
    LookupFetcher,
    MemoryStore,
    Page,
    PageCursor,
    PageRequest,
    PaginatedCollectionLoader,
    // Records
    Profile,
    ProfileDetail,
    ProfileDetailLoader,
    // Error handling
    ProfileDirError,
    ReadFailurePolicy,
    Record,
    Result,
    SessionManager,
    SessionState,
    StateObserver,
};
