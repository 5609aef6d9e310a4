//! In-process collaborators with call counting and scripted failures

#![allow(dead_code)]

use profile_directory::core::error::{ProfileDirError, Result};
use profile_directory::{
    Authenticator, Coordinates, KeyValueStore, ListingFetcher, LookupFetcher, MemoryStore, Page,
    PageCursor, Profile,
};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

pub fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        title: "mr".to_string(),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        picture: String::new(),
    }
}

/// Profiles `p{start}` .. `p{start + count - 1}`
pub fn profiles(start: usize, count: usize) -> Vec<Profile> {
    (start..start + count).map(|n| profile(&format!("p{n}"))).collect()
}

pub fn ids(items: &[Profile]) -> Vec<&str> {
    items.iter().map(|p| p.id.as_str()).collect()
}

/// Serves queued page outcomes in order; an exhausted queue serves empty pages
#[derive(Default)]
pub struct ScriptedListing {
    outcomes: RefCell<VecDeque<Result<Page<Profile>>>>,
    requested: RefCell<Vec<u32>>,
}

impl ScriptedListing {
    pub fn new(outcomes: Vec<Result<Page<Profile>>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requested.borrow().len()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }
}

impl ListingFetcher for ScriptedListing {
    type Record = Profile;

    fn fetch(&self, cursor: PageCursor) -> Result<Page<Profile>> {
        self.requested.borrow_mut().push(cursor.page());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Page::new(Vec::new())))
    }
}

/// Geocoder with a fixed table; unknown addresses fail with `LookupFailed`
#[derive(Default)]
pub struct TableGeocoder {
    table: HashMap<String, Coordinates>,
    calls: Cell<usize>,
}

impl TableGeocoder {
    pub fn with(entries: &[(&str, f64, f64)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(address, lat, lon)| (address.to_string(), Coordinates::new(*lat, *lon)))
                .collect(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl LookupFetcher for TableGeocoder {
    fn lookup(&self, address: &str) -> Result<Coordinates> {
        self.calls.set(self.calls.get() + 1);
        self.table
            .get(address)
            .copied()
            .ok_or_else(|| ProfileDirError::lookup_failed(address, "no results"))
    }
}

/// Memory store whose reads and writes can be switched off
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(ProfileDirError::storage_unavailable(key, "read disabled"));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(ProfileDirError::storage_unavailable(key, "write disabled"));
        }
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(ProfileDirError::storage_unavailable(key, "write disabled"));
        }
        self.inner.remove(key)
    }
}

/// Accepts exactly one email/password pair
pub struct SingleUserAuth {
    pub email: &'static str,
    pub password: &'static str,
    pub token: &'static str,
}

impl Default for SingleUserAuth {
    fn default() -> Self {
        Self {
            email: "eve.holt@reqres.in",
            password: "cityslicka",
            token: "QpwL5tke4Pnpja7X4",
        }
    }
}

impl Authenticator for SingleUserAuth {
    fn login(&self, email: &str, password: &str) -> Result<String> {
        if email == self.email && password == self.password {
            Ok(self.token.to_string())
        } else {
            Err(ProfileDirError::invalid_credentials("user not found"))
        }
    }
}
