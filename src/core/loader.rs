//! Incremental, deduplicating page loader for infinite-scroll lists.
//!
//! [`PaginatedCollectionLoader`] pulls pages from a [`ListingFetcher`] and
//! accumulates them into one ordered collection. It is driven from a single
//! control flow: the in-flight guard stops repeated triggers (scroll events,
//! repeated key presses) from stacking up requests, it does not make the
//! loader safe to share across threads.
//!
//! # Public API
//! - [`ListingFetcher`]: Collaborator returning one page per cursor
//! - [`CollectionState`]: Read-only snapshot handed to renderers
//! - [`PageRequest`]: Ticket for a fetch that is in flight
//! - [`PaginatedCollectionLoader`]: The state machine itself
//!
//! # State machine
//! `Idle(has_more, items)` → `Loading` → `Idle(has_more', items')` or
//! `Idle(has_more, items, error)`. `Idle(has_more = false)` is terminal until
//! [`PaginatedCollectionLoader::reset`].

use crate::core::{
    error::{FailureInfo, Result},
    observer::{Observers, StateObserver},
    record::{Page, PageCursor, Record},
};
use std::collections::HashSet;

/// Remote listing endpoint
pub trait ListingFetcher {
    type Record: Record;

    fn fetch(&self, cursor: PageCursor) -> Result<Page<Self::Record>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<R> {
    pub items: Vec<R>,
    pub next_cursor: PageCursor,
    pub is_loading: bool,
    pub has_more: bool,
    pub last_error: Option<FailureInfo>,
}

impl<R> Default for CollectionState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: PageCursor::initial(),
            is_loading: false,
            has_more: true,
            last_error: None,
        }
    }
}

impl<R> CollectionState<R> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Handed out by [`PaginatedCollectionLoader::begin_load`] and consumed by
/// [`PaginatedCollectionLoader::finish_load`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an unfinished request leaves the loader stuck in the loading state"]
pub struct PageRequest {
    cursor: PageCursor,
    generation: u64,
}

impl PageRequest {
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }
}

pub struct PaginatedCollectionLoader<F: ListingFetcher> {
    fetcher: F,
    state: CollectionState<F::Record>,
    seen_ids: HashSet<String>,
    // Bumped on reset so outcomes of requests begun earlier are dropped
    generation: u64,
    observers: Observers<CollectionState<F::Record>>,
}

impl<F: ListingFetcher> PaginatedCollectionLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: CollectionState::default(),
            seen_ids: HashSet::new(),
            generation: 0,
            observers: Observers::default(),
        }
    }

    pub fn state(&self) -> &CollectionState<F::Record> {
        &self.state
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn subscribe(
        &mut self,
        observer: impl StateObserver<CollectionState<F::Record>> + 'static,
    ) {
        self.observers.subscribe(observer);
    }

    /// Fetch and apply the next page.
    ///
    /// Returns the current state untouched, without fetching, while a request
    /// is in flight or once the backend has no more records.
    pub fn load_next(&mut self) -> &CollectionState<F::Record> {
        let Some(request) = self.begin_load() else {
            return &self.state;
        };

        let outcome = self.fetcher.fetch(request.cursor);
        self.finish_load(request, outcome)
    }

    /// First half of [`load_next`](Self::load_next): mark the loader busy and
    /// return the request to issue, or `None` when loading is not allowed.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.state.is_loading {
            log::debug!("load_next ignored: a page request is already in flight");
            return None;
        }
        if !self.state.has_more {
            log::debug!("load_next ignored: collection is complete");
            return None;
        }

        self.state.is_loading = true;
        self.state.last_error = None;
        self.observers.notify(&self.state);

        log::debug!("Requesting page {}", self.state.next_cursor.page());
        Some(PageRequest {
            cursor: self.state.next_cursor,
            generation: self.generation,
        })
    }

    /// Second half of [`load_next`](Self::load_next): apply a fetch outcome.
    pub fn finish_load(
        &mut self,
        request: PageRequest,
        outcome: Result<Page<F::Record>>,
    ) -> &CollectionState<F::Record> {
        if request.generation != self.generation || !self.state.is_loading {
            log::debug!(
                "Discarding outcome of page {} requested before reset",
                request.cursor.page()
            );
            return &self.state;
        }

        self.state.is_loading = false;

        match outcome {
            Ok(page) => self.apply_page(page),
            Err(e) => {
                log::warn!("Failed to load page {}: {e}", request.cursor.page());
                self.state.last_error = Some(FailureInfo::from(&e));
            }
        }

        self.observers.notify(&self.state);
        &self.state
    }

    /// Back to an empty collection at the first page.
    pub fn reset(&mut self) {
        log::debug!("Resetting collection ({} items dropped)", self.state.len());
        self.generation += 1;
        self.state = CollectionState::default();
        self.seen_ids.clear();
        self.observers.notify(&self.state);
    }

    fn apply_page(&mut self, page: Page<F::Record>) {
        if page.records.is_empty() {
            log::debug!(
                "Page {} is empty, collection complete with {} items",
                self.state.next_cursor.page(),
                self.state.len()
            );
            self.state.has_more = false;
            return;
        }

        let received = page.records.len();
        let before = self.state.len();
        for record in page.records {
            // insert() is false for ids already loaded, including repeats within this page
            if self.seen_ids.insert(record.id().to_string()) {
                self.state.items.push(record);
            }
        }
        self.state.next_cursor = self.state.next_cursor.next();

        let skipped = received - (self.state.len() - before);
        if skipped > 0 {
            log::debug!("Skipped {skipped} records already present in the collection");
        }
        log::debug!(
            "Received {received} records, collection now holds {}",
            self.state.len()
        );

        if let Some(total) = page.total {
            if self.state.len() >= total {
                log::debug!("Reached reported total of {total}");
                self.state.has_more = false;
            }
        }
    }
}
