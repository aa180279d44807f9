//! # Collection controller — fetch, cache, invalidate-and-refetch
//!
//! The synchronization pattern both server-owned collections (links,
//! feedback) follow:
//!
//! - **Fetch**: on first use the read call is issued; consumers observe
//!   [`CollectionState::Loading`] until it commits.
//! - **Mutate**: write calls live at the call site. On success the caller
//!   invokes [`Collection::invalidate`], which discards the cached value by
//!   refetching wholesale — the cache is never patched in place, so it
//!   cannot drift from the server.
//! - **Races**: requests are not cancelable once issued, so a stale response
//!   can arrive after a newer invalidation. Every fetch is tagged with a
//!   monotonically increasing sequence number from [`FetchGate`]; a response
//!   whose sequence is no longer current is discarded. With several
//!   mutations in flight, the last fetch to be issued wins the visible
//!   state.
//!
//! A refetch failure keeps the previous data (the cache is left untouched);
//! only an initial load failure surfaces as [`CollectionState::Failed`].

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

/// Monotonic sequence gate for in-flight fetches.
///
/// `begin` hands out the next sequence number and makes it current;
/// `is_current` tells a resolving fetch whether it may commit. Stale
/// sequences never become current again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchGate {
    current: u64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch: returns its sequence number, which becomes current.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a fetch tagged `seq` is still allowed to commit its result.
    pub fn is_current(&self, seq: u64) -> bool {
        self.current == seq
    }
}

/// What a consumer of a collection observes.
#[derive(Clone, Debug, PartialEq)]
pub enum CollectionState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Handle returned by [`use_collection`]. Cloneable into event handlers;
/// all clones share the same cached state.
pub struct Collection<T: 'static, F> {
    state: Signal<CollectionState<T>>,
    gate: Signal<FetchGate>,
    fetch: F,
}

impl<T: 'static, F: Clone> Clone for Collection<T, F> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            gate: self.gate,
            fetch: self.fetch.clone(),
        }
    }
}

impl<T, F, Fut> Collection<T, F>
where
    T: Clone + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    /// The current cached state (cloned out of the signal).
    pub fn value(&self) -> CollectionState<T> {
        self.state.read().clone()
    }

    /// Discard the cached value and refetch. Called after every successful
    /// mutation; never called on mutation failure, so the cache stays
    /// untouched then.
    pub fn invalidate(&self) {
        self.refresh();
    }

    fn refresh(&self) {
        let mut state = self.state;
        let mut gate = self.gate;
        let fetch = self.fetch.clone();
        let seq = gate.write().begin();
        spawn(async move {
            let result = fetch().await;
            if !gate.peek().is_current(seq) {
                // a newer fetch was issued while this one was in flight
                return;
            }
            match result {
                Ok(value) => state.set(CollectionState::Ready(value)),
                Err(err) => {
                    tracing::warn!("collection fetch failed: {err}");
                    if !matches!(&*state.peek(), CollectionState::Ready(_)) {
                        state.set(CollectionState::Failed(
                            err.user_message("Failed to load. Please try again."),
                        ));
                    }
                }
            }
        });
    }
}

/// Fetch-on-mount collection hook. `fetch` is the read call; it re-runs on
/// every [`Collection::invalidate`].
pub fn use_collection<T, F, Fut>(fetch: F) -> Collection<T, F>
where
    T: Clone + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_signal(|| CollectionState::Loading);
    let gate = use_signal(FetchGate::new);
    let collection = Collection { state, gate, fetch };
    use_hook({
        let collection = collection.clone();
        move || collection.refresh()
    });
    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_is_monotonic() {
        let mut gate = FetchGate::new();
        assert_eq!(gate.begin(), 1);
        assert_eq!(gate.begin(), 2);
        assert_eq!(gate.begin(), 3);
    }

    #[test]
    fn test_only_latest_fetch_commits() {
        let mut gate = FetchGate::new();
        let first = gate.begin();
        let second = gate.begin();
        // the older in-flight response is discarded, the newer commits
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_stale_sequence_never_recovers() {
        let mut gate = FetchGate::new();
        let first = gate.begin();
        let _second = gate.begin();
        let third = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(third));
        // committing does not consume currentness; an even newer begin does
        assert!(gate.is_current(third));
        gate.begin();
        assert!(!gate.is_current(third));
    }
}
