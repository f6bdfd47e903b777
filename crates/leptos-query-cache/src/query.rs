//! Query Hook
//!
//! Binds a cache key to a reactive [`QueryState`] and keeps it fresh.

use std::fmt::Display;
use std::future::Future;

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{use_query_cache, QueryOptions, QueryState, RefetchTrigger};

/// Read `key` from the query cache, fetching it with `fetcher`.
///
/// The returned signal follows every write to `key`, whether it comes from
/// this query's own fetches or from elsewhere (e.g. a mutation patching the
/// cache). Window `focus` and `online` listeners are only installed when the
/// corresponding option is enabled, and are removed with the owning component.
///
/// Overlapping fetches are neither deduplicated nor ordered: the last response
/// to arrive wins, even over a cache patch made while it was in flight.
pub fn use_query<T, E, F, Fut>(key: &'static str, fetcher: F, options: QueryOptions) -> ReadSignal<QueryState<T>>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
    E: Display + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let cache = use_query_cache();

    let cached = cache.get_query_data::<T>(key).unwrap_or_else(|err| {
        log::warn!("[QUERY] {key}: ignoring cached value: {err}");
        None
    });
    let state = RwSignal::new(QueryState::from_cached(cached));

    let subscription = cache.subscribe(key, move |value| {
        match serde_json::from_value::<T>(value.clone()) {
            Ok(data) => {
                state.try_update(|s| s.receive(data));
            }
            Err(err) => log::warn!("[QUERY] {key}: ignoring cache write: {err}"),
        }
    });
    on_cleanup(move || drop(subscription));

    let fetch = move || {
        let cache = cache.clone();
        let fetcher = fetcher.clone();
        spawn_local(async move {
            state.try_update(QueryState::begin_fetch);
            match fetcher().await {
                Ok(data) => {
                    // Listeners (including ours) pick the value up from the cache
                    if let Err(err) = cache.put_query_data(key, &data) {
                        log::warn!("[QUERY] {key}: not cached: {err}");
                        state.try_update(|s| s.receive(data));
                    }
                    state.try_update(QueryState::settle);
                }
                Err(err) => {
                    log::error!("[QUERY] {key}: fetch failed: {err}");
                    state.try_update(|s| s.fail(err.to_string()));
                }
            }
        });
    };

    if options.should_refetch(RefetchTrigger::WindowFocus) {
        let fetch = fetch.clone();
        let handle = window_event_listener(ev::focus, move |_| fetch());
        on_cleanup(move || handle.remove());
    }

    if options.should_refetch(RefetchTrigger::Reconnect) {
        let fetch = fetch.clone();
        let handle = window_event_listener(ev::online, move |_| fetch());
        on_cleanup(move || handle.remove());
    }

    // Nothing to show without a first fetch, so mount always fetches then
    if options.should_refetch(RefetchTrigger::Mount) || state.with_untracked(|s| s.data.is_none()) {
        fetch();
    }

    state.read_only()
}
