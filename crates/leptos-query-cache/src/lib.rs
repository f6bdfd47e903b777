//! Leptos Query Cache
//!
//! Small query/mutation layer for Leptos CSR apps: an injectable keyed cache,
//! a `use_query` hook with configurable refetch triggers, and mutation helpers
//! that patch the cache once the server answers.

mod cache;
mod mutation;
mod options;
mod query;
mod state;

use leptos::prelude::*;

pub use cache::{CacheError, QueryCache, Subscription};
pub use mutation::{run_mutation, use_mutation, MutationHandle};
pub use options::{QueryOptions, RefetchTrigger};
pub use query::use_query;
pub use state::QueryState;

/// Make `cache` available to every component below the current owner.
pub fn provide_query_cache(cache: QueryCache) {
    provide_context(cache);
}

/// Get the query cache from context
pub fn use_query_cache() -> QueryCache {
    expect_context::<QueryCache>()
}
