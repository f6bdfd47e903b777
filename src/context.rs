//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_query_cache::QueryCache;

use crate::graphql::GraphqlTransport;

#[derive(Clone)]
pub struct AppContext {
    pub cache: QueryCache,
    pub transport: Arc<dyn GraphqlTransport>,
}

impl AppContext {
    pub fn new(cache: QueryCache, transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { cache, transport }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
