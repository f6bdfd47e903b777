//! Todo App
//!
//! Root component: wires the cache, transport and auth provider together.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_query_cache::{provide_query_cache, QueryCache};

use crate::auth::AuthProvider;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::graphql::FetchTransport;
use crate::pages::IndexPage;
use crate::session::SessionStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = SessionStore::new(config.session_storage_key);
    let transport = FetchTransport::new(config.graphql_endpoint, session.clone());

    // One cache per mounted app, handed down instead of living in a global
    let cache = QueryCache::new();
    provide_query_cache(cache.clone());
    provide_context(AppContext::new(cache, Arc::new(transport)));

    view! {
        <AuthProvider session=session>
            <main class="app-layout">
                <IndexPage />
            </main>
        </AuthProvider>
    }
}
