//! Index Page
//!
//! Form and list behind the auth gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_query_cache::use_mutation;

use crate::auth::{redirect_on_sign_out, use_is_authenticated, AuthGate};
use crate::components::{Spinner, TodoForm, TodoList};
use crate::context::use_app_context;
use crate::routing;
use crate::todos;

#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_is_authenticated();
    let mutation = use_mutation();

    let gate = Memo::new(move |_| auth.get().gate());

    Effect::new(move |previous: Option<AuthGate>| {
        redirect_on_sign_out(previous, auth.get(), |path| {
            log::info!("[AUTH] not signed in, redirecting to {}", path);
            routing::navigate(path);
        })
    });

    let on_submit = Callback::new(move |content: String| {
        let ctx = ctx.clone();
        spawn_local(async move {
            let result = mutation
                .track(todos::submit_todo(ctx.transport.as_ref(), &ctx.cache, content))
                .await;
            if let Err(err) = result {
                log::error!("[TODOS] create failed: {}", err);
            }
        });
    });

    move || match gate.get() {
        AuthGate::Authenticated => view! {
            <div class="todo-page">
                <TodoForm loading=mutation.is_loading() on_submit=on_submit />
                <TodoList />
            </div>
        }
        .into_any(),
        AuthGate::Pending | AuthGate::Unauthenticated => view! { <Spinner /> }.into_any(),
    }
}
