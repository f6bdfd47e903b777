//! Todo List Component

use leptos::prelude::*;
use leptos_query_cache::use_query;

use crate::components::Spinner;
use crate::context::use_app_context;
use crate::graphql;
use crate::todos::{list_rows, todos_query_options, ListView, TODOS_KEY};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let transport = ctx.transport.clone();

    let query = use_query(
        TODOS_KEY,
        move || {
            let transport = transport.clone();
            async move { graphql::get_todos(transport.as_ref()).await }
        },
        todos_query_options(),
    );

    let phase = Memo::new(move |_| query.with(ListView::of));
    let rows = move || query.with(list_rows);

    move || match phase.get() {
        ListView::Error => view! { <p class="error">"error.."</p> }.into_any(),
        ListView::Loading => view! { <Spinner /> }.into_any(),
        ListView::Ready => view! {
            <ul class="todo-list">
                <For
                    each=rows
                    key=|(position, todo)| (*position, todo.id.clone())
                    children=|(_, todo)| view! {
                        <li class="todo-item" data-id=todo.id>{todo.content}</li>
                    }
                />
            </ul>
        }
        .into_any(),
    }
}
