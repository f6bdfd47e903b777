//! Todo List State
//!
//! Cache key, refetch policy, the post-create cache patch and the list view
//! decision.

use leptos_query_cache::{run_mutation, QueryCache, QueryOptions, QueryState};

use crate::error::GraphqlError;
use crate::graphql::{self, GraphqlTransport};
use crate::models::{CreateTodoMutation, Todo, TodosQuery};

pub const TODOS_KEY: &str = "todos";

/// Fetch on mount, but not just because the window regained focus or the
/// network came back.
pub fn todos_query_options() -> QueryOptions {
    QueryOptions {
        refetch_on_window_focus: false,
        refetch_on_reconnect: false,
        ..Default::default()
    }
}

/// Append `created` to the previously cached list.
///
/// Nothing cached yet means the list starts empty; todos that exist on the
/// server but were never fetched are not pulled in here.
pub fn append_created_todo(previous: Option<TodosQuery>, created: Option<Todo>) -> TodosQuery {
    let mut todos = previous.map(|p| p.todos).unwrap_or_default();
    todos.extend(created);
    TodosQuery { todos }
}

/// Patch the "todos" entry after a successful create. No other key is touched.
pub fn handle_mutation_success(cache: &QueryCache, data: Option<&CreateTodoMutation>) {
    let created = data.map(|d| d.todo.clone());
    if let Err(err) = cache.set_query_data(TODOS_KEY, |previous| append_created_todo(previous, created)) {
        log::error!("[TODOS] failed to patch cache: {}", err);
    }
}

/// Create a todo and, once the server confirms it, append it to the cache.
pub async fn submit_todo(
    transport: &dyn GraphqlTransport,
    cache: &QueryCache,
    content: String,
) -> Result<Todo, GraphqlError> {
    let created = run_mutation(graphql::create_todo(transport, content), |data| {
        handle_mutation_success(cache, Some(data))
    })
    .await?;
    Ok(created.todo)
}

/// What the list shows for a given query state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Error,
    Loading,
    Ready,
}

impl ListView {
    /// An error wins even over stale data
    pub fn of(state: &QueryState<TodosQuery>) -> Self {
        if state.error.is_some() {
            ListView::Error
        } else if state.data.is_some() {
            ListView::Ready
        } else {
            ListView::Loading
        }
    }
}

/// Rows in display order, paired with their position
pub fn list_rows(state: &QueryState<TodosQuery>) -> Vec<(usize, Todo)> {
    state
        .data
        .as_ref()
        .map(|data| data.todos.iter().cloned().enumerate().collect())
        .unwrap_or_default()
}
