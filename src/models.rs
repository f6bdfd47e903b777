//! Frontend Models
//!
//! Payload shapes exchanged with the GraphQL API. Decoding is strict: a todo
//! without an `id` or `content` string is rejected on receipt.

use serde::{Deserialize, Serialize};

/// Todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque server-assigned identifier
    pub id: String,
    pub content: String,
}

/// Result of the `Todos` query; also the cached value under the "todos" key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodosQuery {
    pub todos: Vec<Todo>,
}

/// Result of the `CreateTodo` mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoMutation {
    pub todo: Todo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoInput {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTodoVariables {
    pub input: TodoInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todos_query_decodes() {
        let payload = json!({ "todos": [{ "id": "1", "content": "buy milk" }] });
        let query: TodosQuery = serde_json::from_value(payload).unwrap();
        assert_eq!(query.todos, vec![Todo { id: "1".into(), content: "buy milk".into() }]);
    }

    #[test]
    fn test_todo_without_content_is_rejected() {
        let payload = json!({ "todo": { "id": "1" } });
        assert!(serde_json::from_value::<CreateTodoMutation>(payload).is_err());
    }

    #[test]
    fn test_numeric_id_is_rejected() {
        let payload = json!({ "todos": [{ "id": 1, "content": "x" }] });
        assert!(serde_json::from_value::<TodosQuery>(payload).is_err());
    }

    #[test]
    fn test_variables_nest_under_input() {
        let vars = CreateTodoVariables { input: TodoInput { content: "buy milk".into() } };
        assert_eq!(serde_json::to_value(vars).unwrap(), json!({ "input": { "content": "buy milk" } }));
    }
}
