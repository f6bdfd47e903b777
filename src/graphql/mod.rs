//! GraphQL Bindings
//!
//! Operation documents, the transport seam and the response envelope.

mod fetch;
mod todos;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GraphqlError;

pub use fetch::FetchTransport;
pub use todos::*;

pub const TODOS_QUERY: &str = r#"
  query Todos {
    todos {
      id
      content
    }
  }
"#;

pub const CREATE_TODO_MUTATION: &str = r#"
  mutation CreateTodo($input: TodoInput!) {
    todo(input: $input) {
      id
      content
    }
  }
"#;

/// Request body for GraphQL over HTTP
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_name: &'static str,
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

impl Operation {
    pub fn new(operation_name: &'static str, query: &'static str) -> Self {
        Self {
            operation_name,
            query,
            variables: None,
        }
    }

    pub fn with_variables<V: Serialize>(mut self, variables: &V) -> Result<Self, GraphqlError> {
        self.variables = Some(serde_json::to_value(variables)?);
        Ok(self)
    }
}

/// Sends an operation and returns the raw JSON response body.
///
/// Futures are `?Send` because browser fetch promises are tied to the main
/// thread; the transport object itself is shared through Leptos context and so
/// must be `Send + Sync`.
#[async_trait(?Send)]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, operation: &Operation) -> Result<Value, GraphqlError>;
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Unwrap the `{ data, errors }` envelope. Reported errors win over any
/// partial data.
pub fn decode_response<T: DeserializeOwned>(body: Value) -> Result<T, GraphqlError> {
    let response: GraphqlResponse<T> = serde_json::from_value(body)?;
    if !response.errors.is_empty() {
        return Err(GraphqlError::Graphql(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    response.data.ok_or(GraphqlError::MissingData)
}

pub async fn graphql_request<T: DeserializeOwned>(
    transport: &dyn GraphqlTransport,
    operation: &Operation,
) -> Result<T, GraphqlError> {
    let body = transport.execute(operation).await?;
    decode_response(body)
}
