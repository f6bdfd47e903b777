//! Todo Operations

use crate::error::GraphqlError;
use crate::models::{CreateTodoMutation, CreateTodoVariables, TodoInput, TodosQuery};

use super::{graphql_request, GraphqlTransport, Operation, CREATE_TODO_MUTATION, TODOS_QUERY};

pub async fn get_todos(transport: &dyn GraphqlTransport) -> Result<TodosQuery, GraphqlError> {
    graphql_request(transport, &Operation::new("Todos", TODOS_QUERY)).await
}

pub async fn create_todo(
    transport: &dyn GraphqlTransport,
    content: String,
) -> Result<CreateTodoMutation, GraphqlError> {
    let variables = CreateTodoVariables {
        input: TodoInput { content },
    };
    let operation = Operation::new("CreateTodo", CREATE_TODO_MUTATION).with_variables(&variables)?;
    graphql_request(transport, &operation).await
}
