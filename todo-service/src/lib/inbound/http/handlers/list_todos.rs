use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::errors::TodoError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<ListTodosResponseData>, ApiError> {
    let owner = caller.user_id().map_err(TodoError::from)?;

    let todos = state.todo_service.list_todos(&owner).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListTodosResponseData {
            todos: todos.iter().map(TodoData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTodosResponseData {
    pub todos: Vec<TodoData>,
}
