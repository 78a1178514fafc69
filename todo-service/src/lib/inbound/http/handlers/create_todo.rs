use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    body: Result<Json<CreateTodoRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<CreateTodoResponseData>, ApiError> {
    let Json(body) = body?;
    let owner = caller.user_id().map_err(TodoError::from)?;

    state
        .todo_service
        .create_todo(&owner, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref todo| {
            ApiSuccess::new(
                StatusCode::CREATED,
                CreateTodoResponseData {
                    message: "Todo created successfully".to_string(),
                    todo: todo.into(),
                },
            )
        })
}

/// Missing fields default to empty strings and are stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateTodoRequestBody {
    title: String,
    description: String,
    priority: String,
}

impl CreateTodoRequestBody {
    fn into_command(self) -> CreateTodoCommand {
        CreateTodoCommand {
            title: self.title,
            description: self.description,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTodoResponseData {
    pub message: String,
    pub todo: TodoData,
}
