use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::UpdateTodoCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Replaces every mutable field; absent fields reset to empty/false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateTodoRequestBody {
    title: String,
    description: String,
    priority: String,
    completed: bool,
}

impl UpdateTodoRequestBody {
    fn into_command(self) -> UpdateTodoCommand {
        UpdateTodoCommand {
            title: self.title,
            description: self.description,
            priority: self.priority,
            completed: self.completed,
        }
    }
}

pub async fn update_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = body?;
    let owner = caller.user_id().map_err(TodoError::from)?;
    let todo_id = TodoId::from_string(&id).map_err(TodoError::from)?;

    state
        .todo_service
        .update_todo(&owner, &todo_id, body.into_command())
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Todo updated successfully"),
    ))
}
