use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let owner = caller.user_id().map_err(TodoError::from)?;
    let todo_id = TodoId::from_string(&id).map_err(TodoError::from)?;

    state.todo_service.delete_todo(&owner, &todo_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Todo deleted successfully"),
    ))
}
