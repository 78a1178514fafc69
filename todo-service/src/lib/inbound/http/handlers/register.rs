use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::RegisterUserCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = body?;

    let session = state
        .user_service
        .register(RegisterUserCommand::new(
            body.username,
            body.email,
            body.password,
        ))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RegisterResponseData {
            message: "User registered successfully".to_string(),
            token: session.token,
            user: (&session.user).into(),
        },
    ))
}

/// Missing fields default to empty strings; no format rules are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterRequestBody {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub token: String,
    pub user: UserData,
}
