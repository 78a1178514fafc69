use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::errors::UserIdError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity of the caller, inserted into request extensions by [`authenticate`].
///
/// The subject is kept as it appeared in the token; handlers resolve it into a
/// [`UserId`] and report a malformed one as a bad request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> Result<UserId, UserIdError> {
        UserId::from_string(&self.subject)
    }
}

/// Middleware that validates bearer tokens and adds the caller's identity to
/// request extensions. Any failure ends the request with 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Invalid token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        subject: claims.user_id,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let header = req.headers().get(AUTHORIZATION).ok_or_else(|| {
        ApiError::Unauthorized("No authorization header".to_string()).into_response()
    })?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()).into_response())
}
