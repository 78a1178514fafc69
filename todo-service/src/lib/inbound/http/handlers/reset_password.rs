use super::ApiError;

/// Password reset has no defined behaviour yet; the route exists so clients
/// get a JSON error instead of a bare 404.
pub async fn reset_password() -> ApiError {
    ApiError::NotImplemented("Password reset is not supported".to_string())
}
