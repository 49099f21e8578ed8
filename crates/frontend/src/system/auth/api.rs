use contracts::system::auth::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

use crate::shared::api_utils::{post_json, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json("/api/auth/login", &request).await
}

/// Register a new account; the backend answers with a confirmation message
pub async fn signup(username: String, email: String, password: String) -> Result<MessageResponse, ApiError> {
    let request = SignupRequest {
        username,
        email,
        password,
    };
    post_json("/api/auth/signup", &request).await
}
