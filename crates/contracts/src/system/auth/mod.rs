use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// JWT issued by `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl LoginResponse {
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body the auth endpoints return on signup and on any failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Signed-in user as kept in localStorage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserInfo {
    /// Greeting name: part of the email before `@`
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }

    /// First role for the header badge, "Admin" when none is assigned
    pub fn primary_role(&self) -> &str {
        self.roles.first().map(String::as_str).unwrap_or("Admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses() {
        let json = r#"{"token":"abc","id":1,"email":"ana@empresa.com","roles":["ROLE_USER"]}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let user = response.user_info();
        assert_eq!(response.token, "abc");
        assert_eq!(user.display_name(), "ana");
        assert_eq!(user.primary_role(), "ROLE_USER");
    }

    #[test]
    fn test_primary_role_default() {
        let user = UserInfo {
            id: 1,
            email: "admin".into(),
            roles: vec![],
        };
        assert_eq!(user.primary_role(), "Admin");
        assert_eq!(user.display_name(), "admin");
    }
}
