//! Models that represent employees, login payloads and the session snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of an employee account.
pub struct User {
    /// Employee identifier, e.g. `EMP001`.
    pub emp_id: String,
    /// Username used for login.
    pub username: String,
    /// Argon2 hash of the user's password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub name: String,
    pub designation: Option<String>,
    /// Managers can see and decide on leaves addressed to them.
    pub is_manager: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        emp_id: String,
        username: String,
        password_hash: String,
        name: String,
        designation: Option<String>,
        is_manager: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            emp_id,
            username,
            password_hash,
            name,
            designation,
            is_manager,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.is_manager
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::rules::validate_username"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::rules::validate_login_password"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Session snapshot handed to the client after login.
pub struct UserResponse {
    pub name: String,
    pub username: String,
    #[serde(rename = "EmpId")]
    pub emp_id: String,
    pub is_manager: bool,
    pub designation: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            name: user.name,
            username: user.username,
            emp_id: user.emp_id,
            is_manager: user.is_manager,
            designation: user.designation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> User {
        User::new(
            "EMP001".into(),
            "jsmith".into(),
            "hash".into(),
            "Jane Smith".into(),
            Some("Engineering Manager".into()),
            true,
        )
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let json = serde_json::to_value(manager()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["emp_id"], "EMP001");
    }

    #[test]
    fn login_response_flattens_user_snapshot() {
        let response = LoginResponse {
            user: manager().into(),
            access_token: "token".into(),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["EmpId"], "EMP001");
        assert_eq!(json["isManager"], true);
        assert_eq!(json["designation"], "Engineering Manager");
        assert_eq!(json["accessToken"], "token");
    }

    #[test]
    fn login_request_runs_credential_rules() {
        let payload = LoginRequest {
            username: "jo".into(),
            password: "secret".into(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));

        let payload = LoginRequest {
            username: "jsmith".into(),
            password: "Passw0rd!".into(),
        };
        assert!(payload.validate().is_ok());
    }
}
