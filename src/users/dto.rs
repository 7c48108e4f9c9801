use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, FieldError};
use crate::users::password;
use crate::validation::{as_object, optional_string, required_string};

/// Public projection of a user row. The stored password digest is never part
/// of this type, so it cannot leak into a response.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Normalized full-user payload, shared by POST (create) and PUT (full
/// replace): every field is required either way. The password arrives here
/// already digested.
#[derive(Debug)]
pub struct UserWrite {
    pub name: String,
    pub email: String,
    pub password_digest: String,
}

impl UserWrite {
    pub fn parse(body: &Value) -> Result<Self, ApiError> {
        let map = as_object(body)?;
        let mut errors = Vec::new();

        let name = required_string(map, "name", &mut errors);
        let email = required_string(map, "email", &mut errors);
        let password = required_string(map, "password", &mut errors);

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) => Ok(Self {
                name,
                email,
                password_digest: password::digest(&password),
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

/// Partial-update payload: any non-empty subset of the mutable columns.
/// Unknown keys are rejected rather than silently dropped, so the SET clause
/// can only ever be built from the fixed allow-list.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_digest: Option<String>,
}

impl UserPatch {
    pub fn parse(body: &Value) -> Result<Self, ApiError> {
        let map = as_object(body)?;
        if map.is_empty() {
            return Err(ApiError::EmptyUpdate);
        }

        let mut errors = Vec::new();
        for key in map.keys() {
            if !matches!(key.as_str(), "name" | "email" | "password") {
                errors.push(FieldError::new(key, "unknown field"));
            }
        }

        let patch = Self {
            name: optional_string(map, "name", &mut errors),
            email: optional_string(map, "email", &mut errors),
            password_digest: optional_string(map, "password", &mut errors)
                .map(|p| password::digest(&p)),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}
