//! User model and request payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use warung_core::error::ServiceError;

/// A customer record, stored and served in the same shape.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    /// Auto-assigned primary key.
    pub id: i64,
    pub name: String,
    /// Unique across the table.
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Set by the store at insertion time.
    pub created_at: NaiveDateTime,
}

/// `POST /users` body. All fields are required and non-empty.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl NewUser {
    /// Validate presence of every field.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] naming the first missing or
    /// empty field.
    pub fn into_validated(self) -> Result<ValidNewUser, ServiceError> {
        Ok(ValidNewUser {
            name: require(self.name, "name")?,
            email: require(self.email, "email")?,
            phone: require(self.phone, "phone")?,
            address: require(self.address, "address")?,
        })
    }
}

/// A `NewUser` whose fields have all been checked.
#[derive(Debug)]
pub struct ValidNewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// `PUT /users/{id}` body. Omitted fields keep their stored value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UpdateUser {
    /// True when the body supplies no recognized field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }

    /// Reject an empty body and empty strings; omitted fields stay
    /// omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] when no recognized field is
    /// supplied or a supplied field is the empty string.
    pub fn into_validated(self) -> Result<ValidUpdateUser, ServiceError> {
        if self.is_empty() {
            return Err(ServiceError::Validation(
                "no updatable field supplied".into(),
            ));
        }
        Ok(ValidUpdateUser {
            name: non_empty(self.name, "name")?,
            email: non_empty(self.email, "email")?,
            phone: non_empty(self.phone, "phone")?,
            address: non_empty(self.address, "address")?,
        })
    }
}

/// An `UpdateUser` whose supplied fields have all been checked.
#[derive(Debug)]
pub struct ValidUpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

fn require(value: Option<String>, field: &str) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::Validation(format!(
            "field '{field}' is required"
        ))),
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<Option<String>, ServiceError> {
    match value {
        Some(v) if v.is_empty() => Err(ServiceError::Validation(format!(
            "field '{field}' must be non-empty"
        ))),
        other => Ok(other),
    }
}
