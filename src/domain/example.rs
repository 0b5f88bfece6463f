//! Example domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Example domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Store-assigned identifier, `0` until the record is persisted
    pub id: i64,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    /// Last successful update (None = never updated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Example {
    /// Build a not-yet-persisted example from a validated draft and its hash.
    pub fn new(draft: ExampleDraft, password_hash: String) -> Self {
        Self {
            id: 0,
            first_name: draft.first_name,
            surname: draft.surname,
            email: draft.email,
            password_hash,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Display name composed of first name and surname
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Copy the editable profile fields from a draft.
    ///
    /// The password is handled separately since it may or may not rotate.
    pub fn apply(&mut self, draft: &ExampleDraft) {
        self.email = draft.email.clone();
        self.first_name = draft.first_name.clone();
        self.surname = draft.surname.clone();
    }

    /// Stamp the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

/// Caller-supplied example payload for create and update.
///
/// Missing fields deserialize as empty strings so validation reports
/// them as required rather than failing at the JSON layer.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExampleDraft {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    /// Plaintext password, hashed before it is stored
    pub password: String,
}

// Don't expose the plaintext password in debug output
impl std::fmt::Debug for ExampleDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExampleDraft")
            .field("first_name", &self.first_name)
            .field("surname", &self.surname)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ExampleDraft {
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Example response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleResponse {
    pub id: i64,
    pub full_name: String,
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Example> for ExampleResponse {
    fn from(example: Example) -> Self {
        Self {
            id: example.id,
            full_name: example.full_name(),
            first_name: example.first_name,
            surname: example.surname,
            email: example.email,
            created_at: example.created_at,
            updated_at: example.updated_at,
        }
    }
}
