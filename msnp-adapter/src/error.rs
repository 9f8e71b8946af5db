use thiserror::Error;
use tracing::warn;

use crate::result::ErrorResultCode;

/// Why a backend refused a request.
///
/// These stay inside the backend; callers only ever see the
/// [`ErrorResultCode`] they convert into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("user '{0}' not found")]
    UserNotFound(String),

    #[error("invalid credentials for '{0}'")]
    InvalidCredentials(String),

    #[error("contact '{contact}' not found for user '{user}'")]
    ContactNotFound { user: String, contact: String },

    #[error("group '{group}' not found for user '{user}'")]
    GroupNotFound { user: String, group: String },

    #[error("no contact list selected")]
    EmptyListSet,

    #[error("friendly name must not be empty")]
    EmptyFriendlyName,

    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("user id '{0}' is already taken")]
    DuplicateUserId(String),

    #[error("seed for '{owner}' lists {kind} '{id}' more than once")]
    DuplicateSeedEntry {
        owner: String,
        kind: &'static str,
        id: String,
    },

    #[error("seed for '{owner}' references unknown {kind} '{reference}'")]
    UnknownSeedReference {
        owner: String,
        kind: &'static str,
        reference: String,
    },
}

impl From<DirectoryError> for ErrorResultCode {
    fn from(err: DirectoryError) -> Self {
        warn!(error = %err, "Adapter request failed");
        ErrorResultCode::Unknown
    }
}
