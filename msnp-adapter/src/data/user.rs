use serde::{Deserialize, Serialize};

/// An authenticated account holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier assigned by the backend.
    pub id: String,
    /// Sign-in name (passport address).
    pub username: String,
    pub friendly_name: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        friendly_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            friendly_name: friendly_name.into(),
        }
    }
}
