use serde::{Deserialize, Serialize};

use super::{ContactListTypes, User};

/// An entry in a user's contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Id of the user this contact refers to.
    pub id: String,
    pub username: String,
    /// Display name as the owner sees it.
    pub friendly_name: String,
    #[serde(default)]
    pub lists: ContactListTypes,
    /// Ids of the owner's groups that contain this contact, in the order
    /// they were added.
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Contact {
    /// A contact entry pointing at `user`, not yet in any group.
    pub fn from_user(user: &User, lists: ContactListTypes) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            friendly_name: user.friendly_name.clone(),
            lists,
            groups: Vec::new(),
        }
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.groups.iter().any(|id| id == group_id)
    }

    /// Returns `false` when the contact was already a member.
    pub fn join_group(&mut self, group_id: &str) -> bool {
        if self.in_group(group_id) {
            return false;
        }
        self.groups.push(group_id.to_string());
        true
    }

    /// Returns `false` when the contact was not a member.
    pub fn leave_group(&mut self, group_id: &str) -> bool {
        let before = self.groups.len();
        self.groups.retain(|id| id != group_id);
        self.groups.len() != before
    }
}

/// A user-defined contact group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
