use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the MSNP contact lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactList {
    /// FL: contacts the user watches.
    Forward,
    /// AL: contacts allowed to see the user's presence.
    Allow,
    /// BL: contacts blocked from seeing the user's presence.
    Block,
    /// RL: contacts that have the user on their forward list.
    Reverse,
    /// PL: contacts that added the user and await a decision.
    Pending,
}

impl ContactList {
    pub const ALL: [ContactList; 5] = [
        ContactList::Forward,
        ContactList::Allow,
        ContactList::Block,
        ContactList::Reverse,
        ContactList::Pending,
    ];

    /// Two-letter protocol code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Forward => "FL",
            Self::Allow => "AL",
            Self::Block => "BL",
            Self::Reverse => "RL",
            Self::Pending => "PL",
        }
    }
}

impl fmt::Display for ContactList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A set of list memberships.
///
/// Omitted fields deserialize as `false`, so `{"allow": true}` names the allow
/// list alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactListTypes {
    pub forward: bool,
    pub allow: bool,
    pub block: bool,
    pub reverse: bool,
    pub pending: bool,
}

impl ContactListTypes {
    pub const fn empty() -> Self {
        Self {
            forward: false,
            allow: false,
            block: false,
            reverse: false,
            pending: false,
        }
    }

    /// Set containing a single list.
    pub fn only(list: ContactList) -> Self {
        Self::empty().with(list)
    }

    pub fn with(mut self, list: ContactList) -> Self {
        self.set(list, true);
        self
    }

    pub fn set(&mut self, list: ContactList, member: bool) {
        match list {
            ContactList::Forward => self.forward = member,
            ContactList::Allow => self.allow = member,
            ContactList::Block => self.block = member,
            ContactList::Reverse => self.reverse = member,
            ContactList::Pending => self.pending = member,
        }
    }

    pub const fn contains(&self, list: ContactList) -> bool {
        match list {
            ContactList::Forward => self.forward,
            ContactList::Allow => self.allow,
            ContactList::Block => self.block,
            ContactList::Reverse => self.reverse,
            ContactList::Pending => self.pending,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Lists present in either set.
    pub fn union(self, other: Self) -> Self {
        Self {
            forward: self.forward || other.forward,
            allow: self.allow || other.allow,
            block: self.block || other.block,
            reverse: self.reverse || other.reverse,
            pending: self.pending || other.pending,
        }
    }

    /// Lists in `self` that are not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self {
            forward: self.forward && !other.forward,
            allow: self.allow && !other.allow,
            block: self.block && !other.block,
            reverse: self.reverse && !other.reverse,
            pending: self.pending && !other.pending,
        }
    }

    /// Member lists in protocol order.
    pub fn iter(&self) -> impl Iterator<Item = ContactList> + '_ {
        ContactList::ALL
            .into_iter()
            .filter(move |list| self.contains(*list))
    }
}

impl FromIterator<ContactList> for ContactListTypes {
    fn from_iter<I: IntoIterator<Item = ContactList>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Display for ContactListTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = self.iter().map(ContactList::code).collect();
        write!(f, "[{}]", codes.join(","))
    }
}
