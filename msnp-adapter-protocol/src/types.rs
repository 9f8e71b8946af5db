//! Parameter shapes for adapter methods
//!
//! The structs are generic over the domain types so this crate only depends
//! on serde; the serving side fills in its own `User`, list set and patch
//! types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// Parameters for `authenticate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateParams<T> {
    pub token: T,
}

// ============================================================================
// User-scoped reads
// ============================================================================

/// Parameters for `getContacts` and `getGroups`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserParams<U> {
    pub user: U,
}

// ============================================================================
// Contact mutations
// ============================================================================

/// Parameters for `addContactToGroup` and `removeContactFromGroup`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactGroupParams<U> {
    pub user: U,
    pub contact_id: String,
    pub group_id: String,
}

/// Parameters for `addContactToLists` and `removeContactFromLists`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListsParams<U, L> {
    pub user: U,
    pub contact_id: String,
    pub lists: L,
}

/// Parameters for `updateContactFriendlyName`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendlyNameParams<U> {
    pub user: U,
    pub contact_id: String,
    pub friendly_name: String,
}

// ============================================================================
// Partial updates
// ============================================================================

/// Parameters for `updatePhoneNumbers`, `updateProfile` and `updateSettings`
///
/// The partial record may also be sent under the name of the resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateParams<U, P> {
    pub user: U,
    #[serde(alias = "phone", alias = "profile", alias = "settings")]
    pub fields: P,
}
