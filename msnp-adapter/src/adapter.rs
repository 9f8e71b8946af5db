use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    data::{
        Contact, ContactListTypes, Group, PhoneNumbers, PhoneNumbersPatch, Profile, ProfilePatch,
        Settings, SettingsPatch, User,
    },
    result::AdapterResult,
    token::Token,
};

/// Backend that stores users, their contacts and their personal settings.
///
/// An adapter retrieves and updates user and contact information and checks
/// credentials. It does not manage sessions or their lifetimes.
///
/// Every mutating operation returns the updated resource, so the caller can
/// push fresh state to connected sessions without a second read. Failures are
/// reported as [`ErrorResultCode`](crate::result::ErrorResultCode) values;
/// implementations must not panic on bad input.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Returns the name of the backend (e.g., "memory").
    fn name(&self) -> &'static str;

    /// Adds a contact to one of the user's groups.
    async fn add_contact_to_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
    ) -> AdapterResult<Contact>;

    /// Adds a contact to one or more lists.
    async fn add_contact_to_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
    ) -> AdapterResult<Contact>;

    /// Checks a credential and returns the user it belongs to.
    async fn authenticate(&self, token: &Token) -> AdapterResult<User>;

    /// Full snapshot of the user's contacts.
    async fn get_contacts(&self, user: &User) -> AdapterResult<Vec<Contact>>;

    /// Full snapshot of the user's groups.
    async fn get_groups(&self, user: &User) -> AdapterResult<Vec<Group>>;

    async fn remove_contact_from_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
    ) -> AdapterResult<Contact>;

    async fn remove_contact_from_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
    ) -> AdapterResult<Contact>;

    async fn update_contact_friendly_name(
        &self,
        user: &User,
        contact_id: &str,
        friendly_name: &str,
    ) -> AdapterResult<Contact>;

    /// Updates the supplied phone numbers and returns all of them.
    async fn update_phone_numbers(
        &self,
        user: &User,
        phone: PhoneNumbersPatch,
    ) -> AdapterResult<PhoneNumbers>;

    /// Updates the supplied profile fields and returns the whole profile.
    async fn update_profile(&self, user: &User, profile: ProfilePatch) -> AdapterResult<Profile>;

    /// Updates the supplied settings and returns all settings.
    async fn update_settings(
        &self,
        user: &User,
        settings: SettingsPatch,
    ) -> AdapterResult<Settings>;
}

/// Forwards every operation through a smart pointer.
macro_rules! forward_adapter {
    ($($ptr:ident),*) => {
        $(
            #[async_trait]
            impl<A: Adapter + ?Sized> Adapter for $ptr<A> {
                fn name(&self) -> &'static str {
                    (**self).name()
                }

                async fn add_contact_to_group(
                    &self,
                    user: &User,
                    contact_id: &str,
                    group_id: &str,
                ) -> AdapterResult<Contact> {
                    (**self).add_contact_to_group(user, contact_id, group_id).await
                }

                async fn add_contact_to_lists(
                    &self,
                    user: &User,
                    contact_id: &str,
                    lists: ContactListTypes,
                ) -> AdapterResult<Contact> {
                    (**self).add_contact_to_lists(user, contact_id, lists).await
                }

                async fn authenticate(&self, token: &Token) -> AdapterResult<User> {
                    (**self).authenticate(token).await
                }

                async fn get_contacts(&self, user: &User) -> AdapterResult<Vec<Contact>> {
                    (**self).get_contacts(user).await
                }

                async fn get_groups(&self, user: &User) -> AdapterResult<Vec<Group>> {
                    (**self).get_groups(user).await
                }

                async fn remove_contact_from_group(
                    &self,
                    user: &User,
                    contact_id: &str,
                    group_id: &str,
                ) -> AdapterResult<Contact> {
                    (**self).remove_contact_from_group(user, contact_id, group_id).await
                }

                async fn remove_contact_from_lists(
                    &self,
                    user: &User,
                    contact_id: &str,
                    lists: ContactListTypes,
                ) -> AdapterResult<Contact> {
                    (**self).remove_contact_from_lists(user, contact_id, lists).await
                }

                async fn update_contact_friendly_name(
                    &self,
                    user: &User,
                    contact_id: &str,
                    friendly_name: &str,
                ) -> AdapterResult<Contact> {
                    (**self)
                        .update_contact_friendly_name(user, contact_id, friendly_name)
                        .await
                }

                async fn update_phone_numbers(
                    &self,
                    user: &User,
                    phone: PhoneNumbersPatch,
                ) -> AdapterResult<PhoneNumbers> {
                    (**self).update_phone_numbers(user, phone).await
                }

                async fn update_profile(
                    &self,
                    user: &User,
                    profile: ProfilePatch,
                ) -> AdapterResult<Profile> {
                    (**self).update_profile(user, profile).await
                }

                async fn update_settings(
                    &self,
                    user: &User,
                    settings: SettingsPatch,
                ) -> AdapterResult<Settings> {
                    (**self).update_settings(user, settings).await
                }
            }
        )*
    };
}

forward_adapter!(Arc, Box);
