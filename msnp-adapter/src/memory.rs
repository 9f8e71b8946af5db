//! In-process [`Adapter`] backed by concurrent maps.
//!
//! Useful as a stand-in for a real directory in tests and local runs. Each
//! account lives in its own map entry; a mutating call holds that entry until
//! it returns, so calls against one account are applied one at a time while
//! different accounts proceed in parallel.

use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    adapter::Adapter,
    config::Configurable,
    data::{
        Contact, ContactListTypes, Group, Patch, PhoneNumbers, PhoneNumbersPatch, Profile,
        ProfilePatch, Settings, SettingsPatch, User,
    },
    error::DirectoryError,
    result::AdapterResult,
    token::{PasswordToken, Token},
};

// ============================================================================
// Seed configuration
// ============================================================================

/// Initial directory contents, read from the `[directory]` section.
///
/// ```toml
/// [[directory.users]]
/// id = "1"
/// username = "alice@hotmail.com"
/// password = "secret"
/// groups = [{ id = "g1", name = "Friends" }]
/// contacts = [{ id = "2", lists = { forward = true, allow = true }, groups = ["g1"] }]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

impl Configurable for DirectorySeed {
    const PREFIX: &'static str = "directory";
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    pub id: String,
    pub username: String,
    pub password: String,
    /// Defaults to the username.
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub contacts: Vec<ContactSeed>,
    #[serde(default)]
    pub phone: PhoneNumbers,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSeed {
    /// Id of another seeded user.
    pub id: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub lists: ContactListTypes,
    #[serde(default)]
    pub groups: Vec<String>,
}

// ============================================================================
// Account state
// ============================================================================

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
    contacts: Vec<Contact>,
    groups: Vec<Group>,
    phone: PhoneNumbers,
    profile: Profile,
    settings: Settings,
}

impl Account {
    fn new(user: User, password: String) -> Self {
        Self {
            user,
            password,
            contacts: Vec::new(),
            groups: Vec::new(),
            phone: PhoneNumbers::default(),
            profile: Profile::default(),
            settings: Settings::default(),
        }
    }

    fn contact_mut(&mut self, contact_id: &str) -> Result<&mut Contact, DirectoryError> {
        let owner = &self.user.id;
        self.contacts
            .iter_mut()
            .find(|contact| contact.id == contact_id)
            .ok_or_else(|| DirectoryError::ContactNotFound {
                user: owner.clone(),
                contact: contact_id.to_string(),
            })
    }

    fn ensure_group(&self, group_id: &str) -> Result<(), DirectoryError> {
        if self.groups.iter().any(|group| group.id == group_id) {
            Ok(())
        } else {
            Err(DirectoryError::GroupNotFound {
                user: self.user.id.clone(),
                group: group_id.to_string(),
            })
        }
    }
}

// ============================================================================
// MemoryAdapter
// ============================================================================

/// Directory kept entirely in memory.
#[derive(Default)]
pub struct MemoryAdapter {
    accounts: DashMap<String, Account>,
    /// Lowercased username -> user id.
    usernames: DashMap<String, String>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from configuration.
    ///
    /// Every contact and contact group must refer to a seeded user or one of
    /// the owner's seeded groups, and no id may appear twice in one user's
    /// groups or contacts.
    pub fn from_seed(seed: DirectorySeed) -> Result<Self, DirectoryError> {
        let adapter = Self::new();

        for entry in &seed.users {
            let friendly_name = entry
                .friendly_name
                .clone()
                .unwrap_or_else(|| entry.username.clone());
            let user = User::new(&entry.id, &entry.username, friendly_name);
            ensure_unique(&entry.id, "group", entry.groups.iter().map(|group| &group.id))?;
            ensure_unique(&entry.id, "contact", entry.contacts.iter().map(|contact| &contact.id))?;
            adapter.insert_user(user, &entry.password)?;

            let mut account = adapter
                .accounts
                .get_mut(&entry.id)
                .ok_or_else(|| DirectoryError::UserNotFound(entry.id.clone()))?;
            account.groups = entry.groups.clone();
            account.phone = entry.phone.clone();
            account.profile = entry.profile.clone();
            account.settings = entry.settings.clone();
        }

        for entry in &seed.users {
            let mut contacts = Vec::with_capacity(entry.contacts.len());
            for contact_seed in &entry.contacts {
                let target = adapter.directory_user(&contact_seed.id).ok_or_else(|| {
                    DirectoryError::UnknownSeedReference {
                        owner: entry.id.clone(),
                        kind: "user",
                        reference: contact_seed.id.clone(),
                    }
                })?;

                let mut contact = Contact::from_user(&target, contact_seed.lists);
                if let Some(name) = &contact_seed.friendly_name {
                    contact.friendly_name = name.clone();
                }
                for group_id in &contact_seed.groups {
                    if !entry.groups.iter().any(|group| &group.id == group_id) {
                        return Err(DirectoryError::UnknownSeedReference {
                            owner: entry.id.clone(),
                            kind: "group",
                            reference: group_id.clone(),
                        });
                    }
                    contact.join_group(group_id);
                }
                contacts.push(contact);
            }

            if let Some(mut account) = adapter.accounts.get_mut(&entry.id) {
                account.contacts = contacts;
            }
        }

        info!("Seeded memory directory with {} users", adapter.user_count());
        Ok(adapter)
    }

    /// Register a new account with no contacts or groups.
    ///
    /// The username and id are both claimed before either map is written, so
    /// concurrent registrations of one name leave exactly one account.
    pub fn insert_user(&self, user: User, password: &str) -> Result<(), DirectoryError> {
        let Entry::Vacant(name) = self.usernames.entry(user.username.to_lowercase()) else {
            return Err(DirectoryError::DuplicateUsername(user.username));
        };
        let Entry::Vacant(slot) = self.accounts.entry(user.id.clone()) else {
            return Err(DirectoryError::DuplicateUserId(user.id));
        };

        debug!("Registering user {} ({})", user.id, user.username);
        name.insert(user.id.clone());
        slot.insert(Account::new(user, password.to_string()));
        Ok(())
    }

    /// Add a group to an existing account.
    pub fn insert_group(&self, user_id: &str, group: Group) -> Result<(), DirectoryError> {
        let mut account = self
            .accounts
            .get_mut(user_id)
            .ok_or_else(|| DirectoryError::UserNotFound(user_id.to_string()))?;
        if !account.groups.iter().any(|existing| existing.id == group.id) {
            account.groups.push(group);
        }
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.accounts.len()
    }

    fn directory_user(&self, user_id: &str) -> Option<User> {
        self.accounts.get(user_id).map(|account| account.user.clone())
    }

    fn read<R>(
        &self,
        user: &User,
        f: impl FnOnce(&Account) -> R,
    ) -> Result<R, DirectoryError> {
        let account = self
            .accounts
            .get(&user.id)
            .ok_or_else(|| DirectoryError::UserNotFound(user.id.clone()))?;
        Ok(f(account.value()))
    }

    fn write<R>(
        &self,
        user: &User,
        f: impl FnOnce(&mut Account) -> Result<R, DirectoryError>,
    ) -> Result<R, DirectoryError> {
        let mut account = self
            .accounts
            .get_mut(&user.id)
            .ok_or_else(|| DirectoryError::UserNotFound(user.id.clone()))?;
        f(account.value_mut())
    }

    fn check_password(&self, token: &PasswordToken) -> Result<User, DirectoryError> {
        let id = self
            .usernames
            .get(&token.username.to_lowercase())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DirectoryError::UserNotFound(token.username.clone()))?;

        let account = self
            .accounts
            .get(&id)
            .ok_or_else(|| DirectoryError::UserNotFound(token.username.clone()))?;

        if account.password != token.password {
            return Err(DirectoryError::InvalidCredentials(token.username.clone()));
        }

        debug!("Authenticated {}", account.user.username);
        Ok(account.user.clone())
    }

    fn apply_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
        add: bool,
    ) -> Result<Contact, DirectoryError> {
        if lists.is_empty() {
            return Err(DirectoryError::EmptyListSet);
        }

        // Resolved before taking the owner's entry; both may share a shard.
        let target = if add {
            self.directory_user(contact_id)
        } else {
            None
        };

        self.write(user, |account| {
            if let Ok(contact) = account.contact_mut(contact_id) {
                contact.lists = if add {
                    contact.lists.union(lists)
                } else {
                    contact.lists.difference(lists)
                };
                debug!(
                    "Contact {} of {} now on {}",
                    contact_id, user.id, contact.lists
                );
                return Ok(contact.clone());
            }

            let target = target.ok_or_else(|| DirectoryError::ContactNotFound {
                user: user.id.clone(),
                contact: contact_id.to_string(),
            })?;
            let contact = Contact::from_user(&target, lists);
            debug!("Created contact {} for {} on {}", contact_id, user.id, lists);
            account.contacts.push(contact.clone());
            Ok(contact)
        })
    }

    fn apply_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
        join: bool,
    ) -> Result<Contact, DirectoryError> {
        self.write(user, |account| {
            account.ensure_group(group_id)?;
            let contact = account.contact_mut(contact_id)?;
            let changed = if join {
                contact.join_group(group_id)
            } else {
                contact.leave_group(group_id)
            };
            if !changed {
                debug!(
                    "Contact {} membership in group {} unchanged",
                    contact_id, group_id
                );
            }
            Ok(contact.clone())
        })
    }
}

fn ensure_unique<'a>(
    owner: &str,
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a String>,
) -> Result<(), DirectoryError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DirectoryError::DuplicateSeedEntry {
                owner: owner.to_string(),
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl Adapter for MemoryAdapter {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn add_contact_to_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
    ) -> AdapterResult<Contact> {
        Ok(self.apply_group(user, contact_id, group_id, true)?)
    }

    async fn add_contact_to_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
    ) -> AdapterResult<Contact> {
        Ok(self.apply_lists(user, contact_id, lists, true)?)
    }

    async fn authenticate(&self, token: &Token) -> AdapterResult<User> {
        match token {
            Token::Password(password) => Ok(self.check_password(password)?),
        }
    }

    async fn get_contacts(&self, user: &User) -> AdapterResult<Vec<Contact>> {
        Ok(self.read(user, |account| account.contacts.clone())?)
    }

    async fn get_groups(&self, user: &User) -> AdapterResult<Vec<Group>> {
        Ok(self.read(user, |account| account.groups.clone())?)
    }

    async fn remove_contact_from_group(
        &self,
        user: &User,
        contact_id: &str,
        group_id: &str,
    ) -> AdapterResult<Contact> {
        Ok(self.apply_group(user, contact_id, group_id, false)?)
    }

    async fn remove_contact_from_lists(
        &self,
        user: &User,
        contact_id: &str,
        lists: ContactListTypes,
    ) -> AdapterResult<Contact> {
        Ok(self.apply_lists(user, contact_id, lists, false)?)
    }

    async fn update_contact_friendly_name(
        &self,
        user: &User,
        contact_id: &str,
        friendly_name: &str,
    ) -> AdapterResult<Contact> {
        if friendly_name.trim().is_empty() {
            return Err(DirectoryError::EmptyFriendlyName.into());
        }

        Ok(self.write(user, |account| {
            let contact = account.contact_mut(contact_id)?;
            contact.friendly_name = friendly_name.to_string();
            Ok(contact.clone())
        })?)
    }

    async fn update_phone_numbers(
        &self,
        user: &User,
        phone: PhoneNumbersPatch,
    ) -> AdapterResult<PhoneNumbers> {
        Ok(self.write(user, |account| {
            phone.apply(&mut account.phone);
            Ok(account.phone.clone())
        })?)
    }

    async fn update_profile(&self, user: &User, profile: ProfilePatch) -> AdapterResult<Profile> {
        Ok(self.write(user, |account| {
            profile.apply(&mut account.profile);
            Ok(account.profile.clone())
        })?)
    }

    async fn update_settings(
        &self,
        user: &User,
        settings: SettingsPatch,
    ) -> AdapterResult<Settings> {
        Ok(self.write(user, |account| {
            settings.apply(&mut account.settings);
            Ok(account.settings.clone())
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ConfigStore,
        data::{ContactList, PrivacyMode},
        result::ErrorResultCode,
    };

    fn alice() -> User {
        User::new("1", "alice@hotmail.com", "Alice")
    }

    fn directory() -> MemoryAdapter {
        let adapter = MemoryAdapter::new();
        adapter.insert_user(alice(), "secret").unwrap();
        adapter
            .insert_user(User::new("2", "bob@hotmail.com", "Bob"), "hunter2")
            .unwrap();
        adapter.insert_group("1", Group::new("g1", "Friends")).unwrap();
        adapter
    }

    #[test]
    fn duplicate_usernames_are_rejected_case_insensitively() {
        let adapter = directory();
        let err = adapter
            .insert_user(User::new("3", "ALICE@hotmail.com", "Imposter"), "x")
            .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::DuplicateUsername("ALICE@hotmail.com".into())
        );

        let err = adapter
            .insert_user(User::new("2", "carol@hotmail.com", "Carol"), "x")
            .unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateUserId("2".into()));
    }

    #[tokio::test]
    async fn authenticate_ignores_username_case() {
        let adapter = directory();
        let user = adapter
            .authenticate(&Token::password("Alice@Hotmail.com", "secret"))
            .await
            .unwrap();
        assert_eq!(user, alice());
    }

    #[tokio::test]
    async fn wrong_password_is_an_error_result() {
        let adapter = directory();
        let result = adapter
            .authenticate(&Token::password("alice@hotmail.com", "wrong"))
            .await;
        assert_eq!(result, Err(ErrorResultCode::Unknown));
    }

    #[tokio::test]
    async fn list_add_creates_then_extends_contact() {
        let adapter = directory();
        let user = alice();

        let created = adapter
            .add_contact_to_lists(&user, "2", ContactListTypes::only(ContactList::Forward))
            .await
            .unwrap();
        assert_eq!(created.username, "bob@hotmail.com");
        assert_eq!(created.friendly_name, "Bob");

        let extended = adapter
            .add_contact_to_lists(&user, "2", ContactListTypes::only(ContactList::Allow))
            .await
            .unwrap();
        assert!(extended.lists.forward);
        assert!(extended.lists.allow);
        assert_eq!(adapter.get_contacts(&user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_add_for_unknown_user_fails() {
        let adapter = directory();
        let result = adapter
            .add_contact_to_lists(&alice(), "404", ContactListTypes::only(ContactList::Forward))
            .await;
        assert_eq!(result, Err(ErrorResultCode::Unknown));
    }

    #[tokio::test]
    async fn empty_list_set_is_rejected() {
        let adapter = directory();
        let add = adapter
            .add_contact_to_lists(&alice(), "2", ContactListTypes::empty())
            .await;
        let remove = adapter
            .remove_contact_from_lists(&alice(), "2", ContactListTypes::empty())
            .await;
        assert!(add.is_err());
        assert!(remove.is_err());
    }

    #[tokio::test]
    async fn removing_every_list_keeps_the_contact() {
        let adapter = directory();
        let user = alice();
        let both: ContactListTypes = [ContactList::Forward, ContactList::Allow]
            .into_iter()
            .collect();

        adapter.add_contact_to_lists(&user, "2", both).await.unwrap();
        let contact = adapter
            .remove_contact_from_lists(&user, "2", both)
            .await
            .unwrap();

        assert!(contact.lists.is_empty());
        assert_eq!(adapter.get_contacts(&user).await.unwrap(), vec![contact]);
    }

    #[tokio::test]
    async fn removing_from_lists_requires_existing_contact() {
        let adapter = directory();
        let result = adapter
            .remove_contact_from_lists(&alice(), "2", ContactListTypes::only(ContactList::Block))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn group_membership_policies() {
        let adapter = directory();
        let user = alice();
        adapter
            .add_contact_to_lists(&user, "2", ContactListTypes::only(ContactList::Forward))
            .await
            .unwrap();

        let first = adapter.add_contact_to_group(&user, "2", "g1").await.unwrap();
        let again = adapter.add_contact_to_group(&user, "2", "g1").await.unwrap();
        assert_eq!(first.groups, vec!["g1"]);
        assert_eq!(again, first);

        let removed = adapter
            .remove_contact_from_group(&user, "2", "g1")
            .await
            .unwrap();
        assert!(removed.groups.is_empty());

        let no_op = adapter
            .remove_contact_from_group(&user, "2", "g1")
            .await
            .unwrap();
        assert_eq!(no_op, removed);

        assert!(adapter.add_contact_to_group(&user, "2", "nope").await.is_err());
        assert!(adapter.add_contact_to_group(&user, "9", "g1").await.is_err());
    }

    #[tokio::test]
    async fn friendly_name_update() {
        let adapter = directory();
        let user = alice();
        adapter
            .add_contact_to_lists(&user, "2", ContactListTypes::only(ContactList::Forward))
            .await
            .unwrap();

        let renamed = adapter
            .update_contact_friendly_name(&user, "2", "Bobby")
            .await
            .unwrap();
        assert_eq!(renamed.friendly_name, "Bobby");

        assert!(adapter
            .update_contact_friendly_name(&user, "2", "   ")
            .await
            .is_err());
        assert!(adapter
            .update_contact_friendly_name(&user, "3", "Nobody")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn settings_patch_leaves_other_fields() {
        let adapter = directory();
        let user = alice();

        adapter
            .update_settings(
                &user,
                SettingsPatch {
                    notify_on_add: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let settings = adapter
            .update_settings(
                &user,
                SettingsPatch {
                    privacy: Some(PrivacyMode::BlockAll),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(settings.privacy, PrivacyMode::BlockAll);
        assert!(settings.notify_on_add);
        assert!(!settings.mobile_messaging);
    }

    #[tokio::test]
    async fn unknown_caller_is_rejected() {
        let adapter = directory();
        let ghost = User::new("999", "ghost@hotmail.com", "Ghost");
        assert!(adapter.get_contacts(&ghost).await.is_err());
        assert!(adapter
            .update_profile(&ghost, ProfilePatch::default())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn seed_from_config() {
        let store = ConfigStore::parse(
            r#"
            [[directory.users]]
            id = "1"
            username = "alice@hotmail.com"
            password = "secret"
            groups = [{ id = "g1", name = "Friends" }]
            contacts = [
                { id = "2", friendlyName = "Bobcat", lists = { forward = true }, groups = ["g1"] },
            ]
            phone = { mobile = "555-0102" }
            settings = { notifyOnAdd = true }

            [[directory.users]]
            id = "2"
            username = "bob@hotmail.com"
            password = "hunter2"
            friendlyName = "Bob"
            "#,
        )
        .unwrap();

        let adapter = MemoryAdapter::from_seed(store.get().unwrap()).unwrap();
        assert_eq!(adapter.user_count(), 2);

        let alice = adapter
            .authenticate(&Token::password("alice@hotmail.com", "secret"))
            .await
            .unwrap();
        assert_eq!(alice.friendly_name, "alice@hotmail.com");

        let contacts = adapter.get_contacts(&alice).await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].friendly_name, "Bobcat");
        assert_eq!(contacts[0].groups, vec!["g1"]);
        assert!(contacts[0].lists.forward);

        let phones = adapter
            .update_phone_numbers(&alice, PhoneNumbersPatch::default())
            .await
            .unwrap();
        assert_eq!(phones.mobile, "555-0102");

        let settings = adapter
            .update_settings(&alice, SettingsPatch::default())
            .await
            .unwrap();
        assert!(settings.notify_on_add);
    }

    #[test]
    fn seed_rejects_dangling_references() {
        let dangling_user = DirectorySeed {
            users: vec![UserSeed {
                id: "1".into(),
                username: "alice@hotmail.com".into(),
                password: "x".into(),
                friendly_name: None,
                groups: Vec::new(),
                contacts: vec![ContactSeed {
                    id: "2".into(),
                    friendly_name: None,
                    lists: ContactListTypes::empty(),
                    groups: Vec::new(),
                }],
                phone: PhoneNumbers::default(),
                profile: Profile::default(),
                settings: Settings::default(),
            }],
        };

        let err = MemoryAdapter::from_seed(dangling_user.clone()).err().unwrap();
        assert!(matches!(
            err,
            DirectoryError::UnknownSeedReference { kind: "user", .. }
        ));

        let mut dangling_group = dangling_user;
        dangling_group.users[0].contacts[0].id = "1".into();
        dangling_group.users[0].contacts[0].groups = vec!["g9".into()];
        let err = MemoryAdapter::from_seed(dangling_group.clone()).err().unwrap();
        assert!(matches!(
            err,
            DirectoryError::UnknownSeedReference { kind: "group", .. }
        ));

        let mut twin_contact = dangling_group.clone();
        twin_contact.users[0].contacts[0].groups.clear();
        let twin = twin_contact.users[0].contacts[0].clone();
        twin_contact.users[0].contacts.push(twin);
        let err = MemoryAdapter::from_seed(twin_contact).err().unwrap();
        assert_eq!(
            err,
            DirectoryError::DuplicateSeedEntry {
                owner: "1".into(),
                kind: "contact",
                id: "1".into(),
            }
        );

        let mut twin_group = dangling_group;
        twin_group.users[0].contacts.clear();
        twin_group.users[0].groups = vec![Group::new("g1", "Friends"), Group::new("g1", "Again")];
        let err = MemoryAdapter::from_seed(twin_group).err().unwrap();
        assert!(matches!(
            err,
            DirectoryError::DuplicateSeedEntry { kind: "group", .. }
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_keep_one_account() {
        let adapter = std::sync::Arc::new(MemoryAdapter::new());

        let tasks: Vec<_> = (0..16)
            .map(|n| {
                let adapter = adapter.clone();
                tokio::task::spawn_blocking(move || {
                    adapter.insert_user(
                        User::new(n.to_string(), "dave@hotmail.com", "Dave"),
                        &format!("pw{n}"),
                    )
                })
            })
            .collect();

        let mut winners = Vec::new();
        for (n, result) in futures::future::join_all(tasks).await.into_iter().enumerate() {
            match result.unwrap() {
                Ok(()) => winners.push(n),
                Err(err) => assert_eq!(
                    err,
                    DirectoryError::DuplicateUsername("dave@hotmail.com".into())
                ),
            }
        }

        assert_eq!(winners.len(), 1);
        assert_eq!(adapter.user_count(), 1);

        let winner = winners[0];
        let user = adapter
            .authenticate(&Token::password("dave@hotmail.com", &format!("pw{winner}")))
            .await
            .unwrap();
        assert_eq!(user.id, winner.to_string());
    }
}
