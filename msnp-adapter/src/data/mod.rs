//! Data that crosses the adapter boundary.
//!
//! The adapter contract only names these types. The fields here are the
//! smallest MSNP-shaped set a backend needs: the five contact lists
//! (FL/AL/BL/RL/PL), home/work/mobile phone numbers, a four-field profile and
//! the privacy and notification settings. Every type serializes in camelCase.
//! A real directory may carry more; extend the structs rather than the trait.

mod contact;
mod lists;
mod patch;
mod personal;
mod user;

pub use contact::{Contact, Group};
pub use lists::{ContactList, ContactListTypes};
pub use patch::Patch;
pub use personal::{
    PhoneNumbers, PhoneNumbersPatch, PrivacyMode, Profile, ProfilePatch, Settings, SettingsPatch,
};
pub use user::User;
