//! Per-user records updated through partial patches.

use serde::{Deserialize, Serialize};

use super::patch::patch_for;

/// Phone numbers published to contacts. Empty strings are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumbers {
    pub home: String,
    pub work: String,
    pub mobile: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub country: String,
    pub region: String,
    pub postal_code: String,
    pub language: String,
}

/// How users outside the allow and block lists are treated (BLP).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrivacyMode {
    #[default]
    AllowAll,
    BlockAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub privacy: PrivacyMode,
    /// Prompt when someone adds the user (GTC).
    pub notify_on_add: bool,
    pub mobile_messaging: bool,
}

patch_for! {
    /// Partial update of [`PhoneNumbers`].
    PhoneNumbersPatch => PhoneNumbers {
        home: String,
        work: String,
        mobile: String,
    }
}

patch_for! {
    /// Partial update of [`Profile`].
    ProfilePatch => Profile {
        country: String,
        region: String,
        postal_code: String,
        language: String,
    }
}

patch_for! {
    /// Partial update of [`Settings`].
    SettingsPatch => Settings {
        privacy: PrivacyMode,
        notify_on_add: bool,
        mobile_messaging: bool,
    }
}
