// Convenience re-exports: use msnp_adapter::prelude::*;
pub use crate::adapter::Adapter;
pub use crate::config::{ConfigStore, Configurable};
pub use crate::data::{
    Contact, ContactList, ContactListTypes, Group, Patch, PhoneNumbers, PhoneNumbersPatch,
    PrivacyMode, Profile, ProfilePatch, Settings, SettingsPatch, User,
};
pub use crate::error::DirectoryError;
pub use crate::memory::{DirectorySeed, MemoryAdapter};
pub use crate::observability::{InMemoryMetrics, InstrumentedAdapter, MetricsSink, NoopMetrics};
pub use crate::result::{AdapterResult, ErrorResultCode, ResultEnvelope};
pub use crate::token::{PasswordToken, Token, TokenType};

// Re-export async_trait for Adapter impls
pub use async_trait::async_trait;
