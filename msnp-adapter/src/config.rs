//! TOML configuration.
//!
//! A single file holds one section per component. Each component declares a
//! [`Configurable`] type and reads its section from a [`ConfigStore`].

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be loaded from configuration
///
/// # Example
///
/// ```ignore
/// use serde::Deserialize;
/// use msnp_adapter::config::Configurable;
///
/// #[derive(Debug, Deserialize, Default)]
/// pub struct LdapConfig {
///     pub url: String,
///     pub timeout_ms: u64,
/// }
///
/// impl Configurable for LdapConfig {
///     const PREFIX: &'static str = "ldap";
/// }
/// ```
pub trait Configurable: DeserializeOwned + Default {
    /// Configuration section prefix (corresponds to TOML section name)
    const PREFIX: &'static str;
}

// ============================================================================
// Configuration Store
// ============================================================================

/// Parsed TOML document.
///
/// ```ignore
/// let config = ConfigStore::from_file("config.toml")?;
/// let seed: DirectorySeed = config.get()?;
/// ```
pub struct ConfigStore {
    data: toml::Value,
    path: Option<PathBuf>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::empty()
    }
}

impl ConfigStore {
    pub fn empty() -> Self {
        Self {
            data: toml::Value::Table(Default::default()),
            path: None,
        }
    }

    /// Create a configuration store from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let data: toml::Value =
            toml::from_str(content).map_err(|e| anyhow!("Failed to parse TOML: {}", e))?;
        Ok(Self { data, path: None })
    }

    /// Create a configuration store from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let data: toml::Value = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse TOML in '{}': {}", path.display(), e))?;

        Ok(Self {
            data,
            path: Some(path.to_path_buf()),
        })
    }

    /// Get a typed configuration section
    ///
    /// If the section doesn't exist, returns the default value.
    pub fn get<C: Configurable>(&self) -> Result<C> {
        let Some(section) = self.data.get(C::PREFIX).cloned() else {
            debug!("Config section '{}' absent, using defaults", C::PREFIX);
            return Ok(C::default());
        };

        debug!("Loading config section: {}", C::PREFIX);

        section
            .try_into()
            .map_err(|e| anyhow!("Failed to deserialize config section '{}': {}", C::PREFIX, e))
    }

    pub fn has_section(&self, prefix: &str) -> bool {
        self.data.get(prefix).is_some()
    }

    /// The file this store was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Merge another configuration into this one
    ///
    /// Values from `other` will override values in `self`.
    pub fn merge(&mut self, other: &ConfigStore) {
        merge_toml_values(&mut self.data, &other.data);
    }
}

/// Recursively merge TOML values
fn merge_toml_values(base: &mut toml::Value, other: &toml::Value) {
    match (base, other) {
        (toml::Value::Table(base_table), toml::Value::Table(other_table)) => {
            for (key, value) in other_table {
                if let Some(base_value) = base_table.get_mut(key) {
                    merge_toml_values(base_value, value);
                } else {
                    base_table.insert(key.clone(), value.clone());
                }
            }
        }
        (base, other) => {
            *base = other.clone();
        }
    }
}
