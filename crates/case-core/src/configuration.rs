//! # Product Configurations
//!
//! A configuration is a user-selected case customization (finish + material)
//! referenced by orders. Configurations are read-only in this scope and are
//! seeded from `config/configurations.toml`.

use serde::{Deserialize, Serialize};

/// Surface finish of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    None,
    Textured,
}

impl Default for Finish {
    fn default() -> Self {
        Finish::None
    }
}

/// Case material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Silicone,
    Polycarbonate,
}

impl Default for Material {
    fn default() -> Self {
        Material::Silicone
    }
}

/// A stored product configuration.
///
/// Immutable once referenced by an order; this scope only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    /// Unique configuration identifier
    pub id: String,

    /// Surface finish
    #[serde(default)]
    pub finish: Finish,

    /// Case material
    #[serde(default)]
    pub material: Material,
}

impl Configuration {
    pub fn new(id: impl Into<String>, finish: Finish, material: Material) -> Self {
        Self {
            id: id.into(),
            finish,
            material,
        }
    }
}

/// Configuration catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigurationCatalog {
    pub configurations: Vec<Configuration>,
}

impl ConfigurationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            configurations: Vec::new(),
        }
    }

    /// Add a configuration to the catalog
    pub fn add(&mut self, configuration: Configuration) {
        self.configurations.push(configuration);
    }

    /// Find a configuration by ID
    pub fn get(&self, id: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|c| c.id == id)
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
