//! Document root and top-level resource definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::service::Service;

/// A complete descriptor
///
/// Every name→entity map keeps insertion order, which is also emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compose {
    pub version: Option<String>,
    pub services: IndexMap<String, Service>,

    /// A network without settings is written as a bare `name:`
    pub networks: IndexMap<String, Option<NetworkDefinition>>,

    /// A volume without settings is written as a bare `name:`
    pub volumes: IndexMap<String, Option<VolumeDefinition>>,

    pub secrets: IndexMap<String, SecretDefinition>,
    pub configs: IndexMap<String, ConfigDefinition>,
}

impl Compose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_service(mut self, name: impl Into<String>, service: Service) -> Self {
        self.services.insert(name.into(), service);
        self
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }

    pub fn service_mut(&mut self, name: &str) -> Option<&mut Service> {
        self.services.get_mut(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkDefinition {
    pub name: Option<String>,
    pub driver: Option<String>,
    pub driver_opts: IndexMap<String, String>,
    pub attachable: Option<bool>,
    pub internal: Option<bool>,
    pub external: Option<bool>,
    pub labels: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeDefinition {
    pub name: Option<String>,
    pub driver: Option<String>,
    pub driver_opts: IndexMap<String, String>,
    pub external: Option<bool>,
    pub labels: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretDefinition {
    pub name: Option<String>,
    /// Host path of the secret file
    pub file: Option<String>,
    /// Host environment variable holding the value
    pub environment: Option<String>,
    pub external: Option<bool>,
    pub labels: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDefinition {
    pub name: Option<String>,
    pub file: Option<String>,
    pub environment: Option<String>,
    /// Inline config body
    pub content: Option<String>,
    pub external: Option<bool>,
    pub labels: IndexMap<String, String>,
}
