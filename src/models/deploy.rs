//! Swarm deployment settings

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::MalformedEntry;

/// Service discovery method for external clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointMode {
    #[serde(rename = "vip")]
    Vip,
    #[serde(rename = "dnsrr")]
    DnsRoundRobin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplicationMode {
    Replicated,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartCondition {
    None,
    OnFailure,
    Any,
}

/// What to do when an update fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateFailureAction {
    Continue,
    Rollback,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateOrder {
    StopFirst,
    StartFirst,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deploy {
    pub endpoint_mode: Option<EndpointMode>,
    pub labels: IndexMap<String, String>,
    pub mode: Option<ReplicationMode>,
    pub replicas: Option<u32>,
    pub update_config: Option<UpdateConfig>,
    pub rollback_config: Option<UpdateConfig>,
    pub restart_policy: Option<RestartPolicy>,
    pub placement: Option<Placement>,
    pub resources: Option<Resources>,
}

/// Rolling update (or rollback) behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Containers updated at a time
    pub parallelism: Option<u32>,
    /// Duration string such as `10s`
    pub delay: Option<String>,
    pub failure_action: Option<UpdateFailureAction>,
    pub monitor: Option<String>,
    pub max_failure_ratio: Option<f64>,
    pub order: Option<UpdateOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartPolicy {
    pub condition: Option<RestartCondition>,
    pub delay: Option<String>,
    pub max_attempts: Option<u32>,
    pub window: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Node constraint expressions, e.g. `node.role==manager`
    pub constraints: Vec<String>,
    pub preferences: Vec<PlacementPreference>,
    pub max_replicas_per_node: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPreference {
    /// Node label to spread tasks over
    pub spread: String,
}

impl PlacementPreference {
    pub fn spread(label: impl Into<String>) -> Self {
        Self {
            spread: label.into(),
        }
    }

    /// Build from a string-keyed property bag
    ///
    /// Keys other than `spread` carry no meaning for a preference and are
    /// ignored.
    pub fn from_properties(properties: &IndexMap<String, String>) -> Result<Self, MalformedEntry> {
        properties
            .get("spread")
            .map(|label| Self::spread(label.as_str()))
            .ok_or_else(|| MalformedEntry::new("placement preference", "missing 'spread'"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub limits: Option<ResourceSpec>,
    pub reservations: Option<ResourceSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSpec {
    /// Fractional CPU count as written, e.g. `0.5`
    pub cpus: Option<String>,
    /// Byte value with unit, e.g. `512M`
    pub memory: Option<String>,
    pub pids: Option<u32>,
}
