//! Service definitions

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::collection::ServiceItems;
use super::deploy::Deploy;
use super::file_reference::{ServiceConfig, ServiceSecret};
use super::port::Port;
use super::volume::ServiceVolume;

/// One entry under `services:`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub image: Option<String>,
    pub container_name: Option<String>,
    pub hostname: Option<String>,
    pub build: Option<Build>,

    /// Rendered as a single-line list
    pub command: Vec<String>,

    /// Rendered as a single-line list
    pub entrypoint: Vec<String>,

    /// Variables without a value are passed through from the host
    pub environment: IndexMap<String, Option<String>>,

    pub ports: Vec<Port>,
    pub volumes: ServiceItems<ServiceVolume>,
    pub secrets: ServiceItems<ServiceSecret>,
    pub configs: ServiceItems<ServiceConfig>,
    pub networks: Vec<String>,
    pub depends_on: Vec<String>,
    pub labels: IndexMap<String, String>,

    /// Restart policy outside swarm mode (`no`, `always`, ...)
    pub restart: Option<String>,
    pub privileged: Option<bool>,
    pub deploy: Option<Deploy>,
}

impl Service {
    pub fn from_image(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Build {
    pub context: Option<String>,
    pub dockerfile: Option<String>,
    pub args: Vec<BuildArgument>,
}

/// `KEY=value`, or a bare `KEY` taken from the build environment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildArgument {
    pub key: String,
    pub value: Option<String>,
}

impl BuildArgument {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn inherited(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Split on the first `=`; later ones belong to the value
    pub fn parse(literal: &str) -> Self {
        match literal.split_once('=') {
            Some((key, value)) => Self::new(key, value),
            None => Self::inherited(literal),
        }
    }
}

impl fmt::Display for BuildArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => f.write_str(&self.key),
        }
    }
}
