//! Service volume mounts
//!
//! Short syntax is the `source:target[:mode]` string; long syntax is the
//! mapping with an explicit `type` and optional per-type options.

use serde::{Deserialize, Serialize};

use super::short_or_long::{LongForm, ShortOrLong};
use crate::mode::FileMode;

/// A volume mount as listed under a service
pub type ServiceVolume = ShortOrLong<VolumeSpec>;

/// Long-form volume mount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeSpec {
    pub source: Option<String>,
    pub target: Option<String>,

    /// Mount type (`volume`, `bind`, `tmpfs`, `npipe`)
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub read_only: Option<bool>,

    /// Options for `type: bind`
    pub bind: Option<BindOptions>,

    /// Options for `type: volume`
    pub volume: Option<VolumeOptions>,

    /// Options for `type: tmpfs`
    pub tmpfs: Option<TmpfsOptions>,
}

impl VolumeSpec {
    /// A named-volume or bind mount from `source` to `target`
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            target: Some(target.into()),
            ..Self::default()
        }
    }

    /// Equivalent short syntax, `source:target` plus `:ro` when read-only
    ///
    /// Options that short syntax cannot express are dropped.
    pub fn to_short_syntax(&self) -> String {
        let mut short = format!(
            "{}:{}",
            self.source.as_deref().unwrap_or_default(),
            self.target.as_deref().unwrap_or_default()
        );
        if self.read_only == Some(true) {
            short.push_str(":ro");
        }
        short
    }
}

impl LongForm for VolumeSpec {
    const KIND: &'static str = "volume";

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Volumes always keep the mapping they were written as
    fn presents_as_short(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    pub propagation: Option<String>,
    pub create_host_path: Option<bool>,
    pub selinux: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeOptions {
    pub nocopy: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmpfsOptions {
    /// Size in bytes
    pub size: Option<u64>,
    pub mode: Option<FileMode>,
}
