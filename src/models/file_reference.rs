//! Secrets and configs granted to a service
//!
//! Both reference a top-level definition by name and may remap it to a
//! target path with explicit ownership and permissions.

use serde::{Deserialize, Serialize};

use super::short_or_long::{LongForm, ShortOrLong};
use crate::mode::FileMode;

/// A secret as listed under a service
pub type ServiceSecret = ShortOrLong<SecretSpec>;

/// A config as listed under a service
pub type ServiceConfig = ShortOrLong<ConfigSpec>;

/// Long-form secret grant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretSpec {
    pub source: Option<String>,
    pub target: Option<String>,
    pub uid: Option<String>,
    pub gid: Option<String>,
    pub mode: Option<FileMode>,
}

/// Long-form config grant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSpec {
    pub source: Option<String>,
    pub target: Option<String>,
    pub uid: Option<String>,
    pub gid: Option<String>,
    pub mode: Option<FileMode>,
}

macro_rules! file_reference {
    ($spec:ident, $kind:literal) => {
        impl $spec {
            /// Grant `source` under its own name
            pub fn new(source: impl Into<String>) -> Self {
                Self {
                    source: Some(source.into()),
                    ..Self::default()
                }
            }

            pub fn with_target(mut self, target: impl Into<String>) -> Self {
                self.target = Some(target.into());
                self
            }

            pub fn with_owner(mut self, uid: impl Into<String>, gid: impl Into<String>) -> Self {
                self.uid = Some(uid.into());
                self.gid = Some(gid.into());
                self
            }

            pub fn with_mode(mut self, mode: FileMode) -> Self {
                self.mode = Some(mode);
                self
            }
        }

        impl LongForm for $spec {
            const KIND: &'static str = $kind;

            fn source(&self) -> Option<&str> {
                self.source.as_deref()
            }

            fn presents_as_short(&self) -> bool {
                self.target.is_none()
                    && self.uid.is_none()
                    && self.gid.is_none()
                    && self.mode.is_none()
            }
        }
    };
}

file_reference!(SecretSpec, "secret");
file_reference!(ConfigSpec, "config");
