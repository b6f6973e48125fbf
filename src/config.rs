//! Codec options
//!
//! Resolution order:
//! 1. Environment variables (COMPOSE_CODEC_*)
//! 2. A TOML fragment supplied by the caller
//! 3. Built-in defaults

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// Line terminator written between emitted lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options for one [`Codec`](crate::Codec)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecOptions {
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Skip keys the model does not know instead of failing the parse
    #[serde(default = "default_ignore_unmatched_keys")]
    pub ignore_unmatched_keys: bool,
}

fn default_ignore_unmatched_keys() -> bool {
    true
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::default(),
            ignore_unmatched_keys: default_ignore_unmatched_keys(),
        }
    }
}

impl CodecOptions {
    /// Parse options from a TOML fragment such as `line_ending = "crlf"`
    pub fn from_toml_str(content: &str) -> CodecResult<Self> {
        toml::from_str(content).map_err(|e| CodecError::Config {
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides (COMPOSE_CODEC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // COMPOSE_CODEC_LINE_ENDING
        if let Some(value) = lookup("COMPOSE_CODEC_LINE_ENDING") {
            match value.to_lowercase().as_str() {
                "lf" => self.line_ending = LineEnding::Lf,
                "crlf" => self.line_ending = LineEnding::CrLf,
                other => tracing::warn!(
                    value = other,
                    "ignoring invalid COMPOSE_CODEC_LINE_ENDING, expected lf or crlf"
                ),
            }
        }

        // COMPOSE_CODEC_IGNORE_UNMATCHED
        if let Some(value) = lookup("COMPOSE_CODEC_IGNORE_UNMATCHED") {
            self.ignore_unmatched_keys = value.to_lowercase() != "false" && value != "0";
        }

        self
    }
}
