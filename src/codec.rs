//! Codec pipeline
//!
//! Parse path: `serde_yaml_ng` events → model `Deserialize` impls, with
//! `serde_ignored` reporting every skipped key. Emit path: the generic graph
//! walk → suppression → post-processors → writer.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{CodecOptions, LineEnding};
use crate::emit::{to_text, Presentation, PresentationRules};
use crate::error::{CodecError, CodecResult};
use crate::models::Compose;

/// Configured parse/emit pipeline
///
/// Holds no per-call state; one instance can serve concurrent calls.
#[derive(Debug, Default)]
pub struct Codec {
    options: CodecOptions,
    presentation: Presentation,
}

impl Codec {
    pub fn new(options: CodecOptions) -> Self {
        Self::with_rules(options, PresentationRules::default())
    }

    /// Codec with a custom presentation table
    pub fn with_rules(options: CodecOptions, rules: PresentationRules) -> Self {
        Self {
            options,
            presentation: Presentation::standard(rules),
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Render `document` as text
    ///
    /// Only fails on a value the emitter has no representation for, which is
    /// a [`CodecError::Defect`].
    pub fn emit<T: Serialize + ?Sized>(&self, document: &T) -> CodecResult<String> {
        let newline = self.options.line_ending.as_str();
        let text = to_text(document, &self.presentation, newline)?;
        tracing::debug!(bytes = text.len(), "emitted document");
        Ok(text)
    }

    /// Parse `text` into a typed document
    pub fn parse<T: DeserializeOwned>(&self, text: &str) -> CodecResult<T> {
        tracing::debug!(bytes = text.len(), "parsing document");

        let mut ignored: Vec<String> = Vec::new();
        let deserializer = serde_yaml_ng::Deserializer::from_str(text);
        let document: T = serde_ignored::deserialize(deserializer, |path| {
            ignored.push(path.to_string());
        })
        .map_err(|e| CodecError::from_yaml(&e))?;

        for path in &ignored {
            tracing::warn!(key = %path, "skipping unrecognized key");
        }
        if !ignored.is_empty() && !self.options.ignore_unmatched_keys {
            return Err(CodecError::UnknownKeys { paths: ignored });
        }

        Ok(document)
    }

    /// Like [`parse`](Self::parse), but collapses every failure to `None`
    pub fn try_parse<T: DeserializeOwned>(&self, text: &str) -> Option<T> {
        match self.parse(text) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::debug!(error = %e, "parse failed");
                None
            }
        }
    }
}

/// Emit a document with default presentation
pub fn emit(document: &Compose, line_ending: LineEnding) -> CodecResult<String> {
    let options = CodecOptions {
        line_ending,
        ..CodecOptions::default()
    };
    Codec::new(options).emit(document)
}

/// Parse a document, ignoring unrecognized keys
pub fn parse(text: &str) -> CodecResult<Compose> {
    Codec::default().parse(text)
}

/// Parse a document, returning `None` on any failure
pub fn try_parse(text: &str) -> Option<Compose> {
    Codec::default().try_parse(text)
}
