//! compose-codec - notation-preserving codec for multi-service deployment descriptors
//!
//! Reads and writes compose-style documents while keeping the choices a human
//! author made: the spelling of file modes (`0440`, `0o440`, `288`), short or
//! long syntax for volumes, secrets and configs, and the quoting conventions
//! of the format.

pub mod codec;
pub mod config;
mod convert;
pub mod emit;
pub mod error;
pub mod mode;
pub mod models;

// Re-exports for convenience
pub use codec::{emit, parse, try_parse, Codec};
pub use config::{CodecOptions, LineEnding};
pub use emit::{Presentation, PresentationRules};
pub use error::{CodecError, CodecResult, MalformedEntry, ModeError};
pub use mode::{FileMode, ModeNotation};
pub use models::{
    Compose, ConfigSpec, LongForm, Port, PublishedPort, SecretSpec, Service, ServiceConfig,
    ServiceItems, ServiceSecret, ServiceVolume, ShortOrLong, VolumeSpec,
};
