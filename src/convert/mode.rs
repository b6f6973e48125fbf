//! File mode converter
//!
//! Reads the literal through `deserialize_str` so the author's spelling
//! reaches [`FileMode::parse`] untouched, and writes the mode back as a bare
//! token in its recorded notation.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::emit::graph::RAW_TOKEN;
use crate::mode::{FileMode, ModeNotation};

impl Serialize for FileMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(RAW_TOKEN, &self.to_string())
    }
}

struct FileModeVisitor;

impl<'de> Visitor<'de> for FileModeVisitor {
    type Value = FileMode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a file mode such as 0440, 0o440 or 288")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FileMode, E> {
        FileMode::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FileMode, E> {
        let value = u32::try_from(v).map_err(|_| E::custom(format!("file mode {v} is out of range")))?;
        FileMode::from_decimal(value, ModeNotation::RawDecimal).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FileMode, E> {
        let value = u64::try_from(v).map_err(|_| E::custom("file mode cannot be negative"))?;
        self.visit_u64(value)
    }
}

impl<'de> Deserialize<'de> for FileMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(FileModeVisitor)
    }
}
