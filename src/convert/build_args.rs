//! Build argument converter: one `KEY=value` string per argument

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::models::service::BuildArgument;

impl Serialize for BuildArgument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct BuildArgumentVisitor;

impl<'de> Visitor<'de> for BuildArgumentVisitor {
    type Value = BuildArgument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a build argument such as KEY=value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BuildArgument, E> {
        Ok(BuildArgument::parse(v))
    }
}

impl<'de> Deserialize<'de> for BuildArgument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BuildArgumentVisitor)
    }
}
