//! Published-port converter
//!
//! Integers become [`PublishedPort::Number`] and strings stay
//! [`PublishedPort::Text`], even when they spell a number (`"8080"`). Every
//! other shape is a malformed entry rather than a silently dropped value.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::MalformedEntry;
use crate::models::port::PublishedPort;

const KIND: &str = "published port";

impl Serialize for PublishedPort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PublishedPort::Number(port) => serializer.serialize_u16(*port),
            PublishedPort::Text(text) => serializer.serialize_str(text),
        }
    }
}

fn malformed<E: de::Error>(found: &str) -> E {
    E::custom(MalformedEntry::new(
        KIND,
        format!("expected a port number or range, found {found}"),
    ))
}

struct PublishedPortVisitor;

impl<'de> Visitor<'de> for PublishedPortVisitor {
    type Value = PublishedPort;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a port number or a port range string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PublishedPort, E> {
        u16::try_from(v)
            .map(PublishedPort::Number)
            .map_err(|_| malformed(&format!("out-of-range port {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PublishedPort, E> {
        u64::try_from(v)
            .map_err(|_| malformed(&format!("negative port {v}")))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PublishedPort, E> {
        Ok(PublishedPort::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PublishedPort, E> {
        Err(malformed(&format!("fractional number {v}")))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<PublishedPort, E> {
        Err(malformed("a boolean"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<PublishedPort, E> {
        Err(malformed("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<PublishedPort, A::Error> {
        Err(malformed("a sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<PublishedPort, A::Error> {
        Err(malformed("a mapping"))
    }
}

impl<'de> Deserialize<'de> for PublishedPort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PublishedPortVisitor)
    }
}
