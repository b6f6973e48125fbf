//! Union converter for volumes, secrets and configs
//!
//! A scalar becomes [`ShortOrLong::Short`], a mapping is handed to the
//! long-form record's own deserializer. Anything else is a malformed entry.
//!
//! The YAML reader resolves plain scalars before the visitor sees them, so a
//! name such as `true`, `1.5` or `0x1F` arrives as a boolean or number. Those
//! still become short forms, holding the resolved value's canonical text
//! (`true`, `1.5`, `31`).

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::error::MalformedEntry;
use crate::models::short_or_long::{LongForm, ShortOrLong};

impl<L> Serialize for ShortOrLong<L>
where
    L: LongForm + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShortOrLong::Short(literal) => serializer.serialize_str(literal),
            ShortOrLong::Long(record) if record.presents_as_short() => {
                serializer.serialize_str(record.source().unwrap_or_default())
            }
            ShortOrLong::Long(record) => record.serialize(serializer),
        }
    }
}

struct ShortOrLongVisitor<L> {
    marker: PhantomData<L>,
}

impl<'de, L> Visitor<'de> for ShortOrLongVisitor<L>
where
    L: LongForm + Deserialize<'de>,
{
    type Value = ShortOrLong<L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} name or a {} mapping", L::KIND, L::KIND)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v.to_string()))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(float_literal(v)))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ShortOrLong::Short(v.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        L::deserialize(MapAccessDeserializer::new(map)).map(ShortOrLong::Long)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(MalformedEntry::new(
            L::KIND,
            "expected a name or a mapping, found a sequence",
        )))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Err(E::custom(MalformedEntry::new(
            L::KIND,
            "expected a name or a mapping, found null",
        )))
    }
}

/// YAML spelling of a resolved float
fn float_literal(v: f64) -> String {
    if v.is_nan() {
        ".nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { ".inf" } else { "-.inf" }.to_string()
    } else {
        v.to_string()
    }
}

impl<'de, L> Deserialize<'de> for ShortOrLong<L>
where
    L: LongForm + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ShortOrLongVisitor {
            marker: PhantomData,
        })
    }
}
