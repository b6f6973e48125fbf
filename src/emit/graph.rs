//! Generic object-graph walk
//!
//! A `serde::Serializer` that captures any `Serialize` value as a [`Node`]
//! graph. Struct fields remember their [`Origin`] so later stages can route
//! presentation decisions by field. Value shapes the descriptor format has no
//! representation for (bytes, data-carrying enum variants, non-scalar keys)
//! are reported as [`CodecError::Defect`].

use serde::ser::{self, Serialize};

use crate::error::{CodecError, CodecResult};

use super::event::{Event, Origin, Scalar, ScalarKind, SequenceStyle};

/// Newtype-struct name that marks a pre-rendered token
///
/// A value serialized as `serialize_newtype_struct(RAW_TOKEN, &str)` becomes a
/// [`ScalarKind::Token`] scalar and is written verbatim, never quoted.
pub(crate) const RAW_TOKEN: &str = "$compose_codec::private::RawToken";

/// Whether a mapping came from a struct or from a name-keyed map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    /// Struct fields; absent and empty fields are suppressed
    Record,
    /// Name→entity map; every entry is kept
    Dictionary,
}

/// Captured object graph
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Scalar { value: String, kind: ScalarKind },
    Sequence {
        origin: Option<Origin>,
        items: Vec<Node>,
    },
    Mapping {
        kind: MappingKind,
        entries: Vec<(String, Node)>,
    },
}

impl Node {
    fn scalar(value: impl Into<String>, kind: ScalarKind) -> Self {
        Node::Scalar {
            value: value.into(),
            kind,
        }
    }

    /// True for sequences and mappings without entries
    pub fn is_empty_container(&self) -> bool {
        match self {
            Node::Sequence { items, .. } => items.is_empty(),
            Node::Mapping { entries, .. } => entries.is_empty(),
            _ => false,
        }
    }
}

/// Capture `value` as a node graph
pub fn capture<T: Serialize + ?Sized>(value: &T) -> CodecResult<Node> {
    value.serialize(NodeSerializer::default())
}

/// Flatten a node graph into the event stream, depth first
pub fn walk(node: &Node) -> Vec<Event> {
    let mut events = Vec::new();
    walk_into(node, &mut events);
    events
}

fn walk_into(node: &Node, events: &mut Vec<Event>) {
    match node {
        Node::Null => events.push(Event::Scalar(Scalar::null())),
        Node::Scalar { value, kind } => events.push(Event::Scalar(Scalar::new(value.clone(), *kind))),
        Node::Sequence { origin, items } => {
            events.push(Event::SequenceStart {
                origin: *origin,
                style: SequenceStyle::Block,
            });
            for item in items {
                walk_into(item, events);
            }
            events.push(Event::SequenceEnd);
        }
        Node::Mapping { entries, .. } => {
            events.push(Event::MappingStart);
            for (key, value) in entries {
                events.push(Event::Scalar(Scalar::key(key.clone())));
                walk_into(value, events);
            }
            events.push(Event::MappingEnd);
        }
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        ".nan".to_string()
    } else if value.is_infinite() {
        let token = if value.is_sign_positive() { ".inf" } else { "-.inf" };
        token.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct NodeSerializer {
    origin: Option<Origin>,
}

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = CodecError;
    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = ser::Impossible<Node, CodecError>;
    type SerializeMap = MapBuilder;
    type SerializeStruct = StructBuilder;
    type SerializeStructVariant = ser::Impossible<Node, CodecError>;

    fn serialize_bool(self, v: bool) -> CodecResult<Node> {
        Ok(Node::scalar(if v { "true" } else { "false" }, ScalarKind::Boolean))
    }

    fn serialize_i8(self, v: i8) -> CodecResult<Node> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> CodecResult<Node> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> CodecResult<Node> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> CodecResult<Node> {
        Ok(Node::scalar(v.to_string(), ScalarKind::Number))
    }

    fn serialize_u8(self, v: u8) -> CodecResult<Node> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> CodecResult<Node> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> CodecResult<Node> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> CodecResult<Node> {
        Ok(Node::scalar(v.to_string(), ScalarKind::Number))
    }

    fn serialize_f32(self, v: f32) -> CodecResult<Node> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> CodecResult<Node> {
        Ok(Node::scalar(format_float(v), ScalarKind::Number))
    }

    fn serialize_char(self, v: char) -> CodecResult<Node> {
        Ok(Node::scalar(v.to_string(), ScalarKind::Text))
    }

    fn serialize_str(self, v: &str) -> CodecResult<Node> {
        Ok(Node::scalar(v, ScalarKind::Text))
    }

    fn serialize_bytes(self, _v: &[u8]) -> CodecResult<Node> {
        Err(CodecError::Defect("no converter for byte arrays".to_string()))
    }

    fn serialize_none(self) -> CodecResult<Node> {
        Ok(Node::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> CodecResult<Node> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> CodecResult<Node> {
        Ok(Node::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> CodecResult<Node> {
        Ok(Node::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> CodecResult<Node> {
        Ok(Node::scalar(variant, ScalarKind::Enum))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        value: &T,
    ) -> CodecResult<Node> {
        if name != RAW_TOKEN {
            return value.serialize(self);
        }
        match value.serialize(self)? {
            Node::Scalar { value, .. } => Ok(Node::scalar(value, ScalarKind::Token)),
            other => Err(CodecError::Defect(format!(
                "raw token must be a scalar, got {other:?}"
            ))),
        }
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> CodecResult<Node> {
        Err(CodecError::Defect(format!(
            "no converter for data-carrying variant {name}::{variant}"
        )))
    }

    fn serialize_seq(self, len: Option<usize>) -> CodecResult<SeqBuilder> {
        Ok(SeqBuilder {
            origin: self.origin,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> CodecResult<SeqBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> CodecResult<SeqBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> CodecResult<Self::SerializeTupleVariant> {
        Err(CodecError::Defect(format!(
            "no converter for tuple variant {name}::{variant}"
        )))
    }

    fn serialize_map(self, len: Option<usize>) -> CodecResult<MapBuilder> {
        Ok(MapBuilder {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> CodecResult<StructBuilder> {
        Ok(StructBuilder {
            owner: name,
            entries: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> CodecResult<Self::SerializeStructVariant> {
        Err(CodecError::Defect(format!(
            "no converter for struct variant {name}::{variant}"
        )))
    }
}

struct SeqBuilder {
    origin: Option<Origin>,
    items: Vec<Node>,
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Node;
    type Error = CodecError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        self.items.push(value.serialize(NodeSerializer::default())?);
        Ok(())
    }

    fn end(self) -> CodecResult<Node> {
        Ok(Node::Sequence {
            origin: self.origin,
            items: self.items,
        })
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Node;
    type Error = CodecError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> CodecResult<Node> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Node;
    type Error = CodecError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> CodecResult<Node> {
        ser::SerializeSeq::end(self)
    }
}

struct MapBuilder {
    entries: Vec<(String, Node)>,
    pending_key: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Node;
    type Error = CodecError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> CodecResult<()> {
        match key.serialize(NodeSerializer::default())? {
            Node::Scalar { value, .. } => {
                self.pending_key = Some(value);
                Ok(())
            }
            other => Err(CodecError::Defect(format!(
                "mapping keys must be scalars, got {other:?}"
            ))),
        }
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> CodecResult<()> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| CodecError::Defect("mapping value without a key".to_string()))?;
        let node = value.serialize(NodeSerializer::default())?;
        self.entries.push((key, node));
        Ok(())
    }

    fn end(self) -> CodecResult<Node> {
        Ok(Node::Mapping {
            kind: MappingKind::Dictionary,
            entries: self.entries,
        })
    }
}

struct StructBuilder {
    owner: &'static str,
    entries: Vec<(String, Node)>,
}

impl ser::SerializeStruct for StructBuilder {
    type Ok = Node;
    type Error = CodecError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> CodecResult<()> {
        let serializer = NodeSerializer {
            origin: Some(Origin::new(self.owner, key)),
        };
        self.entries.push((key.to_string(), value.serialize(serializer)?));
        Ok(())
    }

    fn end(self) -> CodecResult<Node> {
        Ok(Node::Mapping {
            kind: MappingKind::Record,
            entries: self.entries,
        })
    }
}
