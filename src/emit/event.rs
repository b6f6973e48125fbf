//! Event model shared by the walk, the post-processors and the writer

/// Field a container was serialized from, e.g. `Service.command`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    /// Serde name of the owning struct
    pub owner: &'static str,
    /// Serde name of the field
    pub field: &'static str,
}

impl Origin {
    pub const fn new(owner: &'static str, field: &'static str) -> Self {
        Self { owner, field }
    }
}

/// What kind of source value a scalar came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Text (strings, chars, short forms)
    Text,
    /// Integer or float
    Number,
    Boolean,
    Null,
    /// Enumerated value rendered as its wire token
    Enum,
    /// Pre-rendered token that must be written verbatim (file modes)
    Token,
}

/// How a scalar is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarStyle {
    #[default]
    Plain,
    /// Written verbatim and exempt from forced quoting
    Bare,
    DoubleQuoted,
}

/// How a sequence is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceStyle {
    /// One `- item` per line
    #[default]
    Block,
    /// Single-line `[a, b]`
    Flow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scalar {
    pub value: String,
    pub kind: ScalarKind,
    pub style: ScalarStyle,
}

impl Scalar {
    pub fn new(value: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            value: value.into(),
            kind,
            style: ScalarStyle::Plain,
        }
    }

    /// Mapping key
    pub fn key(value: impl Into<String>) -> Self {
        Self::new(value, ScalarKind::Text)
    }

    pub fn null() -> Self {
        Self::new("", ScalarKind::Null)
    }
}

/// One step of the serializer's output stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Scalar(Scalar),
    MappingStart,
    MappingEnd,
    SequenceStart {
        origin: Option<Origin>,
        style: SequenceStyle,
    },
    SequenceEnd,
}
