//! Entities written either as a bare string or as a structured record
//!
//! `- db_password` and
//!
//! ```text
//! - source: db_password
//!   target: /run/secrets/db
//!   mode: 0440
//! ```
//!
//! describe the same kind of entity. [`ShortOrLong`] keeps whichever form
//! the value holds so emission reproduces it.

/// Long-form record of a union value
pub trait LongForm {
    /// Entity name used in diagnostics (`volume`, `secret`, ...)
    const KIND: &'static str;

    /// The `source` field, if set
    fn source(&self) -> Option<&str>;

    /// Whether the record can stand in for a bare name
    ///
    /// True when nothing but `source` is set and the entity kind allows it.
    fn presents_as_short(&self) -> bool;
}

/// Either a short literal or a long-form record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortOrLong<L> {
    /// Bare literal, emitted verbatim
    Short(String),
    /// Structured record, emitted as a mapping
    Long(L),
}

impl<L: LongForm> ShortOrLong<L> {
    pub fn short(literal: impl Into<String>) -> Self {
        ShortOrLong::Short(literal.into())
    }

    pub fn long(record: L) -> Self {
        ShortOrLong::Long(record)
    }

    /// True for short literals and for records that only name a source
    pub fn is_short(&self) -> bool {
        match self {
            ShortOrLong::Short(_) => true,
            ShortOrLong::Long(record) => record.presents_as_short(),
        }
    }

    /// Name-only view: the short literal, else `source`, else empty
    pub fn as_str(&self) -> &str {
        match self {
            ShortOrLong::Short(literal) => literal,
            ShortOrLong::Long(record) => record.source().unwrap_or_default(),
        }
    }

    pub fn short_literal(&self) -> Option<&str> {
        match self {
            ShortOrLong::Short(literal) => Some(literal),
            ShortOrLong::Long(_) => None,
        }
    }

    pub fn long_form(&self) -> Option<&L> {
        match self {
            ShortOrLong::Short(_) => None,
            ShortOrLong::Long(record) => Some(record),
        }
    }
}
