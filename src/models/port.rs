//! Long-syntax port publications

use std::fmt;

use serde::{Deserialize, Serialize};

/// Host side of a port mapping: a single port or a range such as `8000-9000`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PublishedPort {
    Number(u16),
    Text(String),
}

impl PublishedPort {
    pub fn as_number(&self) -> Option<u16> {
        match self {
            PublishedPort::Number(port) => Some(*port),
            PublishedPort::Text(_) => None,
        }
    }

    /// True for `start-end` spellings
    pub fn is_range(&self) -> bool {
        matches!(self, PublishedPort::Text(text) if text.contains('-'))
    }
}

impl From<u16> for PublishedPort {
    fn from(port: u16) -> Self {
        PublishedPort::Number(port)
    }
}

impl From<&str> for PublishedPort {
    fn from(text: &str) -> Self {
        PublishedPort::Text(text.to_string())
    }
}

impl From<String> for PublishedPort {
    fn from(text: String) -> Self {
        PublishedPort::Text(text)
    }
}

impl fmt::Display for PublishedPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishedPort::Number(port) => write!(f, "{port}"),
            PublishedPort::Text(text) => f.write_str(text),
        }
    }
}

/// A port exposed by a service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Port {
    /// Container port
    pub target: Option<u16>,
    pub published: Option<PublishedPort>,
    /// `tcp` or `udp`
    pub protocol: Option<String>,
    /// `host` or `ingress`
    pub mode: Option<String>,
}

impl Port {
    pub fn new(target: u16, published: impl Into<PublishedPort>) -> Self {
        Self {
            target: Some(target),
            published: Some(published.into()),
            ..Self::default()
        }
    }
}
