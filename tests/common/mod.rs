//! Common test utilities for codec contract and golden tests.
//!
//! This module provides:
//! - Fixtures: documents already in the codec's canonical text form
//! - Helpers for driving a full parse/emit cycle

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use compose_codec::{emit, parse, Compose, LineEnding};

/// Parse `text` and emit the result with LF line endings
pub fn reemit(text: &str) -> String {
    let compose = parse(text).expect("fixture should parse");
    emit(&compose, LineEnding::Lf).expect("parsed document should emit")
}

/// Emit `compose`, parse the text back, and emit again
pub fn emit_twice(compose: &Compose) -> (String, String) {
    let first = emit(compose, LineEnding::Lf).expect("document should emit");
    let reparsed = parse(&first).expect("emitted text should parse");
    let second = emit(&reparsed, LineEnding::Lf).expect("reparsed document should emit");
    (first, second)
}
