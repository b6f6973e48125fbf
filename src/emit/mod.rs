//! Emission pipeline
//!
//! Suppression on the captured graph, then the generic walk into events,
//! then the post-processor chain, then the text writer.

pub mod escape;
pub mod event;
pub mod graph;
pub mod prune;
pub mod stages;
pub mod writer;

use serde::Serialize;

use crate::error::CodecResult;

pub use event::{Event, Origin, Scalar, ScalarKind, ScalarStyle, SequenceStyle};
pub use stages::{Presentation, PresentationRules};

/// Produce the event stream for `value` with every presentation rule applied
pub fn events<T: Serialize + ?Sized>(
    value: &T,
    presentation: &Presentation,
) -> CodecResult<Vec<Event>> {
    let graph = prune::prune(graph::capture(value)?);
    presentation.apply(graph::walk(&graph))
}

/// Emit `value` as document text
pub fn to_text<T: Serialize + ?Sized>(
    value: &T,
    presentation: &Presentation,
    newline: &str,
) -> CodecResult<String> {
    let events = events(value, presentation)?;
    writer::render(&events, newline)
}
