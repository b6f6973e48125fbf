//! Presentation post-processors
//!
//! Each stage is a pure rewrite of the event stream: it receives the events
//! and the static presentation table and returns new events. Any nesting
//! state a stage needs lives in a context created per call, so one
//! [`Presentation`] can be shared freely between threads.

use crate::error::{CodecError, CodecResult};

use super::event::{Event, Origin, Scalar, ScalarKind, ScalarStyle, SequenceStyle};

/// Fields whose string sequences render as single-line bracketed lists
const FLOW_FIELDS: &[Origin] = &[
    Origin::new("Service", "command"),
    Origin::new("Service", "entrypoint"),
    Origin::new("Placement", "constraints"),
];

/// Static field→presentation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRules {
    flow_fields: Vec<Origin>,
}

impl Default for PresentationRules {
    fn default() -> Self {
        Self {
            flow_fields: FLOW_FIELDS.to_vec(),
        }
    }
}

impl PresentationRules {
    /// Render sequences serialized from `owner.field` in flow style
    pub fn with_flow_field(mut self, owner: &'static str, field: &'static str) -> Self {
        let origin = Origin::new(owner, field);
        if !self.flow_fields.contains(&origin) {
            self.flow_fields.push(origin);
        }
        self
    }

    pub fn is_flow(&self, origin: &Origin) -> bool {
        self.flow_fields.contains(origin)
    }
}

/// One rewrite over the event stream
pub trait PostProcessor: Send + Sync {
    /// Stage name for diagnostics
    fn name(&self) -> &'static str;

    fn process(&self, events: Vec<Event>, rules: &PresentationRules) -> CodecResult<Vec<Event>>;
}

/// Marks sequences from flow-designated fields as [`SequenceStyle::Flow`]
///
/// Only sequences whose items are all scalars qualify; a marked field that
/// holds structured items keeps block style.
#[derive(Debug, Default)]
pub struct FlowSequences;

impl PostProcessor for FlowSequences {
    fn name(&self) -> &'static str {
        "flow-sequences"
    }

    fn process(&self, mut events: Vec<Event>, rules: &PresentationRules) -> CodecResult<Vec<Event>> {
        for index in 0..events.len() {
            let marked = match &events[index] {
                Event::SequenceStart {
                    origin: Some(origin),
                    ..
                } => rules.is_flow(origin) && holds_only_scalars(&events[index + 1..]),
                _ => false,
            };
            if marked {
                if let Event::SequenceStart { style, .. } = &mut events[index] {
                    *style = SequenceStyle::Flow;
                }
            }
        }
        Ok(events)
    }
}

/// True when the sequence whose body starts at `rest` contains only scalars
fn holds_only_scalars(rest: &[Event]) -> bool {
    for event in rest {
        match event {
            Event::Scalar(_) => continue,
            Event::SequenceEnd => return true,
            _ => return false,
        }
    }
    false
}

/// Marks enumerated values and pre-rendered tokens [`ScalarStyle::Bare`]
///
/// Forced quoting skips bare scalars, so wire tokens such as `on-failure`
/// and file modes such as `0440` reach the writer unquoted.
#[derive(Debug, Default)]
pub struct BareTokens;

impl PostProcessor for BareTokens {
    fn name(&self) -> &'static str {
        "bare-tokens"
    }

    fn process(&self, mut events: Vec<Event>, _rules: &PresentationRules) -> CodecResult<Vec<Event>> {
        for event in &mut events {
            if let Event::Scalar(scalar) = event {
                if matches!(scalar.kind, ScalarKind::Enum | ScalarKind::Token) {
                    scalar.style = ScalarStyle::Bare;
                }
            }
        }
        Ok(events)
    }
}

/// Double-quotes every value that is not a number, boolean or null
///
/// Mapping keys stay plain, as do items of flow sequences and scalars an
/// earlier stage marked [`ScalarStyle::Bare`].
#[derive(Debug, Default)]
pub struct ForceQuotedStrings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Root,
    Mapping { at_key: bool },
    Sequence { flow: bool },
}

impl Frame {
    /// Whether the next scalar in this frame is a value that gets quoted
    fn applies(&self) -> bool {
        match self {
            Frame::Root => false,
            Frame::Mapping { at_key } => !at_key,
            Frame::Sequence { flow } => !flow,
        }
    }

    /// A node (scalar or container) was consumed in this frame
    fn advance(&mut self) {
        if let Frame::Mapping { at_key } = self {
            *at_key = !*at_key;
        }
    }
}

/// Nesting context for one quoting pass
#[derive(Debug)]
struct QuoteContext {
    frames: Vec<Frame>,
}

impl QuoteContext {
    fn new() -> Self {
        Self {
            frames: vec![Frame::Root],
        }
    }

    fn current(&mut self) -> CodecResult<&mut Frame> {
        self.frames
            .last_mut()
            .ok_or_else(|| CodecError::Defect("event stream closed the root".to_string()))
    }

    fn open(&mut self, frame: Frame) -> CodecResult<()> {
        self.current()?.advance();
        self.frames.push(frame);
        Ok(())
    }

    fn close(&mut self, mapping: bool) -> CodecResult<()> {
        match (self.frames.pop(), mapping) {
            (Some(Frame::Mapping { .. }), true) | (Some(Frame::Sequence { .. }), false) => Ok(()),
            (frame, _) => Err(CodecError::Defect(format!(
                "unbalanced event stream, closing {} inside {frame:?}",
                if mapping { "mapping" } else { "sequence" }
            ))),
        }
    }
}

fn quotable(scalar: &Scalar) -> bool {
    scalar.style == ScalarStyle::Plain
        && !matches!(
            scalar.kind,
            ScalarKind::Number | ScalarKind::Boolean | ScalarKind::Null
        )
}

impl PostProcessor for ForceQuotedStrings {
    fn name(&self) -> &'static str {
        "force-quoted-strings"
    }

    fn process(&self, mut events: Vec<Event>, _rules: &PresentationRules) -> CodecResult<Vec<Event>> {
        let mut context = QuoteContext::new();
        for event in &mut events {
            match event {
                Event::Scalar(scalar) => {
                    let frame = context.current()?;
                    if frame.applies() && quotable(scalar) {
                        scalar.style = ScalarStyle::DoubleQuoted;
                    }
                    frame.advance();
                }
                Event::MappingStart => context.open(Frame::Mapping { at_key: true })?,
                Event::SequenceStart { style, .. } => context.open(Frame::Sequence {
                    flow: *style == SequenceStyle::Flow,
                })?,
                Event::MappingEnd => context.close(true)?,
                Event::SequenceEnd => context.close(false)?,
            }
        }
        Ok(events)
    }
}

/// Ordered chain of post-processors
pub struct Presentation {
    rules: PresentationRules,
    stages: Vec<Box<dyn PostProcessor>>,
}

impl Presentation {
    /// Flow style, then bare tokens, then forced quoting last
    pub fn standard(rules: PresentationRules) -> Self {
        Self {
            rules,
            stages: vec![
                Box::new(FlowSequences),
                Box::new(BareTokens),
                Box::new(ForceQuotedStrings),
            ],
        }
    }

    pub fn rules(&self) -> &PresentationRules {
        &self.rules
    }

    pub fn apply(&self, events: Vec<Event>) -> CodecResult<Vec<Event>> {
        self.stages.iter().try_fold(events, |events, stage| {
            tracing::trace!(stage = stage.name(), events = events.len(), "applying post-processor");
            stage.process(events, &self.rules)
        })
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::standard(PresentationRules::default())
    }
}

impl std::fmt::Debug for Presentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stages.iter().map(|s| s.name()).collect();
        f.debug_struct("Presentation")
            .field("rules", &self.rules)
            .field("stages", &names)
            .finish()
    }
}
