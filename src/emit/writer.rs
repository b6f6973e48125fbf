//! Text writer for the rewritten event stream
//!
//! Block mappings indent by two spaces; block sequences sit at the same
//! indentation as their key. Mappings inside sequence items start on the
//! dash line:
//!
//! ```text
//! services:
//!   web:
//!     ports:
//!     - target: 80
//!       published: 8080
//! ```

use crate::error::{CodecError, CodecResult};

use super::escape::{double_quote, needs_quotes};
use super::event::{Event, Scalar, ScalarKind, ScalarStyle, SequenceStyle};

const INDENT: usize = 2;

/// Render a complete document
pub fn render(events: &[Event], newline: &str) -> CodecResult<String> {
    let mut writer = Writer {
        events,
        pos: 0,
        out: String::new(),
        newline,
    };
    writer.write_document()?;
    if writer.pos != events.len() {
        return Err(CodecError::Defect(format!(
            "{} trailing events after document",
            events.len() - writer.pos
        )));
    }
    Ok(writer.out)
}

struct Writer<'a> {
    events: &'a [Event],
    pos: usize,
    out: String,
    newline: &'a str,
}

impl<'a> Writer<'a> {
    fn next(&mut self) -> CodecResult<&'a Event> {
        let event = self
            .events
            .get(self.pos)
            .ok_or_else(|| CodecError::Defect("event stream ended early".to_string()))?;
        self.pos += 1;
        Ok(event)
    }

    /// Consume the closing event if the container just opened is empty
    fn take_if(&mut self, expected: &Event) -> bool {
        if self.events.get(self.pos) == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn newline(&mut self) {
        self.out.push_str(self.newline);
    }

    fn indent(&mut self, width: usize) {
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn write_document(&mut self) -> CodecResult<()> {
        match self.next()? {
            Event::MappingStart => {
                if self.take_if(&Event::MappingEnd) {
                    self.out.push_str("{}");
                    self.newline();
                    Ok(())
                } else {
                    self.write_mapping(0, false)
                }
            }
            Event::SequenceStart { style, .. } => {
                if *style == SequenceStyle::Flow {
                    self.write_flow_sequence()?;
                    self.newline();
                    Ok(())
                } else if self.take_if(&Event::SequenceEnd) {
                    self.out.push_str("[]");
                    self.newline();
                    Ok(())
                } else {
                    self.write_sequence(0, false)
                }
            }
            Event::Scalar(scalar) => {
                self.out.push_str(&render_scalar(scalar, false));
                self.newline();
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }

    /// Entries of an open mapping, up to and including its end event
    fn write_mapping(&mut self, indent: usize, inline_first: bool) -> CodecResult<()> {
        let mut first = true;
        loop {
            let key = match self.next()? {
                Event::MappingEnd => return Ok(()),
                Event::Scalar(key) => key,
                other => return Err(unexpected(other)),
            };
            if !(first && inline_first) {
                self.indent(indent);
            }
            first = false;
            self.out.push_str(&render_key(&key.value));
            self.out.push(':');
            self.write_mapping_value(indent)?;
        }
    }

    fn write_mapping_value(&mut self, indent: usize) -> CodecResult<()> {
        match self.next()? {
            Event::Scalar(scalar) => {
                if scalar.kind != ScalarKind::Null {
                    self.out.push(' ');
                    self.out.push_str(&render_scalar(scalar, false));
                }
                self.newline();
            }
            Event::MappingStart => {
                if self.take_if(&Event::MappingEnd) {
                    self.out.push_str(" {}");
                    self.newline();
                } else {
                    self.newline();
                    self.write_mapping(indent + INDENT, false)?;
                }
            }
            Event::SequenceStart { style, .. } => {
                if *style == SequenceStyle::Flow {
                    self.out.push(' ');
                    self.write_flow_sequence()?;
                    self.newline();
                } else if self.take_if(&Event::SequenceEnd) {
                    self.out.push_str(" []");
                    self.newline();
                } else {
                    self.newline();
                    self.write_sequence(indent, false)?;
                }
            }
            other => return Err(unexpected(other)),
        }
        Ok(())
    }

    /// Items of an open block sequence, up to and including its end event
    fn write_sequence(&mut self, indent: usize, inline_first: bool) -> CodecResult<()> {
        let mut first = true;
        loop {
            let event = self.next()?;
            if *event == Event::SequenceEnd {
                return Ok(());
            }
            if !(first && inline_first) {
                self.indent(indent);
            }
            first = false;
            self.out.push('-');
            match event {
                Event::Scalar(scalar) => {
                    if scalar.kind != ScalarKind::Null {
                        self.out.push(' ');
                        self.out.push_str(&render_scalar(scalar, false));
                    }
                    self.newline();
                }
                Event::MappingStart => {
                    if self.take_if(&Event::MappingEnd) {
                        self.out.push_str(" {}");
                        self.newline();
                    } else {
                        self.out.push(' ');
                        self.write_mapping(indent + INDENT, true)?;
                    }
                }
                Event::SequenceStart { style, .. } => {
                    if *style == SequenceStyle::Flow {
                        self.out.push(' ');
                        self.write_flow_sequence()?;
                        self.newline();
                    } else if self.take_if(&Event::SequenceEnd) {
                        self.out.push_str(" []");
                        self.newline();
                    } else {
                        self.out.push(' ');
                        self.write_sequence(indent + INDENT, true)?;
                    }
                }
                other => return Err(unexpected(other)),
            }
        }
    }

    /// `[a, b]` for an open sequence, up to and including its end event
    fn write_flow_sequence(&mut self) -> CodecResult<()> {
        self.out.push('[');
        let mut first = true;
        loop {
            let event = self.next()?;
            if *event == Event::SequenceEnd {
                break;
            }
            if !first {
                self.out.push_str(", ");
            }
            first = false;
            match event {
                Event::Scalar(scalar) => self.out.push_str(&render_scalar(scalar, true)),
                Event::SequenceStart { .. } => self.write_flow_sequence()?,
                other => return Err(unexpected(other)),
            }
        }
        self.out.push(']');
        Ok(())
    }
}

fn unexpected(event: &Event) -> CodecError {
    CodecError::Defect(format!("unexpected event {event:?}"))
}

fn render_key(key: &str) -> String {
    if needs_quotes(key) {
        double_quote(key)
    } else {
        key.to_string()
    }
}

fn render_scalar(scalar: &Scalar, in_flow: bool) -> String {
    match (scalar.style, scalar.kind) {
        (_, ScalarKind::Null) if in_flow => "null".to_string(),
        (_, ScalarKind::Null) => String::new(),
        (ScalarStyle::DoubleQuoted, _) => double_quote(&scalar.value),
        (ScalarStyle::Bare, _) => scalar.value.clone(),
        (ScalarStyle::Plain, ScalarKind::Text) if needs_quotes(&scalar.value) => {
            double_quote(&scalar.value)
        }
        (ScalarStyle::Plain, _) => scalar.value.clone(),
    }
}
