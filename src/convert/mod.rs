//! Hand-written converters
//!
//! Serde implementations for the values whose wire shape differs from their
//! in-memory shape. Everything else in the model uses derived impls.

mod build_args;
mod collection;
mod mode;
mod port;
mod short_or_long;
