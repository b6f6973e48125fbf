//! Suppression of absent and empty values
//!
//! Runs on the captured graph before any events exist. A struct field whose
//! value is null, an empty collection, or a record that prunes down to
//! nothing is dropped entirely, so the output never carries `key: []` or
//! `key: {}` for an unset field. Entries of name→entity maps are kept because
//! the name itself is the declaration.

use super::graph::{MappingKind, Node};

/// Prune a captured document
///
/// The root itself is never removed; an empty root stays an empty mapping.
pub fn prune(node: Node) -> Node {
    match node {
        Node::Mapping { kind, entries } => Node::Mapping {
            kind,
            entries: prune_entries(kind, entries),
        },
        Node::Sequence { origin, items } => Node::Sequence {
            origin,
            items: items.into_iter().map(prune).collect(),
        },
        other => other,
    }
}

fn prune_entries(kind: MappingKind, entries: Vec<(String, Node)>) -> Vec<(String, Node)> {
    entries
        .into_iter()
        .filter_map(|(key, value)| {
            let value = prune(value);
            let suppressed = kind == MappingKind::Record
                && (matches!(value, Node::Null) || value.is_empty_container());
            (!suppressed).then_some((key, value))
        })
        .collect()
}
