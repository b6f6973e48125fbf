//! Ordered per-service collections of union values
//!
//! Order is significant: name lookups return the first match and the
//! position of a mount communicates layering to the engine.

use std::ops::Index;

use super::short_or_long::{LongForm, ShortOrLong};

/// Ordered list of volumes, secrets or configs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItems<T> {
    items: Vec<T>,
}

impl<T> Default for ServiceItems<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ServiceItems<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// Name-only access for call sites that treat entries as plain strings
impl<L: LongForm> ServiceItems<ShortOrLong<L>> {
    pub fn push_short(&mut self, literal: impl Into<String>) {
        self.items.push(ShortOrLong::short(literal));
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Index of the first entry whose string view equals `name`
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.as_str() == name)
    }

    /// Remove the first entry named `name`
    pub fn remove_name(&mut self, name: &str) -> Option<ShortOrLong<L>> {
        self.position_of(name).map(|index| self.items.remove(index))
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(ShortOrLong::as_str).collect()
    }
}

impl<T> Index<usize> for ServiceItems<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> From<Vec<T>> for ServiceItems<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ServiceItems<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ServiceItems<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ServiceItems<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ServiceItems<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
