//! Path-keyed error accumulator

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Collected error messages, keyed by dotted path (`self`, `self.a`, `self.1.0`).
///
/// A path that is missing, or that maps to an empty list, validated cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSink {
    entries: BTreeMap<String, Vec<String>>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages at `path`, creating an empty bucket on first access
    pub fn entry(&mut self, path: &str) -> &mut Vec<String> {
        self.entries.entry(path.to_string()).or_default()
    }

    /// Append a message to the bucket at `path`
    pub fn push(&mut self, path: &str, message: impl Into<String>) {
        self.entry(path).push(message.into());
    }

    /// Messages at `path`; empty when nothing was reported there
    pub fn get(&self, path: &str) -> &[String] {
        self.entries.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no bucket holds a message.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Number of paths with at least one message
    pub fn len(&self) -> usize {
        self.entries.values().filter(|m| !m.is_empty()).count()
    }

    /// Total number of messages across all paths
    pub fn message_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn contains(&self, path: &str, message: &str) -> bool {
        self.get(path).iter().any(|m| m == message)
    }

    /// Iterate non-empty buckets in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(p, m)| (p.as_str(), m.as_slice()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(p, _)| p)
    }

    /// Append every message of `other`, keeping per-path order
    pub fn merge(&mut self, other: ErrorSink) {
        for (path, messages) in other.entries {
            self.entries.entry(path).or_default().extend(messages);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.entries
    }
}

impl fmt::Display for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (path, messages) in self.iter() {
            for message in messages {
                writeln!(f, "{}: {}", path, message)?;
            }
        }
        Ok(())
    }
}
