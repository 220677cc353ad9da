//! Strongly-typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Correlation identifier pairing an emitted message with its eventual reply.
///
/// Job identifiers are positive integers drawn from an incrementing counter
/// starting at 1. They are never reused within a router's lifetime and are
/// not persisted — no in-flight job survives a process restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
