//! One-shot feedback shown after a write.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status message produced by a committed write.
///
/// Adapters carry this to the next rendered page exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Added,
    Updated,
    Deleted,
}

impl Feedback {
    /// Human-readable message for the listing page.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "Contact added.",
            Self::Updated => "Contact updated.",
            Self::Deleted => "Contact deleted.",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The result of a committed write: the stored value plus the feedback to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    pub value: T,
    pub feedback: Feedback,
}

impl<T> Committed<T> {
    pub const fn new(value: T, feedback: Feedback) -> Self {
        Self { value, feedback }
    }
}
