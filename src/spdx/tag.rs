//! SPDX tag extracted from a single source line

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `SPDX-<Name>: <Value>` annotation
///
/// Only ever built from a line that matched the tag pattern, so both
/// fields are always populated together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    /// Key following the `SPDX-` prefix, e.g. `License-Identifier`
    pub name: String,
    /// Remainder of the line after the separator, untrimmed
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPDX-{}: {}", self.name, self.value)
    }
}
