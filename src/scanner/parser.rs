//! Single-line tag matching
//!
//! A tag line is any comment-looking line of the form
//! `<ws>* [#/*]+ <ws>* SPDX-<Key>: <ws>* <Value>`. The pattern is compiled
//! once on first use and shared read-only by every scan task.

use crate::spdx::Tag;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled tag pattern; capture 1 is the key, capture 2 the value
pub static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[#/*]+\s*SPDX-(\S+):\s*(.*)").expect("tag pattern is a valid regex")
});

/// Check a line for an SPDX tag
///
/// Returns `None` for anything that does not match; a non-matching line is
/// never an error.
pub fn parse_line(line: &str) -> Option<Tag> {
    let captures = TAG_PATTERN.captures(line)?;
    let name = captures.get(1)?.as_str();
    let value = captures.get(2).map_or("", |m| m.as_str());
    Some(Tag::new(name, value))
}
