//! Rendering of scan results

use crate::spdx::Tag;
use prettytable::{format, row, Table};
use std::io::Write;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Output formats for the tag list
#[derive(EnumIter, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Name/value table followed by a count
    Text,
    /// Pretty-printed JSON array of `{name, value}` objects
    Json,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::iter().map(|f| f.name()).collect()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

/// Write `tags` to `w` in the requested format
pub fn write_tags<W: Write + ?Sized>(
    w: &mut W,
    tags: &[Tag],
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => write_text(w, tags),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, tags)?;
            writeln!(w)
        }
    }
}

fn write_text<W: Write + ?Sized>(w: &mut W, tags: &[Tag]) -> std::io::Result<()> {
    if !tags.is_empty() {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row!["Name", "Value"]);
        for tag in tags {
            table.add_row(row![tag.name, tag.value]);
        }
        table.print(w)?;
    }

    match tags.len() {
        1 => writeln!(w, "1 tag found"),
        n => writeln!(w, "{n} tags found"),
    }
}
