//! Rendering of projected listings, in the spirit of `ls`, `ls -1` and `ls -l`.

use chrono::{DateTime, Datelike, Local, Utc};

use super::path_projector::PathEntry;

/// How a listing is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStyle {
    /// Entries on one line separated by two spaces
    #[default]
    Columns,
    /// One entry per line
    OnePerLine,
    /// One entry per line, prefixed with the version date
    Long,
}

impl ListingStyle {
    /// Resolve `-l` / `-1`. Long format wins when both are given.
    pub const fn from_flags(long: bool, one_per_line: bool) -> Self {
        if long {
            Self::Long
        } else if one_per_line {
            Self::OnePerLine
        } else {
            Self::Columns
        }
    }
}

/// Date column for long listings.
///
/// `Mar  1 17:04` for dates in the current year, `Oct 26  1985` otherwise.
/// The entry is shown in UTC; the current year is the local one.
pub fn format_entry_date(date: DateTime<Utc>, now: DateTime<Local>) -> String {
    if date.year() == now.year() {
        date.format("%b %e %H:%M").to_string()
    } else {
        date.format("%b %e  %Y").to_string()
    }
}

/// Render sorted, de-duplicated entries. `now` decides which date layout applies.
pub fn render(entries: &[PathEntry], style: ListingStyle, now: DateTime<Local>) -> String {
    match style {
        ListingStyle::Columns => join_names(entries, "  "),
        ListingStyle::OnePerLine => join_names(entries, "\n"),
        ListingStyle::Long => entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {}",
                    format_entry_date(entry.created_at, now),
                    entry.display_name
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn join_names(entries: &[PathEntry], separator: &str) -> String {
    entries
        .iter()
        .map(|entry| entry.display_name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
