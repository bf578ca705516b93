//! Column-aligned profile output.
//!
//! Rows have no header and no borders. Every column is as wide as its widest
//! cell with at least one space before the next column.

use anyhow::{Context, Result};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use std::io::Write;

use crate::profiles::Profile;

/// Which columns to print
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Last four of the account, then the name
    #[default]
    Short,
    /// Full account number, access key id, then the name
    Full,
}

impl Layout {
    pub fn from_long_flag(long: bool) -> Self {
        if long { Self::Full } else { Self::Short }
    }

    fn row(self, profile: &Profile) -> Vec<Cell> {
        let cell = |value: Option<&str>| Cell::new(value.unwrap_or_default());
        match self {
            Self::Short => vec![cell(profile.account_last_four()), Cell::new(profile.name())],
            Self::Full => vec![
                cell(profile.account_number()),
                cell(profile.access_key_id()),
                Cell::new(profile.name()),
            ],
        }
    }
}

/// Format profiles into aligned lines, one per profile
pub fn format_profiles(profiles: &[Profile], layout: Layout) -> Vec<String> {
    if profiles.is_empty() {
        return Vec::new();
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled);

    for profile in profiles {
        table.add_row(layout.row(profile));
    }

    for column in table.column_iter_mut() {
        column.set_padding((0, 1));
    }

    table
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Write the profile table to `out` and flush it
pub fn render_profiles<W: Write>(profiles: &[Profile], layout: Layout, out: &mut W) -> Result<()> {
    for line in format_profiles(profiles, layout) {
        writeln!(out, "{line}").context("Failed to write output")?;
    }
    out.flush().context("Failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Profile> {
        vec![
            Profile::new(
                "alpha",
                Some("123456789012".to_string()),
                Some("AKIAALPHA".to_string()),
            )
            .unwrap(),
            Profile::new("beta", None, None).unwrap(),
            Profile::new("gamma-long", Some("210987654321".to_string()), None).unwrap(),
        ]
    }

    #[test]
    fn test_short_layout() {
        let lines = format_profiles(&sample(), Layout::Short);
        assert_eq!(lines, vec!["9012 alpha", "     beta", "4321 gamma-long"]);
    }

    #[test]
    fn test_full_layout() {
        let lines = format_profiles(&sample(), Layout::Full);
        assert_eq!(
            lines,
            vec![
                "123456789012 AKIAALPHA alpha",
                "                       beta",
                "210987654321           gamma-long",
            ]
        );
    }

    #[test]
    fn test_short_layout_hides_full_identifiers() {
        let output = format_profiles(&sample(), Layout::Short).join("\n");
        assert!(!output.contains("123456789012"));
        assert!(!output.contains("AKIAALPHA"));
    }

    #[test]
    fn test_empty_profiles_render_nothing() {
        let mut out = Vec::new();
        render_profiles(&[], Layout::Full, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_writes_lines() {
        let mut out = Vec::new();
        render_profiles(&sample()[..2], Layout::Short, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "9012 alpha\n     beta\n");
    }

    #[test]
    fn test_layout_from_flag() {
        assert_eq!(Layout::from_long_flag(true), Layout::Full);
        assert_eq!(Layout::from_long_flag(false), Layout::Short);
    }
}
