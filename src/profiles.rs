//! Profile model and extraction.
//!
//! This module turns the sections of an AWS config file into [`Profile`]s:
//! - Loading the config file
//! - Recognizing `[profile <name>]` sections
//! - Filtering by a search string
//! - Sorting by name
//!
//! Only sections written as `[profile <name>]` are profiles. `[default]` and any
//! other unprefixed section are skipped, as is the unnamed global section.

use anyhow::{Context, Result, bail};
use ini::{Ini, ParseOption};
use std::path::Path;

/// Section name prefix that marks a named profile
pub const PROFILE_PREFIX: &str = "profile ";

/// Key holding the account a profile signs in to
pub const ACCOUNT_KEY: &str = "sso_account_id";

/// Key holding a static access key id
pub const ACCESS_KEY: &str = "aws_access_key_id";

/// A named profile read from the AWS config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    account_number: Option<String>,
    account_last_four: Option<String>,
    access_key_id: Option<String>,
}

impl Profile {
    /// Build a profile, returning `None` when the name is empty
    pub fn new(
        name: impl Into<String>,
        account_number: Option<String>,
        access_key_id: Option<String>,
    ) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }

        let account_last_four = account_number.as_deref().and_then(last_four);

        Some(Self {
            name,
            account_number,
            account_last_four,
            access_key_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account_number(&self) -> Option<&str> {
        self.account_number.as_deref()
    }

    /// Trailing four characters of the account number, if it has that many
    pub fn account_last_four(&self) -> Option<&str> {
        self.account_last_four.as_deref()
    }

    pub fn access_key_id(&self) -> Option<&str> {
        self.access_key_id.as_deref()
    }

    /// Whether `search` appears in the name or the account number
    pub fn matches(&self, search: &str) -> bool {
        self.name.contains(search)
            || self
                .account_number
                .as_deref()
                .is_some_and(|account| account.contains(search))
    }
}

/// Last four characters of `value`, or `None` when it is shorter than that
fn last_four(value: &str) -> Option<String> {
    value
        .char_indices()
        .rev()
        .nth(3)
        .map(|(start, _)| value[start..].to_string())
}

/// Profile name for a section, if the section is a profile section
fn profile_name(section: &str) -> Option<&str> {
    let name = section.strip_prefix(PROFILE_PREFIX)?.trim();
    (!name.is_empty()).then_some(name)
}

/// Parse options for AWS config files: backslashes are kept as written
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..Default::default()
    }
}

/// Load the config file and extract its profiles in file order
pub fn load_profiles(config_file: &Path) -> Result<Vec<Profile>> {
    if !config_file.exists() {
        bail!(
            "AWS config file not found: {}\nHint: Run 'aws configure' to create one.",
            config_file.display()
        );
    }

    let ini = Ini::load_from_file_opt(config_file, parse_option())
        .with_context(|| format!("Failed to load AWS config file: {}", config_file.display()))?;

    Ok(extract_profiles(&ini))
}

/// Parse config text the same way `load_profiles` parses a file
pub fn parse_profiles(content: &str) -> Result<Vec<Profile>> {
    let ini = Ini::load_from_str_opt(content, parse_option())
        .context("Failed to parse AWS config")?;
    Ok(extract_profiles(&ini))
}

/// Drop a trailing `;` or `#` comment that follows whitespace
fn strip_inline_comment(value: &str) -> &str {
    let cut = value
        .char_indices()
        .zip(value.chars().skip(1))
        .find(|((_, c), next)| c.is_whitespace() && matches!(next, ';' | '#'))
        .map(|((i, _), _)| i)
        .unwrap_or(value.len());
    value[..cut].trim_end()
}

/// Keys gathered for one profile name across all of its sections
#[derive(Default)]
struct ProfileKeys<'a> {
    account_number: Option<&'a str>,
    access_key_id: Option<&'a str>,
}

/// Walk the loaded sections and build one profile per `[profile <name>]` name.
///
/// Repeated sections for the same name are merged into the first one's slot;
/// a key set again in a later section wins.
pub fn extract_profiles(ini: &Ini) -> Vec<Profile> {
    let mut merged: Vec<(&str, ProfileKeys)> = Vec::new();

    for (section, properties) in ini.iter() {
        let Some(name) = section.and_then(profile_name) else {
            continue;
        };

        let index = match merged.iter().position(|(seen, _)| *seen == name) {
            Some(index) => index,
            None => {
                merged.push((name, ProfileKeys::default()));
                merged.len() - 1
            }
        };

        let keys = &mut merged[index].1;
        if let Some(account) = properties.get(ACCOUNT_KEY) {
            keys.account_number = Some(strip_inline_comment(account));
        }
        if let Some(access_key) = properties.get(ACCESS_KEY) {
            keys.access_key_id = Some(strip_inline_comment(access_key));
        }
    }

    merged
        .into_iter()
        .filter_map(|(name, keys)| {
            Profile::new(
                name,
                keys.account_number.map(str::to_string),
                keys.access_key_id.map(str::to_string),
            )
        })
        .collect()
}

/// Keep profiles whose name or account number contains `search`.
///
/// An empty search keeps everything.
pub fn filter_profiles(profiles: Vec<Profile>, search: &str) -> Vec<Profile> {
    if search.is_empty() {
        return profiles;
    }

    profiles.into_iter().filter(|p| p.matches(search)).collect()
}

/// Order profiles by name (stable)
pub fn sort_profiles(mut profiles: Vec<Profile>) -> Vec<Profile> {
    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    profiles
}
