use crate::domain::{OutputContactRow, INVALID_NAME};
use crate::error::CoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

static PARENTHESIZED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([^)]*\)\s*").expect("parenthesized prefix pattern"));

static HONORIFIC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Dr\.|Lt\.)\s*").expect("honorific prefix pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    Name,
    City,
    Department,
    Opportunity,
    /// Keeps first-sighting order.
    Unsorted,
}

impl SortPolicy {
    pub fn label(self) -> &'static str {
        match self {
            SortPolicy::Name => "name",
            SortPolicy::City => "city",
            SortPolicy::Department => "department",
            SortPolicy::Opportunity => "opportunity",
            SortPolicy::Unsorted => "unsorted",
        }
    }
}

impl FromStr for SortPolicy {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "name" => Ok(SortPolicy::Name),
            "city" => Ok(SortPolicy::City),
            "department" => Ok(SortPolicy::Department),
            "opportunity" => Ok(SortPolicy::Opportunity),
            "unsorted" => Ok(SortPolicy::Unsorted),
            other => Err(CoreError::UnknownSortPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort key for the `name` policy. Invalid names order after every real name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameSortKey {
    Named(String),
    Invalid,
}

pub fn name_sort_key(name: &str) -> NameSortKey {
    if name == INVALID_NAME {
        return NameSortKey::Invalid;
    }
    let without_group = PARENTHESIZED_PREFIX.replace(name, "");
    let without_title = HONORIFIC_PREFIX.replace(&without_group, "");
    NameSortKey::Named(without_title.into_owned())
}

/// Stable sort by the given policy.
pub fn sort_contacts(rows: &mut [OutputContactRow], policy: SortPolicy) {
    match policy {
        SortPolicy::Name => rows.sort_by_cached_key(|row| name_sort_key(&row.name)),
        SortPolicy::City => rows.sort_by(|a, b| {
            compare_missing_last(&a.state, &b.state)
                .then_with(|| compare_missing_last(&a.city, &b.city))
        }),
        SortPolicy::Department => {
            rows.sort_by(|a, b| a.associated_departments.cmp(&b.associated_departments))
        }
        SortPolicy::Opportunity => {
            rows.sort_by(|a, b| b.opportunity_count.cmp(&a.opportunity_count))
        }
        SortPolicy::Unsorted => {}
    }
}

fn compare_missing_last(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
