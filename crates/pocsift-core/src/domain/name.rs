use crate::domain::identity::title_case;
use crate::domain::phone::extract_phone_digits;
use once_cell::sync::Lazy;
use regex::Regex;

/// Display name used for entries that are not a person's name.
pub const INVALID_NAME: &str = "N/A";

const MAX_NAME_WORDS: usize = 4;
const RANK_NOISE: &str = "A1C";

static TELEPHONE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*Telephone:").expect("telephone marker pattern"));

static LEADING_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*").expect("leading index pattern"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedName {
    pub display_name: String,
    /// Phone number recovered from a `Telephone:` note filed as a name.
    pub extracted_phone: Option<String>,
}

impl CleanedName {
    fn invalid(extracted_phone: Option<String>) -> Self {
        Self {
            display_name: INVALID_NAME.to_string(),
            extracted_phone,
        }
    }
}

/// Turns a raw name field into its display form.
///
/// Telephone notes and anything longer than four words are not names and map
/// to [`INVALID_NAME`]. Everything else loses quotes, a numeric list prefix and
/// the `A1C` rank token, then gets whitespace collapsed and title case applied.
/// A name made only of that noise cleans to an empty string.
pub fn clean_name(raw: &str) -> CleanedName {
    if let Some(marker) = TELEPHONE_MARKER.find(raw) {
        return CleanedName::invalid(extract_phone_digits(&raw[marker.end()..]));
    }

    if raw.split_whitespace().count() > MAX_NAME_WORDS {
        return CleanedName::invalid(None);
    }

    let unquoted: String = raw.chars().filter(|ch| !matches!(ch, '"' | '\'')).collect();
    let unindexed = LEADING_INDEX.replace(&unquoted, "");
    let without_rank = unindexed.replace(RANK_NOISE, "");
    let collapsed = WHITESPACE_RUN.replace_all(&without_rank, " ");
    CleanedName {
        display_name: title_case(collapsed.trim()),
        extracted_phone: None,
    }
}
