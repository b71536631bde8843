use crate::error::CoreError;
use std::collections::HashSet;

/// Tokens that mark a cell as absent in exported opportunity sheets.
pub const DEFAULT_MISSING_VALUES: [&str; 9] =
    ["", "NA", "N/A", "NULL", "null", "NaN", "nan", "None", "#N/A"];

/// Converts raw cells into `Option<String>`; blank cells are always missing.
///
/// Tokens are compared against the trimmed cell, but present cells are kept
/// exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingValues {
    tokens: HashSet<String>,
}

impl Default for MissingValues {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_MISSING_VALUES
                .iter()
                .filter(|token| !token.is_empty())
                .map(|token| token.to_string())
                .collect(),
        }
    }
}

impl MissingValues {
    pub fn new<I, S>(tokens: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for token in tokens {
            let trimmed = token.as_ref().trim();
            if trimmed.is_empty() {
                // An explicit "" is a no-op; blank cells are always missing.
                if token.as_ref().is_empty() {
                    continue;
                }
                return Err(CoreError::BlankMissingValue(token.as_ref().to_string()));
            }
            set.insert(trimmed.to_string());
        }
        Ok(Self { tokens: set })
    }

    pub fn is_missing(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        trimmed.is_empty() || self.tokens.contains(trimmed)
    }

    pub fn normalize(&self, raw: &str) -> Option<String> {
        if self.is_missing(raw) {
            return None;
        }
        Some(raw.to_string())
    }
}
