use serde::{Deserialize, Serialize};

/// Deduplication key: the raw name, title-cased and otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn from_raw(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(title_case(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn identity_key(raw: Option<&str>) -> Option<IdentityKey> {
    raw.and_then(IdentityKey::from_raw)
}

/// Upper-cases a letter that starts the string or follows a non-letter and
/// lower-cases every other letter, so `o'neil-smith` becomes `O'Neil-Smith`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_cased = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_cased {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            out.push(ch);
            prev_cased = false;
        }
    }
    out
}
