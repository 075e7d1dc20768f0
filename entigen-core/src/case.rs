//! Identifier case conversion.
//!
//! Every conversion is idempotent: converting an already converted identifier
//! with the same style returns it unchanged. Files generated by earlier runs
//! keep their names as long as the configured style does not change.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An identifier casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CaseStyle {
    /// `userRole`
    Camel,
    /// `UserRole`
    Pascal,
    /// `user-role` (also accepted as `param`)
    Kebab,
    /// `user_role`
    Snake,
    /// Identifier is kept as written.
    None,
}

/// Raised when a case style name is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case style '{0}' (expected one of: camel, pascal, kebab, param, snake, none)")]
pub struct UnknownCaseStyle(pub String);

impl CaseStyle {
    /// All styles, in declaration order.
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Kebab,
        CaseStyle::Snake,
        CaseStyle::None,
    ];

    /// Returns the canonical style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::None => "none",
        }
    }

    /// Convert `identifier` to this style.
    pub fn apply(&self, identifier: &str) -> String {
        convert_case(identifier, *self)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = UnknownCaseStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            "kebab" | "param" => Ok(CaseStyle::Kebab),
            "snake" => Ok(CaseStyle::Snake),
            "none" => Ok(CaseStyle::None),
            other => Err(UnknownCaseStyle(other.to_string())),
        }
    }
}

impl TryFrom<String> for CaseStyle {
    type Error = UnknownCaseStyle;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaseStyle> for String {
    fn from(style: CaseStyle) -> Self {
        style.as_str().to_string()
    }
}

/// Convert `identifier` to `style`.
pub fn convert_case(identifier: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => to_camel_case(identifier),
        CaseStyle::Pascal => to_pascal_case(identifier),
        CaseStyle::Kebab => to_kebab_case(identifier),
        CaseStyle::Snake => to_snake_case(identifier),
        CaseStyle::None => identifier.to_string(),
    }
}

/// Convert a string to camelCase (e.g., "user_role" -> "userRole")
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in split_words(s).into_iter().enumerate() {
        if i == 0 {
            out.extend(word.chars().flat_map(char::to_lowercase));
        } else {
            push_upper_first(&mut out, word);
        }
    }
    out
}

/// Convert a string to PascalCase (e.g., "user_role" -> "UserRole")
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in split_words(s) {
        push_upper_first(&mut out, word);
    }
    out
}

/// Convert a string to kebab-case (e.g., "UserRole" -> "user-role")
pub fn to_kebab_case(s: &str) -> String {
    join_lower(s, '-')
}

/// Convert a string to snake_case (e.g., "UserRole" -> "user_role")
pub fn to_snake_case(s: &str) -> String {
    join_lower(s, '_')
}

/// Upper-case only the first character (e.g., "userRole" -> "UserRole")
pub fn upper_first(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    push_upper_first(&mut out, s);
    out
}

fn push_upper_first(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn join_lower(s: &str, separator: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, word) in split_words(s).into_iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.extend(word.chars().flat_map(char::to_lowercase));
    }
    out
}

/// Split an identifier into words.
///
/// Non-alphanumeric characters separate words. Inside a run of alphanumerics a
/// new word starts at a lower-case letter or digit followed by a capital, and
/// before the last capital of an upper-case run that continues in lower case
/// (`HTTPServer` -> `HTTP`, `Server`).
fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for chunk in s.split(|c: char| !c.is_alphanumeric()) {
        if chunk.is_empty() {
            continue;
        }

        let chars: Vec<(usize, char)> = chunk.char_indices().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (idx, c) = chars[i];
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|(_, n)| *n);

            let lower_to_upper = c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric());
            let acronym_end = c.is_uppercase()
                && prev.is_uppercase()
                && next.is_some_and(|n| n.is_lowercase());

            if lower_to_upper || acronym_end {
                words.push(&chunk[start..idx]);
                start = idx;
            }
        }

        words.push(&chunk[start..]);
    }

    words
}
