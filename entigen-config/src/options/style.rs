//! Closed enumerations for the `[style]` table.
//!
//! Each type parses from its configuration spelling through `FromStr`, so an
//! unrecognized value fails deserialization instead of falling back to a
//! default.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Line terminator written to generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    /// The host platform's terminator.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "LF",
            LineEnding::Crlf => "CRLF",
        }
    }

    /// The terminator characters.
    pub fn terminator(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }

    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::Crlf),
            "native" => Ok(LineEnding::native()),
            _ => Err(format!(
                "unknown line ending '{s}', expected 'LF', 'CRLF' or 'native'"
            )),
        }
    }
}

/// Access modifier printed before generated properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Visibility {
    #[default]
    None,
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::None => "none",
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }

    /// Text placed before a property name (`"public "`, or nothing).
    pub fn prefix(&self) -> String {
        match self {
            Visibility::None => String::new(),
            other => format!("{} ", other.as_str()),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Visibility::None),
            "public" => Ok(Visibility::Public),
            "protected" => Ok(Visibility::Protected),
            "private" => Ok(Visibility::Private),
            _ => Err(format!(
                "unknown visibility '{s}', expected 'none', 'public', 'protected' or 'private'"
            )),
        }
    }
}

/// TypeScript strict property initialization marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrictMode {
    #[default]
    None,
    /// `name?: T`
    Optional,
    /// `name!: T`
    Definite,
}

impl StrictMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrictMode::None => "none",
            StrictMode::Optional => "?",
            StrictMode::Definite => "!",
        }
    }

    /// Marker placed after a property name.
    pub fn marker(&self) -> &'static str {
        match self {
            StrictMode::None => "",
            StrictMode::Optional => "?",
            StrictMode::Definite => "!",
        }
    }
}

impl FromStr for StrictMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(StrictMode::None),
            "?" => Ok(StrictMode::Optional),
            "!" => Ok(StrictMode::Definite),
            _ => Err(format!(
                "unknown strict mode '{s}', expected 'none', '?' or '!'"
            )),
        }
    }
}

/// How generated declarations are exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExportType {
    #[default]
    Named,
    Default,
}

impl ExportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportType::Named => "named",
            ExportType::Default => "default",
        }
    }
}

impl FromStr for ExportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "named" => Ok(ExportType::Named),
            "default" => Ok(ExportType::Default),
            _ => Err(format!(
                "unknown export type '{s}', expected 'named' or 'default'"
            )),
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }

            impl TryFrom<String> for $ty {
                type Error = String;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }
        )*
    };
}

string_conversions!(LineEnding, Visibility, StrictMode, ExportType);

/// Options of the `[style]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOptions {
    /// Line terminator of generated files (`LF`, `CRLF`; default native).
    pub eol: LineEnding,
    pub visibility: Visibility,
    pub strict_mode: StrictMode,
    pub export: ExportType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_prefix() {
        assert_eq!(Visibility::None.prefix(), "");
        assert_eq!(Visibility::Public.prefix(), "public ");
        assert_eq!(Visibility::Private.prefix(), "private ");
    }

    #[test]
    fn test_strict_mode_marker() {
        assert_eq!("?".parse::<StrictMode>().unwrap().marker(), "?");
        assert_eq!("!".parse::<StrictMode>().unwrap().marker(), "!");
        assert_eq!(StrictMode::None.marker(), "");
        assert!("strict".parse::<StrictMode>().is_err());
    }

    #[test]
    fn test_line_ending_parse() {
        assert_eq!("LF".parse::<LineEnding>().unwrap(), LineEnding::Lf);
        assert_eq!("crlf".parse::<LineEnding>().unwrap(), LineEnding::Crlf);
        assert_eq!("native".parse::<LineEnding>().unwrap(), LineEnding::native());
        assert!("CR".parse::<LineEnding>().is_err());
        assert!(LineEnding::default().is_native());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        assert_eq!(
            Visibility::Protected.to_string().parse::<Visibility>().unwrap(),
            Visibility::Protected
        );
        assert_eq!(
            ExportType::Default.to_string().parse::<ExportType>().unwrap(),
            ExportType::Default
        );
    }
}
