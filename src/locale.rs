use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Language tag of the Jalali-displaying locale
pub const PERSIAN_TAG: &str = "fa";

/// Display locale supplied by the caller. Only `Persian` renders dates in the
/// Jalali calendar; every other locale passes dates through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Persian,
    /// Any other language tag, kept verbatim
    Other(String),
}

impl Locale {
    /// Whether dates should be shown in the Jalali calendar
    pub const fn displays_jalali(&self) -> bool {
        matches!(self, Self::Persian)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    /// Accepts `fa`, `fa-IR` and `fa_IR` in any case as Persian.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        if language.eq_ignore_ascii_case(PERSIAN_TAG) {
            Ok(Self::Persian)
        } else {
            Ok(Self::Other(tag.to_owned()))
        }
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        match tag.parse() {
            Ok(locale) => locale,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persian => f.write_str(PERSIAN_TAG),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

impl serde::Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}
