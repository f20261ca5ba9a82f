//! Locale tags and the host default locale

pub(crate) mod cldr;

use std::fmt;
use std::str::FromStr;

use crate::error::SimpleTimeError;

pub(crate) use cldr::LocaleData;

/// Environment variables consulted for the host locale, highest priority first
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// A language/region tag such as `en-US`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parse a BCP-47 (`en-US`) or POSIX (`en_US.UTF-8`) locale tag.
    ///
    /// Script and variant subtags are accepted and dropped.
    pub fn parse(tag: &str) -> Result<Self, SimpleTimeError> {
        let invalid = || SimpleTimeError::InvalidLocale(tag.to_string());

        // Strip POSIX ".encoding" and "@modifier" suffixes
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let mut subtags = base.split(['-', '_']);

        let language = subtags.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(invalid());
        }

        let mut region = None;
        for subtag in subtags {
            if subtag.is_empty() {
                return Err(invalid());
            }
            let is_region = (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
                || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()));
            if is_region && region.is_none() {
                region = Some(subtag.to_ascii_uppercase());
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// English (United States), the fallback locale
    pub fn en_us() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }

    /// The host's default locale, read from `LC_ALL`, `LC_TIME` and `LANG`.
    ///
    /// Falls back to en-US when none is set or usable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|&key| lookup(key))
            .filter(|value| !matches!(value.split('.').next(), Some("" | "C" | "POSIX")))
            .find_map(|value| Self::parse(&value).ok())
            .unwrap_or_else(Self::en_us)
    }

    /// Lowercase ISO 639 language code
    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase region code, if any
    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub(crate) fn data(&self) -> &'static LocaleData {
        cldr::lookup(self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FromStr for Locale {
    type Err = SimpleTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bcp47_and_posix() {
        let us: Locale = "en-US".parse().unwrap();
        assert_eq!(us.language(), "en");
        assert_eq!(us.region(), Some("US"));

        let de = Locale::parse("de_DE.UTF-8@euro").unwrap();
        assert_eq!(de.to_string(), "de-DE");

        let zh = Locale::parse("zh-Hant-TW").unwrap();
        assert_eq!(zh.to_string(), "zh-TW");

        let fr = Locale::parse("FR").unwrap();
        assert_eq!(fr.to_string(), "fr");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for tag in ["", "e", "english", "12-US", "en--US"] {
            assert_eq!(
                Locale::parse(tag),
                Err(SimpleTimeError::InvalidLocale(tag.to_string())),
                "tag {tag:?}"
            );
        }
    }

    #[test]
    fn test_from_lookup_priority_and_fallback() {
        let locale = Locale::from_lookup(|key| match key {
            "LC_ALL" => Some(String::new()),
            "LC_TIME" => Some("fr_FR.UTF-8".into()),
            "LANG" => Some("de_DE.UTF-8".into()),
            _ => None,
        });
        assert_eq!(locale.to_string(), "fr-FR");

        let posix = Locale::from_lookup(|key| (key == "LANG").then(|| "C.UTF-8".to_string()));
        assert_eq!(posix, Locale::en_us());

        assert_eq!(Locale::from_lookup(|_| None), Locale::en_us());
    }
}
