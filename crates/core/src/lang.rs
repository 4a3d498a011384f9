//! Content languages.
//!
//! The site is bilingual Danish/English. Every content record stores both
//! variants plus the language the author actually typed in, as detected by
//! the translation provider.

use serde::{Deserialize, Serialize};

/// A content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Da,
    En,
}

impl Lang {
    /// Lowercase column value (`"da"` / `"en"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::Da => "da",
            Lang::En => "en",
        }
    }

    /// Uppercase language code for the translation API's `target_lang`
    /// parameter.
    pub fn target_code(self) -> &'static str {
        match self {
            Lang::Da => "DA",
            Lang::En => "EN",
        }
    }

    /// The other site language.
    pub fn other(self) -> Lang {
        match self {
            Lang::Da => Lang::En,
            Lang::En => Lang::Da,
        }
    }

    /// Map a `detected_source_language` code from the translation API onto
    /// a site language.
    ///
    /// The provider may detect languages the site does not carry (pasted
    /// German, say). Anything that is not English is treated as the Danish
    /// original, which matches how the content admin is actually used.
    pub fn from_detected(code: &str) -> Lang {
        if code.eq_ignore_ascii_case("en") {
            Lang::En
        } else {
            Lang::Da
        }
    }

    /// Parse a stored column value.
    pub fn from_column(value: &str) -> Option<Lang> {
        match value {
            "da" => Some(Lang::Da),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_maps_en_case_insensitively() {
        assert_eq!(Lang::from_detected("EN"), Lang::En);
        assert_eq!(Lang::from_detected("en"), Lang::En);
    }

    #[test]
    fn detection_defaults_to_danish() {
        assert_eq!(Lang::from_detected("DA"), Lang::Da);
        assert_eq!(Lang::from_detected("DE"), Lang::Da);
        assert_eq!(Lang::from_detected(""), Lang::Da);
    }

    #[test]
    fn column_roundtrip() {
        assert_eq!(Lang::from_column(Lang::Da.as_str()), Some(Lang::Da));
        assert_eq!(Lang::from_column(Lang::En.as_str()), Some(Lang::En));
        assert_eq!(Lang::from_column("sv"), None);
    }

    #[test]
    fn other_flips() {
        assert_eq!(Lang::Da.other(), Lang::En);
        assert_eq!(Lang::En.other(), Lang::Da);
    }
}
