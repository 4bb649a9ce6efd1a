//! Script detection used to pick a locale-appropriate font family.

use std::ops::RangeInclusive;

/// Unicode Devanagari block.
const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Returns `true` iff `text` contains at least one Devanagari code point.
pub fn is_non_latin_script(text: &str) -> bool {
    text.chars().any(|c| DEVANAGARI.contains(&c))
}

/// Language key used to select a font family for a run of text.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FontLanguage {
    /// Latin-script families.
    #[default]
    English,
    /// Devanagari-script families.
    Hindi,
}

impl FontLanguage {
    /// Pick the font language for `text`.
    pub fn for_text(text: &str) -> Self {
        if is_non_latin_script(text) {
            Self::Hindi
        } else {
            Self::English
        }
    }

    /// Stable lowercase name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }
}

impl std::str::FromStr for FontLanguage {
    type Err = crate::SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "hindi" | "hi" => Ok(Self::Hindi),
            other => Err(crate::SceneError::validation(format!(
                "unknown font language '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/classify.rs"]
mod tests;
