pub mod data;
pub mod iso;

use std::{fmt, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::alphabet::Alphabet;

pub use data::{IsoCode639_1, IsoCode639_3, Language};
use data::LANGUAGES;

/// Failure to turn a string into a registry value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("unknown ISO 639-1 code `{0}`")]
    UnknownIsoCode639_1(String),

    #[error("unknown ISO 639-3 code `{0}`")]
    UnknownIsoCode639_3(String),
}

impl Language {
    /// Every supported language in registry order. `Unknown` is excluded.
    #[inline(always)]
    pub fn all() -> &'static [Language] {
        LANGUAGES
    }

    /// Supported languages that are still spoken, in registry order.
    ///
    /// Every language currently in the registry is a living one, so this
    /// returns the same languages as [`Language::all`].
    pub fn all_spoken_languages() -> Vec<Language> {
        LANGUAGES.iter().copied().filter(|l| l.is_spoken()).collect()
    }

    /// Languages whose primary alphabet is `script`, in registry order.
    pub fn all_with_script(script: Alphabet) -> Vec<Language> {
        LANGUAGES
            .iter()
            .copied()
            .filter(|l| l.alphabets().first() == Some(&script))
            .collect()
    }

    #[inline]
    pub fn all_with_arabic_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Arabic)
    }

    #[inline]
    pub fn all_with_cyrillic_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Cyrillic)
    }

    #[inline]
    pub fn all_with_devanagari_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Devanagari)
    }

    #[inline]
    pub fn all_with_latin_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Latin)
    }

    /// Languages that own at least one unique character.
    pub fn all_with_unique_characters() -> Vec<Language> {
        LANGUAGES
            .iter()
            .copied()
            .filter(|l| !l.unique_characters().is_empty())
            .collect()
    }

    /// `Unknown` if no supported language carries `code`.
    pub fn from_iso_code_639_1(code: IsoCode639_1) -> Language {
        LANGUAGES
            .iter()
            .copied()
            .find(|l| l.iso_code_639_1() == code)
            .unwrap_or(Language::Unknown)
    }

    /// `Unknown` if no supported language carries `code`.
    pub fn from_iso_code_639_3(code: IsoCode639_3) -> Language {
        LANGUAGES
            .iter()
            .copied()
            .find(|l| l.iso_code_639_3() == code)
            .unwrap_or(Language::Unknown)
    }

    /// The language that owns `c` exclusively, if any.
    pub fn from_unique_character(c: char) -> Option<Language> {
        LANGUAGES
            .iter()
            .copied()
            .find(|l| l.unique_characters().contains(c))
    }

    /// Stable index of the language, `Unknown` included (last).
    #[inline(always)]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// True if `text` is non-empty and every character belongs to one of
    /// the language's alphabets. Mixed Hiragana/Katakana/Han text is
    /// therefore written in Japanese, while pure Han is written in both
    /// Chinese and Japanese.
    pub fn is_written_in(self, text: &str) -> bool {
        let alphabets = self.alphabets();
        !text.is_empty()
            && text
                .chars()
                .all(|c| alphabets.iter().any(|a| a.matches_char(c)))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the English name or an ISO 639-1 / 639-3 code, case-insensitively.
impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(lang) = LANGUAGES.iter().find(|l| l.name().eq_ignore_ascii_case(s)) {
            return Ok(*lang);
        }
        let by_code = match s.len() {
            2 => s.parse::<IsoCode639_1>().ok().map(Language::from_iso_code_639_1),
            3 => s.parse::<IsoCode639_3>().ok().map(Language::from_iso_code_639_3),
            _ => None,
        };
        by_code.ok_or_else(|| {
            debug!("no language matches `{s}`");
            ParseError::UnknownLanguage(s.to_owned())
        })
    }
}
