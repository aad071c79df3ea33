use std::{fmt, str::FromStr};

use log::debug;

use crate::lang::{
    Language, ParseError,
    data::{ISO_639_1_TABLE, ISO_639_3_TABLE, IsoCode639_1, IsoCode639_3},
};

impl IsoCode639_1 {
    /// Reverse lookup; `Language::Unknown` for the `Unknown` code.
    #[inline]
    pub fn language(self) -> Language {
        Language::from_iso_code_639_1(self)
    }
}

impl IsoCode639_3 {
    /// Reverse lookup; `Language::Unknown` for the `Unknown` code.
    #[inline]
    pub fn language(self) -> Language {
        Language::from_iso_code_639_3(self)
    }
}

impl fmt::Display for IsoCode639_1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IsoCode639_3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The `Unknown` sentinel is not a code and never parses.
impl FromStr for IsoCode639_1 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ISO_639_1_TABLE
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                debug!("`{s}` is not a supported ISO 639-1 code");
                ParseError::UnknownIsoCode639_1(s.to_owned())
            })
    }
}

impl FromStr for IsoCode639_3 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ISO_639_3_TABLE
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                debug!("`{s}` is not a supported ISO 639-3 code");
                ParseError::UnknownIsoCode639_3(s.to_owned())
            })
    }
}
