use crate::alphabet::Alphabet;

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the registry, both ISO code enums and every
///    per-language dispatch `match` from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $lang:ident, $name:literal,
        iso_639_1: $iso1:ident => $iso1_str:literal,
        iso_639_3: $iso3:ident => $iso3_str:literal,
        alphabets: [ $($alphabet:ident),+ $(,)? ],
        unique: $unique:literal,
        spoken: $spoken:literal
    );* $(;)?) => {
        /// A language known to the registry.
        ///
        /// Declaration order is the registry order and the discriminant is the
        /// stable ordinal used by array-indexed models. `Unknown` is the
        /// "no match" sentinel and is never part of [`Language::all`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum Language {
            $( $lang, )*
            Unknown,
        }

        /// ISO 639-1 two-letter code of a supported language.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum IsoCode639_1 {
            $( $iso1, )*
            Unknown,
        }

        /// ISO 639-3 three-letter code of a supported language.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum IsoCode639_3 {
            $( $iso3, )*
            Unknown,
        }

        // Per-language static data, one module per language
        $(
            paste! {
                mod [<$lang:lower _data>] {
                    use super::*;

                    pub static ALPHABETS: &[Alphabet] = &[$(Alphabet::$alphabet),+];
                    pub const UNIQUE_CHARACTERS: &str = $unique;
                    pub const SPOKEN: bool = $spoken;
                }
            }
        )*

        pub(crate) static LANGUAGES: &[Language] = &[$(Language::$lang),*];

        impl Language {
            /// English name of the language.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Language::$lang => $name, )*
                    Language::Unknown => "Unknown",
                }
            }

            #[inline]
            pub const fn iso_code_639_1(self) -> IsoCode639_1 {
                match self {
                    $( Language::$lang => IsoCode639_1::$iso1, )*
                    Language::Unknown => IsoCode639_1::Unknown,
                }
            }

            #[inline]
            pub const fn iso_code_639_3(self) -> IsoCode639_3 {
                match self {
                    $( Language::$lang => IsoCode639_3::$iso3, )*
                    Language::Unknown => IsoCode639_3::Unknown,
                }
            }

            /// Scripts the language is written in. The first entry is the
            /// primary script; the slice is empty only for `Unknown`.
            #[inline]
            pub fn alphabets(self) -> &'static [Alphabet] {
                paste! {
                    match self {
                        $( Language::$lang => [<$lang:lower _data>]::ALPHABETS, )*
                        Language::Unknown => &[],
                    }
                }
            }

            /// Characters that occur in this language and no other
            /// supported one. Empty when the language owns none.
            #[inline]
            pub const fn unique_characters(self) -> &'static str {
                paste! {
                    match self {
                        $( Language::$lang => [<$lang:lower _data>]::UNIQUE_CHARACTERS, )*
                        Language::Unknown => "",
                    }
                }
            }

            #[inline]
            pub const fn is_spoken(self) -> bool {
                paste! {
                    match self {
                        $( Language::$lang => [<$lang:lower _data>]::SPOKEN, )*
                        Language::Unknown => false,
                    }
                }
            }
        }

        impl IsoCode639_1 {
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( IsoCode639_1::$iso1 => $iso1_str, )*
                    IsoCode639_1::Unknown => "unknown",
                }
            }
        }

        impl IsoCode639_3 {
            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( IsoCode639_3::$iso3 => $iso3_str, )*
                    IsoCode639_3::Unknown => "unknown",
                }
            }
        }

        // Lowercase code string → code. `Unknown` is deliberately absent.
        pub(crate) static ISO_639_1_TABLE: Map<&'static str, IsoCode639_1> = phf_map! {
            $( $iso1_str => IsoCode639_1::$iso1, )*
        };

        pub(crate) static ISO_639_3_TABLE: Map<&'static str, IsoCode639_3> = phf_map! {
            $( $iso3_str => IsoCode639_3::$iso3, )*
        };
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Order matters: it fixes the ordinals and every iteration order.
// ---------------------------------------------------------------------------
// Japanese lists Hiragana first: kana is what separates it from Chinese,
// so Hiragana is the primary script and Han only a secondary one.
// ---------------------------------------------------------------------------
define_languages! {
    Chinese, "Chinese",
        iso_639_1: ZH => "zh",
        iso_639_3: ZHO => "zho",
        alphabets: [Han],
        unique: "",
        spoken: true;

    English, "English",
        iso_639_1: EN => "en",
        iso_639_3: ENG => "eng",
        alphabets: [Latin],
        unique: "",
        spoken: true;

    French, "French",
        iso_639_1: FR => "fr",
        iso_639_3: FRA => "fra",
        alphabets: [Latin],
        unique: "",
        spoken: true;

    German, "German",
        iso_639_1: DE => "de",
        iso_639_3: DEU => "deu",
        alphabets: [Latin],
        unique: "ß",
        spoken: true;

    Italian, "Italian",
        iso_639_1: IT => "it",
        iso_639_3: ITA => "ita",
        alphabets: [Latin],
        unique: "",
        spoken: true;

    Japanese, "Japanese",
        iso_639_1: JA => "ja",
        iso_639_3: JPN => "jpn",
        alphabets: [Hiragana, Katakana, Han],
        unique: "",
        spoken: true;

    Korean, "Korean",
        iso_639_1: KO => "ko",
        iso_639_3: KOR => "kor",
        alphabets: [Hangul],
        unique: "",
        spoken: true;

    Portuguese, "Portuguese",
        iso_639_1: PT => "pt",
        iso_639_3: POR => "por",
        alphabets: [Latin],
        unique: "",
        spoken: true;

    Russian, "Russian",
        iso_639_1: RU => "ru",
        iso_639_3: RUS => "rus",
        alphabets: [Cyrillic],
        unique: "",
        spoken: true;

    Spanish, "Spanish",
        iso_639_1: ES => "es",
        iso_639_3: SPA => "spa",
        alphabets: [Latin],
        unique: "¿¡",
        spoken: true;
}
