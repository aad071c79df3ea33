//! Unicode script families and whole-string script membership.
//!
//! Every [`Alphabet`] is backed by a `^\p{Script}+$` pattern compiled once on
//! first use. Membership is decided per Unicode `Script` property, so
//! characters whose script is `Common` or `Inherited` (ASCII digits, most
//! punctuation, the space, the Katakana prolonged sound mark) belong to no
//! alphabet. An empty string matches no alphabet.

use std::{fmt, sync::LazyLock};

use log::trace;
use regex::Regex;

use crate::lang::Language;

macro_rules! define_alphabets {
    ($($alphabet:ident),+ $(,)?) => {
        /// A Unicode script family a language can be written in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        pub enum Alphabet {
            $( $alphabet, )+
        }

        static ALPHABETS: &[Alphabet] = &[$(Alphabet::$alphabet),+];

        impl Alphabet {
            /// Unicode script name, as used in `\p{..}` classes.
            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Alphabet::$alphabet => stringify!($alphabet), )+
                }
            }
        }
    };
}

define_alphabets! {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Tamil,
    Telugu,
    Thai,
}

// Indexed by `Alphabet as usize`.
static SCRIPT_MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ALPHABETS
        .iter()
        .map(|alphabet| {
            trace!("compiling script matcher for {alphabet}");
            Regex::new(&format!(r"^\p{{{}}}+$", alphabet.name()))
                .expect("every Alphabet name is a Unicode script known to regex")
        })
        .collect()
});

impl Alphabet {
    #[inline(always)]
    pub fn all() -> &'static [Alphabet] {
        ALPHABETS
    }

    /// True if `text` is non-empty and consists only of this script.
    #[inline]
    pub fn matches(self, text: &str) -> bool {
        SCRIPT_MATCHERS[self as usize].is_match(text)
    }

    #[inline]
    pub fn matches_char(self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.matches(c.encode_utf8(&mut buf))
    }

    /// Every supported language that lists this alphabet, primary or not.
    pub fn languages(self) -> Vec<Language> {
        Language::all()
            .iter()
            .copied()
            .filter(|l| l.alphabets().contains(&self))
            .collect()
    }

    /// Alphabets used by exactly one supported language, paired with it.
    /// Seeing such a script in a text settles the language outright.
    pub fn all_supporting_exactly_one_language() -> Vec<(Alphabet, Language)> {
        ALPHABETS
            .iter()
            .filter_map(|&alphabet| match alphabet.languages().as_slice() {
                [only] => Some((alphabet, *only)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
