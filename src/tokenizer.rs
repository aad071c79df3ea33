// src/tokenizer.rs
//! Regex-level word segmentation feeding n-gram extraction.
//!
//! A token is either a single Han, Hangul, Hiragana or Katakana character,
//! or a maximal run of any other letters. These four scripts do not separate
//! words with spaces, so they are never grouped into runs, not even when
//! they follow a Latin or Cyrillic letter directly.
//!
//! ```text
//! Input:  "東京は素晴らしい"
//! Tokens: 東 | 京 | は | 素 | 晴 | ら | し | い
//!
//! Input:  "Don't stop-go, 2024!"
//! Tokens: "Don't "     (word "Don't")
//!         "stop-go, "  (word "stop-go")
//! ```
//!
//! Numerals and punctuation are only kept when they trail a word, so the
//! trailing "2024!" above produces no token.
//!
//! All iterators borrow the input, are lazy, finite and fused. A
//! [`Tokenizer`] is `Copy`, so the same text can be walked any number of
//! times.

use std::{iter::FusedIterator, sync::LazyLock};

use log::trace;
use regex::{CaptureMatches, Matches, Regex};

const SEGMENTED_SCRIPTS: &str = r"\p{Han}\p{Hangul}\p{Hiragana}\p{Katakana}";

fn compile(name: &str, pattern: &str) -> Regex {
    trace!("compiling {name} pattern");
    Regex::new(pattern).expect("tokenizer patterns are valid")
}

static TOKENS_WITH_OPTIONAL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "token",
        &format!(
            r"\s*(?P<word>\p{{Han}}|\p{{Hangul}}|\p{{Hiragana}}|\p{{Katakana}}|[[\p{{L}}'-]--[{SEGMENTED_SCRIPTS}]]+)[\p{{N}}\p{{P}}]*\s*"
        ),
    )
});

static LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        "letter",
        &format!(
            r"\p{{Han}}|\p{{Hangul}}|\p{{Hiragana}}|\p{{Katakana}}|[\p{{L}}--[{SEGMENTED_SCRIPTS}]]+"
        ),
    )
});

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| compile("punctuation", r"\p{P}"));
static NUMBERS: LazyLock<Regex> = LazyLock::new(|| compile("number", r"\p{N}"));
static MULTIPLE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile("whitespace", r"\s+"));

/// A token together with the whitespace, numerals and punctuation around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    span: &'a str,
    word: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    /// Full match: leading whitespace, the word, trailing numerals,
    /// punctuation and whitespace.
    #[inline(always)]
    pub fn span(&self) -> &'a str {
        self.span
    }

    /// The word alone, apostrophes and hyphens inside it kept.
    #[inline(always)]
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Byte offset of [`Token::span`] in the input.
    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }
}

/// Iterator over [`Token`]s. See [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    inner: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        let span = caps.get(0)?;
        let word = caps.name("word")?;
        Some(Token {
            span: span.as_str(),
            word: word.as_str(),
            start: span.start(),
        })
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterator over letter-only tokens. See [`Tokenizer::letters`].
#[derive(Debug)]
pub struct Letters<'a> {
    inner: Matches<'static, 'a>,
}

impl<'a> Iterator for Letters<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

impl FusedIterator for Letters<'_> {}

/// Restartable view over a text. Every call hands out a fresh iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer<'a> {
    text: &'a str,
}

impl<'a> Tokenizer<'a> {
    #[inline(always)]
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    #[inline(always)]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Tokens keeping their surrounding whitespace, numerals and punctuation.
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens {
            inner: TOKENS_WITH_OPTIONAL_WHITESPACE.captures_iter(self.text),
        }
    }

    /// The bare words of [`Tokenizer::tokens`].
    pub fn words(self) -> impl FusedIterator<Item = &'a str> {
        self.tokens().map(|t| t.word())
    }

    /// Letter runs only; apostrophes, hyphens and everything else that is
    /// not a letter separates tokens and is dropped.
    pub fn letters(&self) -> Letters<'a> {
        Letters {
            inner: LETTERS.find_iter(self.text),
        }
    }
}

#[inline]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokenizer::new(text).tokens()
}

#[inline]
pub fn words(text: &str) -> impl FusedIterator<Item = &str> + '_ {
    Tokenizer::new(text).words()
}

#[inline]
pub fn letters(text: &str) -> Letters<'_> {
    Tokenizer::new(text).letters()
}

/// Canonical scorer input: trimmed, lowercased, without punctuation or
/// numerals, whitespace runs collapsed to a single space.
pub fn clean_up_input_text(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let without_punctuation = PUNCTUATION.replace_all(&lowered, "");
    let without_numbers = NUMBERS.replace_all(&without_punctuation, "");
    let collapsed = MULTIPLE_WHITESPACE.replace_all(&without_numbers, " ");
    collapsed.trim().to_owned()
}
