//! Diagnostic characters: accented letters (and a few Cyrillic ones) whose
//! presence narrows a text down to a small set of candidate languages.
//!
//! Characters are grouped; every member of a group (usually the upper and
//! lower case forms, sometimes several vowels) is an equivalent hint and
//! maps to the same language set. A character missing from the table
//! carries no information. It does not rule any language out.

use phf::{Map, phf_map};

use crate::lang::Language;

/// One row of the hint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiacriticHint {
    /// Equivalent characters, as a literal string.
    pub chars: &'static str,
    /// Candidate languages in registry order. Never empty.
    pub languages: &'static [Language],
}

impl DiacriticHint {
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }
}

macro_rules! define_hints {
    ($(
        $group_name:ident: $group:literal [ $($c:literal),+ $(,)? ] => [ $($lang:ident),+ $(,)? ]
    ),* $(,)?) => {
        $(
            const $group_name: &[Language] = &[$(Language::$lang),+];
        )*

        static HINTS: &[DiacriticHint] = &[
            $( DiacriticHint { chars: $group, languages: $group_name } ),*
        ];

        static HINTS_BY_CHAR: Map<char, &'static [Language]> = phf_map! {
            $( $( $c => $group_name, )+ )*
        };
    };
}

define_hints! {
    CIRCUMFLEX_I: "Îî" ['Î', 'î'] => [French],
    TILDE_N: "Ññ" ['Ñ', 'ñ'] => [Spanish],
    CIRCUMFLEX_U: "Ûû" ['Û', 'û'] => [French],
    GRAVE_I: "Ìì" ['Ì', 'ì'] => [Italian],
    DIAERESIS_E: "Ëë" ['Ë', 'ë'] => [French],
    GRAVE_E_U: "ÈèÙù" ['È', 'è', 'Ù', 'ù'] => [French, Italian],
    CIRCUMFLEX_E: "Êê" ['Ê', 'ê'] => [French, Portuguese],
    TILDE_O: "Õõ" ['Õ', 'õ'] => [Portuguese],
    CIRCUMFLEX_O: "Ôô" ['Ô', 'ô'] => [French, Portuguese],
    CYRILLIC_YO_YERU_E: "ЁёЫыЭэ" ['Ё', 'ё', 'Ы', 'ы', 'Э', 'э'] => [Russian],
    CYRILLIC_SHCHA_HARD_SIGN: "ЩщЪъ" ['Щ', 'щ', 'Ъ', 'ъ'] => [Russian],
    GRAVE_O: "Òò" ['Ò', 'ò'] => [Italian],
    DIAERESIS_A: "Ää" ['Ä', 'ä'] => [German],
    GRAVE_A: "Àà" ['À', 'à'] => [French, Italian, Portuguese],
    CIRCUMFLEX_A: "Ââ" ['Â', 'â'] => [French, Portuguese],
    DIAERESIS_U: "Üü" ['Ü', 'ü'] => [German, Spanish],
    CEDILLA_C: "Çç" ['Ç', 'ç'] => [French, Portuguese],
    DIAERESIS_O: "Öö" ['Ö', 'ö'] => [German],
    ACUTE_O: "Óó" ['Ó', 'ó'] => [Portuguese, Spanish],
    ACUTE_A_I_U: "ÁáÍíÚú" ['Á', 'á', 'Í', 'í', 'Ú', 'ú'] => [Portuguese, Spanish],
    ACUTE_E: "Éé" ['É', 'é'] => [French, Italian, Portuguese, Spanish],
}

/// The whole table in its canonical order.
#[inline(always)]
pub fn hints() -> &'static [DiacriticHint] {
    HINTS
}

#[inline]
pub fn languages_for_char(c: char) -> Option<&'static [Language]> {
    HINTS_BY_CHAR.get(&c).copied()
}

/// Looks up a single character or an exact character group (`"ÈèÙù"`).
/// Partial groups are not keys: `"Èè"` yields `None`.
pub fn languages_for(key: &str) -> Option<&'static [Language]> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => languages_for_char(c),
        _ => HINTS.iter().find(|h| h.chars == key).map(|h| h.languages),
    }
}

/// Every diagnostic character of `text` with its candidate languages, in
/// text order. Repeated characters are reported each time they occur.
pub fn diagnostic_chars(text: &str) -> impl Iterator<Item = (char, &'static [Language])> + '_ {
    text.chars()
        .filter_map(|c| languages_for_char(c).map(|langs| (c, langs)))
}
