#[cfg(test)]
mod unit_tests {

    use crate::{Alphabet, IsoCode639_1, IsoCode639_3, Language, diacritics};
    use Language::*;

    #[test]
    fn all_languages_in_registry_order() {
        assert_eq!(
            Language::all(),
            &[
                Chinese, English, French, German, Italian, Japanese, Korean, Portuguese,
                Russian, Spanish,
            ]
        );
        assert!(!Language::all().contains(&Unknown));
    }

    #[test]
    fn all_spoken_languages() {
        assert_eq!(Language::all_spoken_languages(), Language::all());
    }

    #[test]
    fn all_languages_with_arabic_script() {
        assert!(Language::all_with_arabic_script().is_empty());
    }

    #[test]
    fn all_languages_with_cyrillic_script() {
        assert_eq!(Language::all_with_cyrillic_script(), vec![Russian]);
    }

    #[test]
    fn all_languages_with_devanagari_script() {
        assert!(Language::all_with_devanagari_script().is_empty());
    }

    #[test]
    fn all_languages_with_latin_script() {
        assert_eq!(
            Language::all_with_latin_script(),
            vec![English, French, German, Italian, Portuguese, Spanish]
        );
    }

    #[test]
    fn script_index_uses_primary_alphabet_only() {
        assert_eq!(Language::all_with_script(Alphabet::Han), vec![Chinese]);
        assert_eq!(Language::all_with_script(Alphabet::Hiragana), vec![Japanese]);
        assert!(Language::all_with_script(Alphabet::Katakana).is_empty());
        assert_eq!(Language::all_with_script(Alphabet::Hangul), vec![Korean]);
    }

    #[test]
    fn iso_code_639_1_round_trip() {
        for &lang in Language::all() {
            assert_eq!(Language::from_iso_code_639_1(lang.iso_code_639_1()), lang);
        }
    }

    #[test]
    fn iso_code_639_3_round_trip() {
        for &lang in Language::all() {
            assert_eq!(Language::from_iso_code_639_3(lang.iso_code_639_3()), lang);
        }
    }

    #[test]
    fn unknown_codes_give_unknown_language() {
        assert_eq!(Language::from_iso_code_639_1(IsoCode639_1::Unknown), Unknown);
        assert_eq!(Language::from_iso_code_639_3(IsoCode639_3::Unknown), Unknown);
    }

    #[test]
    fn iso_codes() {
        assert_eq!(Chinese.iso_code_639_1(), IsoCode639_1::ZH);
        assert_eq!(Chinese.iso_code_639_3(), IsoCode639_3::ZHO);
        assert_eq!(German.iso_code_639_1(), IsoCode639_1::DE);
        assert_eq!(German.iso_code_639_3(), IsoCode639_3::DEU);
        assert_eq!(Spanish.iso_code_639_1(), IsoCode639_1::ES);
        assert_eq!(Spanish.iso_code_639_3(), IsoCode639_3::SPA);
    }

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(Chinese.ordinal(), 0);
        assert_eq!(Spanish.ordinal(), 9);
        assert_eq!(Unknown.ordinal(), 10);
        assert!(English < French);
    }

    #[test]
    fn hint_table_has_no_dangling_languages() {
        for hint in diacritics::hints() {
            assert!(!hint.languages.is_empty());
            for (i, lang) in hint.languages.iter().enumerate() {
                assert!(Language::all().contains(lang));
                assert!(!hint.languages[i + 1..].contains(lang));
            }
        }
    }
}
