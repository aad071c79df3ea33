mod prop_tests {
    use crate::{Alphabet, Language, Tokenizer, clean_up_input_text, diacritics, tokenizer};
    use proptest::prelude::*;

    fn any_language() -> impl Strategy<Value = Language> {
        prop::sample::select(Language::all())
    }

    fn any_alphabet() -> impl Strategy<Value = Alphabet> {
        prop::sample::select(Alphabet::all())
    }

    fn is_segmented(c: char) -> bool {
        [Alphabet::Han, Alphabet::Hangul, Alphabet::Hiragana, Alphabet::Katakana]
            .iter()
            .any(|a| a.matches_char(c))
    }

    proptest! {
        #[test]
        fn iso_round_trip(lang in any_language()) {
            prop_assert_eq!(Language::from_iso_code_639_1(lang.iso_code_639_1()), lang);
            prop_assert_eq!(Language::from_iso_code_639_3(lang.iso_code_639_3()), lang);
            prop_assert_eq!(lang.iso_code_639_1().as_str().parse::<Language>(), Ok(lang));
        }

        #[test]
        fn whole_string_match_implies_every_char_matches(alphabet in any_alphabet(), s in ".{0,64}") {
            let whole = alphabet.matches(&s);
            let per_char = !s.is_empty() && s.chars().all(|c| alphabet.matches_char(c));
            prop_assert_eq!(whole, per_char);
        }

        #[test]
        fn foreign_char_breaks_match(s in "[a-zA-Z]{1,32}", pos in 0usize..32) {
            prop_assert!(Alphabet::Latin.matches(&s));
            let mut mixed: Vec<char> = s.chars().collect();
            let at = pos.min(mixed.len());
            mixed.insert(at, 'Ж');
            let mixed: String = mixed.into_iter().collect();
            prop_assert!(!Alphabet::Latin.matches(&mixed));
        }

        #[test]
        fn tokens_are_ordered_slices_of_input(s in ".{0,200}") {
            let mut last_end = 0;
            for token in tokenizer::tokens(&s) {
                prop_assert!(token.start() >= last_end);
                prop_assert_eq!(&s[token.start()..token.start() + token.span().len()], token.span());
                prop_assert!(token.span().contains(token.word()));
                prop_assert!(!token.word().is_empty());
                last_end = token.start() + token.span().len();
            }
        }

        #[test]
        fn tokenizer_restarts_identically(s in ".{0,200}") {
            let tokenizer = Tokenizer::new(&s);
            let first: Vec<_> = tokenizer.tokens().collect();
            let second: Vec<_> = tokenizer.tokens().collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn letters_contain_only_letters(s in ".{0,200}") {
            // single CJK tokens may be script symbols (radicals, circled kana)
            for letter in tokenizer::letters(&s) {
                prop_assert!(letter.chars().all(|c| c.is_alphabetic() || is_segmented(c)));
            }
        }

        #[test]
        fn segmented_scripts_are_single_characters(s in "[東京語かなカナ한국abc ]{0,64}") {
            for word in tokenizer::words(&s) {
                if word.chars().any(is_segmented) {
                    prop_assert_eq!(word.chars().count(), 1);
                }
            }
        }

        #[test]
        fn clean_up_is_idempotent(s in ".{0,200}") {
            let once = clean_up_input_text(&s);
            let twice = clean_up_input_text(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn hints_agree_with_table(c in any::<char>()) {
            let by_char = diacritics::languages_for_char(c);
            let by_scan = diacritics::hints().iter().find(|h| h.contains(c)).map(|h| h.languages);
            prop_assert_eq!(by_char, by_scan);
        }
    }
}
