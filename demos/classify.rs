// Prints what the pre-classification layer knows about each argument.
//
//   cargo run --example classify -- "Ça va très bien" "東京は素晴らしい"

use scriptid::{Alphabet, Language, Tokenizer, diacritics};

fn main() {
    let texts: Vec<String> = std::env::args().skip(1).collect();
    let texts = if texts.is_empty() {
        vec![
            "Ça va très bien, merci.".to_owned(),
            "Grüße aus der Weißstraße".to_owned(),
            "東京は素晴らしい".to_owned(),
            "Съешь же ещё этих булок".to_owned(),
        ]
    } else {
        texts
    };

    for text in &texts {
        println!("{text:?}");

        let words: Vec<_> = Tokenizer::new(text).words().collect();
        println!("  words      {words:?}");

        let scripts: Vec<_> = Alphabet::all()
            .iter()
            .filter(|a| words.iter().any(|w| a.matches(w)))
            .map(|a| a.name())
            .collect();
        println!("  scripts    {scripts:?}");

        for (c, langs) in diacritics::diagnostic_chars(text) {
            println!("  hint       {c} → {langs:?}");
        }

        if let Some(lang) = text.chars().find_map(Language::from_unique_character) {
            println!("  unique     {lang}");
        }
    }
}
