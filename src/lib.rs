pub mod alphabet;
pub mod diacritics;
pub mod lang;
pub mod tokenizer;

pub use alphabet::Alphabet;
pub use diacritics::DiacriticHint;
pub use lang::{IsoCode639_1, IsoCode639_3, Language, ParseError};
pub use tokenizer::{Token, Tokenizer, clean_up_input_text};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
