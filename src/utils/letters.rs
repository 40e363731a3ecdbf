use once_cell::sync::Lazy;

use crate::models::Alphabet;

/// Uppercase Latin letters used for word-search noise fill.
pub static LATIN_LETTERS: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());

/// Uppercase Russian Cyrillic letters. А..Я is contiguous in Unicode; Ё is
/// not and gets appended separately.
pub static CYRILLIC_LETTERS: Lazy<Vec<char>> = Lazy::new(|| {
    let mut letters: Vec<char> = ('А'..='Я').collect();
    letters.push('Ё');
    letters
});

/// Letter set backing the given alphabet.
pub fn alphabet_letters(alphabet: Alphabet) -> &'static [char] {
    match alphabet {
        Alphabet::Latin => &LATIN_LETTERS,
        Alphabet::Cyrillic => &CYRILLIC_LETTERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_letter_set() {
        let letters = alphabet_letters(Alphabet::Latin);
        assert_eq!(letters.len(), 26);
        assert!(letters.contains(&'A'));
        assert!(letters.contains(&'Z'));
    }

    #[test]
    fn test_cyrillic_letter_set() {
        let letters = alphabet_letters(Alphabet::Cyrillic);
        assert_eq!(letters.len(), 33);
        assert!(letters.contains(&'А'));
        assert!(letters.contains(&'Я'));
        assert!(letters.contains(&'Ё'));
    }
}
