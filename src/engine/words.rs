use std::cmp::Reverse;

use crate::models::WordEntry;

/// Normalize and order the input list: trim and uppercase each word, drop
/// entries left empty, then sort longest first. Long words go first because
/// they offer the most letters for later words to intersect. The sort is
/// stable, so equal-length words keep their original relative order.
pub fn prepare(entries: &[WordEntry]) -> Vec<WordEntry> {
    let mut prepared: Vec<WordEntry> = entries
        .iter()
        .map(|entry| WordEntry {
            text: entry.text.trim().to_uppercase(),
            clue: entry.clue.clone(),
        })
        .filter(|entry| !entry.text.is_empty())
        .collect();

    prepared.sort_by_key(|entry| Reverse(entry.text.chars().count()));
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[WordEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_uppercases_and_sorts_longest_first() {
        let input = vec![
            WordEntry::new("cat"),
            WordEntry::new("banana"),
            WordEntry::new("apple"),
        ];

        let prepared = prepare(&input);
        assert_eq!(texts(&prepared), vec!["BANANA", "APPLE", "CAT"]);
    }

    #[test]
    fn test_equal_lengths_keep_input_order() {
        let input = vec![
            WordEntry::new("DOG"),
            WordEntry::new("CAT"),
            WordEntry::new("EEL"),
        ];

        let prepared = prepare(&input);
        assert_eq!(texts(&prepared), vec!["DOG", "CAT", "EEL"]);
    }

    #[test]
    fn test_drops_blank_entries_keeps_clues() {
        let input = vec![
            WordEntry::with_clue("  sun ", "a star"),
            WordEntry::new("   "),
            WordEntry::new(""),
        ];

        let prepared = prepare(&input);
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].text, "SUN");
        assert_eq!(prepared[0].clue.as_deref(), Some("a star"));
    }

    #[test]
    fn test_cyrillic_length_counts_chars_not_bytes() {
        let input = vec![WordEntry::new("кот"), WordEntry::new("STAR")];

        let prepared = prepare(&input);
        // "кот" is 6 bytes but 3 chars, so it sorts after the 4-char word
        assert_eq!(texts(&prepared), vec!["STAR", "КОТ"]);
    }
}
