//! Terminator character lookup
//!
//! ASCII terminators use a direct table, everything else a hash set.

use std::collections::HashSet;

/// Terminator lookup table
#[derive(Debug, Clone)]
pub struct TermTable {
    /// Terminators in configuration order, duplicates removed
    chars: Vec<char>,
    ascii_table: [bool; 128],
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create from list of terminator characters
    pub fn new(terminators: &[char]) -> Self {
        let mut chars = Vec::with_capacity(terminators.len());
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for &ch in terminators {
            let fresh = if ch.is_ascii() {
                !std::mem::replace(&mut ascii_table[ch as usize], true)
            } else {
                non_ascii.insert(ch)
            };
            if fresh {
                chars.push(ch);
            }
        }

        Self {
            chars,
            ascii_table,
            non_ascii,
        }
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_lookup() {
        let table = TermTable::new(&['.', '!', '?', '。', '！', '？']);

        assert!(table.is_terminator('.'));
        assert!(table.is_terminator('!'));
        assert!(table.is_terminator('?'));
        assert!(!table.is_terminator(','));

        // Non-ASCII
        assert!(table.is_terminator('。'));
        assert!(table.is_terminator('！'));
        assert!(table.is_terminator('？'));
        assert!(!table.is_terminator('、'));
    }

    #[test]
    fn test_duplicates_removed_in_order() {
        let table = TermTable::new(&['?', '.', '?', '。', '。']);
        assert_eq!(table.chars(), &['?', '.', '。']);
    }
}
