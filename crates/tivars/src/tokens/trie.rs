//! Prefix tree from token names to token indices.

use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
struct Node {
    token: Option<usize>,
    children: FxHashMap<char, Node>,
}

/// Maps names to indices into a [`TokenTable`](super::TokenTable).
#[derive(Debug, Default, Clone)]
pub struct TokenTrie {
    root: Node,
}

impl TokenTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name. An existing entry under the same name is replaced only
    /// when `overwrite` is set; returns whether the name now maps to `index`.
    pub fn insert(&mut self, name: &str, index: usize, overwrite: bool) -> bool {
        if name.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for ch in name.chars() {
            node = node.children.entry(ch).or_default();
        }

        match node.token {
            Some(_) if !overwrite => false,
            _ => {
                node.token = Some(index);
                true
            }
        }
    }

    /// Returns the token stored under exactly this name.
    pub fn get(&self, name: &str) -> Option<usize> {
        let mut node = &self.root;
        for ch in name.chars() {
            node = node.children.get(&ch)?;
        }
        node.token
    }

    /// Returns every token whose name is a prefix of `text`, as
    /// `(index, chars consumed)`, longest first.
    pub fn matches(&self, text: &str) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        let mut node = &self.root;
        for (consumed, ch) in text.chars().enumerate() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(index) = node.token {
                found.push((index, consumed + 1));
            }
        }
        found.reverse();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_first() {
        let mut trie = TokenTrie::new();
        trie.insert("Dot", 0, true);
        trie.insert("Dot-Thin", 1, true);
        trie.insert("D", 2, true);

        assert_eq!(trie.matches("Dot-Thin"), vec![(1, 8), (0, 3), (2, 1)]);
        assert_eq!(trie.matches("Dot-T"), vec![(0, 3), (2, 1)]);
        assert!(trie.matches("x").is_empty());
    }

    #[test]
    fn test_overwrite() {
        let mut trie = TokenTrie::new();
        assert!(trie.insert("pi", 0, true));
        assert!(!trie.insert("pi", 1, false));
        assert_eq!(trie.get("pi"), Some(0));
        assert!(trie.insert("pi", 1, true));
        assert_eq!(trie.get("pi"), Some(1));
        assert_eq!(trie.get("p"), None);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut trie = TokenTrie::new();
        trie.insert("θmin", 4, true);
        assert_eq!(trie.matches("θmin"), vec![(4, 4)]);
    }
}
