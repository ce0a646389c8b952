use std::collections::HashMap;

/// Trie node over reversed exception strings
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes indexed by character
    children: HashMap<char, TrieNode>,
    /// Whether this node closes an exception
    is_end: bool,
}

/// Sentence exceptions (abbreviations such as "Dr.") stored reversed, so the
/// splitter can walk backwards from a split character and find the longest
/// exception ending there.
///
/// Matching is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct ExceptionTrie {
    root: TrieNode,
    entries: Vec<String>,
}

/// An exception found ending at a split character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionMatch {
    /// The matched exception text
    pub exception: String,
    /// Length of the match in chars
    pub length: usize,
}

impl ExceptionTrie {
    /// Build from a list of literal exceptions; blank entries are skipped
    pub fn new<I, S>(exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for exception in exceptions {
            trie.insert(exception.as_ref());
        }
        trie
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Exceptions in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Insert a single exception
    pub fn insert(&mut self, exception: &str) {
        let exception = exception.trim();
        if exception.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for ch in exception.chars().rev() {
            current = current.children.entry(ch).or_default();
        }
        if !current.is_end {
            current.is_end = true;
            self.entries.push(exception.to_string());
        }
    }

    /// Find the longest exception that ends right before `end` in `chars`.
    ///
    /// An exception only counts when it starts at the beginning of `chars` or
    /// right after a character that is not alphanumeric, so "Dr." matches in
    /// "(Dr." but not in "Sidr.".
    pub fn longest_ending_at(&self, chars: &[char], end: usize) -> Option<ExceptionMatch> {
        if self.is_empty() || end == 0 || end > chars.len() {
            return None;
        }

        let mut current = &self.root;
        let mut best = None;

        for (consumed, &ch) in chars[..end].iter().rev().enumerate() {
            current = match current.children.get(&ch) {
                Some(node) => node,
                None => break,
            };

            let length = consumed + 1;
            if current.is_end {
                let start = end - length;
                let at_word_start = start == 0 || !chars[start - 1].is_alphanumeric();
                if at_word_start {
                    best = Some(length);
                }
            }
        }

        best.map(|length| ExceptionMatch {
            exception: chars[end - length..end].iter().collect(),
            length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_insertion_and_lookup() {
        let trie = ExceptionTrie::new(["Dr.", "Mr."]);
        let text = chars("Dr. Smith");

        let m = trie.longest_ending_at(&text, 3).unwrap();
        assert_eq!(m.exception, "Dr.");
        assert_eq!(m.length, 3);
    }

    #[test]
    fn test_case_sensitive() {
        let trie = ExceptionTrie::new(["Dr."]);
        assert!(trie.longest_ending_at(&chars("dr."), 3).is_none());
        assert!(trie.longest_ending_at(&chars("DR."), 3).is_none());
    }

    #[test]
    fn test_requires_word_start() {
        let trie = ExceptionTrie::new(["Dr."]);
        assert!(trie.longest_ending_at(&chars("Sidr."), 5).is_none());
        assert!(trie.longest_ending_at(&chars("Xdr."), 4).is_none());
        assert!(trie.longest_ending_at(&chars("(Dr."), 4).is_some());
        assert!(trie.longest_ending_at(&chars("see Dr."), 7).is_some());
    }

    #[test]
    fn test_longest_match() {
        let trie = ExceptionTrie::new(["A.", "U.S.A."]);
        let text = chars("the U.S.A.");
        let m = trie.longest_ending_at(&text, text.len()).unwrap();
        assert_eq!(m.exception, "U.S.A.");
        assert_eq!(m.length, 6);
    }

    #[test]
    fn test_multi_word_exception() {
        let trie = ExceptionTrie::new(["et al."]);
        let text = chars("Smith et al. showed");
        let m = trie.longest_ending_at(&text, 12).unwrap();
        assert_eq!(m.exception, "et al.");
    }

    #[test]
    fn test_empty_trie() {
        let trie = ExceptionTrie::new(Vec::<String>::new());
        assert!(trie.is_empty());
        assert_eq!(trie.longest_ending_at(&chars("This is a test."), 15), None);
    }

    #[test]
    fn test_duplicates_and_blanks_are_collapsed() {
        let trie = ExceptionTrie::new(["Dr.", " Dr. ", "", "Mr."]);
        assert_eq!(trie.entries(), &["Dr.".to_string(), "Mr.".to_string()]);
    }
}
