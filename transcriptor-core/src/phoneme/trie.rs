//! Pattern trie for longest-match tokenization
//!
//! Nodes live in one contiguous array and refer to each other by index.
//! Lookup walks forward from a position and remembers the deepest node that
//! terminates a pattern, which gives maximal munch independent of the order
//! rules were inserted in.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::{PhonemeCode, MAX_PATTERN_LEN};

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Code of the rule whose pattern ends here
    code: Option<PhonemeCode>,
}

/// Trie over rule patterns
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
}

impl PatternTrie {
    /// Create empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a pattern, returning the code previously stored for it
    pub fn insert(&mut self, pattern: &str, code: PhonemeCode) -> Option<PhonemeCode> {
        let mut current_idx = 0u32;

        for ch in pattern.chars() {
            let node = &self.nodes[current_idx as usize];
            current_idx = match node.children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };
        }

        self.nodes[current_idx as usize].code.replace(code)
    }

    /// Longest pattern that is a prefix of `input`
    ///
    /// Returns the code and the number of characters consumed.
    pub fn longest_match(&self, input: &[char]) -> Option<(PhonemeCode, usize)> {
        let mut current_idx = 0u32;
        let mut best = None;

        for (depth, ch) in input.iter().enumerate() {
            match self.nodes[current_idx as usize].children.get(ch) {
                Some(&next_idx) => current_idx = next_idx,
                None => break,
            }
            if let Some(code) = self.nodes[current_idx as usize].code {
                best = Some((code, depth + 1));
            }
        }

        best
    }

    /// Every pattern that is a prefix of `input`, shortest first
    pub fn prefix_matches(
        &self,
        input: &[char],
    ) -> SmallVec<[(PhonemeCode, usize); MAX_PATTERN_LEN]> {
        let mut current_idx = 0u32;
        let mut found = SmallVec::new();

        for (depth, ch) in input.iter().enumerate() {
            match self.nodes[current_idx as usize].children.get(ch) {
                Some(&next_idx) => current_idx = next_idx,
                None => break,
            }
            if let Some(code) = self.nodes[current_idx as usize].code {
                found.push((code, depth + 1));
            }
        }

        found
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}
