//! Runtime phoneme rule table
//!
//! Bridges the TOML configuration and the tokenizer: rules keep their
//! declaration order (which assigns their codes) and are indexed by a
//! pattern trie for longest-match lookup.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::RuleTableConfig;
use super::trie::PatternTrie;
use super::{PhonemeCode, MAX_PATTERN_LEN};
use crate::error::RuleTableError;

/// Category of a phoneme rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Doubled soft consonant collapsing to one long phoneme (`ннь`)
    SoftGeminate,
    /// Two letters forming one affricate (`дж`)
    Affricate,
    /// Consonant followed by the soft sign (`нь`)
    Palatalized,
    /// Plain consonant
    Consonant,
    /// Plain vowel
    Vowel,
}

impl RuleKind {
    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::SoftGeminate => "soft_geminate",
            RuleKind::Affricate => "affricate",
            RuleKind::Palatalized => "palatalized",
            RuleKind::Consonant => "consonant",
            RuleKind::Vowel => "vowel",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Letter sequence paired with the IPA symbol it reads as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeRule {
    kind: RuleKind,
    pattern: String,
    ipa: String,
    code: PhonemeCode,
}

impl PhonemeRule {
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn ipa(&self) -> &str {
        &self.ipa
    }

    pub fn code(&self) -> PhonemeCode {
        self.code
    }
}

/// Read-only table of phoneme rules
///
/// Built once and shared; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct PhonemeTable {
    code: String,
    name: String,
    rules: Vec<PhonemeRule>,
    trie: PatternTrie,
}

impl PhonemeTable {
    /// Create from configuration
    pub fn from_config(config: &RuleTableConfig) -> Result<Self, RuleTableError> {
        config.validate()?;

        let mut rules = Vec::new();
        let mut trie = PatternTrie::new();

        for (index, (kind, entry)) in config.entries().enumerate() {
            // validate() caps the rule count at the code alphabet size
            let code = PhonemeCode::new(index).ok_or(RuleTableError::TooManyRules {
                count: index + 1,
                max: PhonemeCode::MAX,
            })?;
            if trie.insert(&entry.pattern, code).is_some() {
                return Err(RuleTableError::DuplicatePattern(entry.pattern.clone()));
            }
            rules.push(PhonemeRule {
                kind,
                pattern: entry.pattern.clone(),
                ipa: entry.ipa.clone(),
                code,
            });
        }

        log::debug!(
            "built phoneme table '{}' with {} rules ({} trie nodes)",
            config.metadata.code,
            rules.len(),
            trie.node_count()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            rules,
            trie,
        })
    }

    /// Parse and build from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, RuleTableError> {
        let config: RuleTableConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RuleTableError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Language code from the table metadata
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Language name from the table metadata
    pub fn language_name(&self) -> &str {
        &self.name
    }

    /// Rules in priority order
    pub fn rules(&self) -> &[PhonemeRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule assigned to `code`
    #[inline]
    pub fn rule(&self, code: PhonemeCode) -> Option<&PhonemeRule> {
        self.rules.get(code.index())
    }

    /// Rule whose pattern is exactly `pattern`
    pub fn find(&self, pattern: &str) -> Option<&PhonemeRule> {
        let chars: Vec<char> = pattern.chars().collect();
        self.trie
            .longest_match(&chars)
            .filter(|&(_, len)| len == chars.len())
            .and_then(|(code, _)| self.rule(code))
    }

    /// Every rule matching at the start of `input`, shortest first
    #[inline]
    pub fn prefix_matches(
        &self,
        input: &[char],
    ) -> SmallVec<[(PhonemeCode, usize); MAX_PATTERN_LEN]> {
        self.trie.prefix_matches(input)
    }
}
