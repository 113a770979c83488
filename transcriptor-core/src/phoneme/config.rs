//! Configuration structures and validation
//!
//! This module defines the TOML schema for phoneme rule tables.

use serde::{Deserialize, Serialize};

use crate::error::RuleTableError;
use crate::phoneme::{PhonemeCode, RuleKind, MAX_PATTERN_LEN};

/// Root rule table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTableConfig {
    pub metadata: Metadata,
    pub groups: Vec<RuleGroup>,
}

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Rules of one kind, in priority order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleGroup {
    pub kind: RuleKind,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub pattern: String,
    pub ipa: String,
}

impl RuleTableConfig {
    /// Rules flattened in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (RuleKind, &RuleEntry)> {
        self.groups
            .iter()
            .flat_map(|group| group.rules.iter().map(move |rule| (group.kind, rule)))
    }

    /// Validate configuration
    ///
    /// Besides shape checks, rules must stay in longest-first order: no
    /// pattern may be a proper prefix of a longer pattern declared after it.
    pub(crate) fn validate(&self) -> Result<(), RuleTableError> {
        if self.metadata.code.trim().is_empty() {
            return Err(RuleTableError::Metadata(
                "language code must not be empty".to_string(),
            ));
        }

        let entries: Vec<&RuleEntry> = self.entries().map(|(_, rule)| rule).collect();
        if entries.len() > PhonemeCode::MAX {
            return Err(RuleTableError::TooManyRules {
                count: entries.len(),
                max: PhonemeCode::MAX,
            });
        }

        for (index, rule) in entries.iter().enumerate() {
            let len = rule.pattern.chars().count();
            if len == 0 {
                return Err(RuleTableError::EmptyPattern { index });
            }
            if len > MAX_PATTERN_LEN {
                return Err(RuleTableError::PatternTooLong {
                    pattern: rule.pattern.clone(),
                    len,
                    max: MAX_PATTERN_LEN,
                });
            }
            if rule.ipa.is_empty() {
                return Err(RuleTableError::EmptyIpa {
                    pattern: rule.pattern.clone(),
                });
            }
        }

        for (i, earlier) in entries.iter().enumerate() {
            for later in &entries[i + 1..] {
                if earlier.pattern == later.pattern {
                    return Err(RuleTableError::DuplicatePattern(earlier.pattern.clone()));
                }
                if later.pattern.starts_with(earlier.pattern.as_str()) {
                    return Err(RuleTableError::ShadowedPattern {
                        shorter: earlier.pattern.clone(),
                        longer: later.pattern.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
