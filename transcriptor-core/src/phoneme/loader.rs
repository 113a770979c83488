//! Embedded rule tables

use super::PhonemeTable;
use crate::error::RuleTableError;

/// TOML source of the built-in Ukrainian table
pub const UKRAINIAN_RULES: &str = include_str!("../../configs/ukrainian.toml");

impl PhonemeTable {
    /// Build the built-in Ukrainian table
    ///
    /// Each call parses the embedded TOML; build it once and share it
    /// through an `Arc`.
    pub fn ukrainian() -> Result<Self, RuleTableError> {
        Self::from_toml_str(UKRAINIAN_RULES)
    }
}
