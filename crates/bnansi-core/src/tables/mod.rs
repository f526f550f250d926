//! Mapping Table Store.
//!
//! Seven classified string-to-string tables loaded once from an embedded TOML
//! asset (or a custom one installed before first use) and shared read-only by
//! every conversion.

mod config;
mod store;

use std::fmt;

use serde::Serialize;

pub use config::{parse_tables_toml, PlacementConfig, TablesConfig, TablesError};
pub use store::MappingTables;

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

/// Identifies one of the classified mapping tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Precomposed conjuncts, independent letters, digits, punctuation.
    Cluster,
    /// Stems whose glyph attaches before the next base consonant.
    PreBase,
    /// The preceding-r mark.
    Reph,
    /// Stems attached after the preceding consonant or forming a ligature.
    PostBase,
    /// Single-glyph vowel signs.
    VowelSign,
    /// Vowel signs drawn on both sides of the base consonant.
    TwoPartVowelSign,
    /// Pre-scan substitutions.
    Normalize,
}

impl TableKind {
    pub const ALL: [TableKind; 7] = [
        TableKind::Cluster,
        TableKind::PreBase,
        TableKind::Reph,
        TableKind::PostBase,
        TableKind::VowelSign,
        TableKind::TwoPartVowelSign,
        TableKind::Normalize,
    ];

    /// Name of the TOML section holding this table.
    pub fn section(self) -> &'static str {
        match self {
            TableKind::Cluster => "clusters",
            TableKind::PreBase => "pre_base",
            TableKind::Reph => "reph",
            TableKind::PostBase => "post_base",
            TableKind::VowelSign => "vowel_signs",
            TableKind::TwoPartVowelSign => "two_part_vowel_signs",
            TableKind::Normalize => "normalize",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}
