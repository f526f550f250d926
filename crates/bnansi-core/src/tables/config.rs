use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::Deserialize;

use super::TableKind;
use crate::legacy;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TablesConfig {
    pub placement: PlacementConfig,
    pub clusters: BTreeMap<String, String>,
    #[serde(default)]
    pub pre_base: BTreeMap<String, String>,
    pub reph: BTreeMap<String, String>,
    pub post_base: BTreeMap<String, String>,
    pub vowel_signs: BTreeMap<String, String>,
    pub two_part_vowel_signs: BTreeMap<String, String>,
    #[serde(default)]
    pub normalize: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacementConfig {
    /// Vowel-sign glyphs drawn after the base consonant.
    pub trailing_vowel_signs: Vec<String>,
}

impl TablesConfig {
    pub fn table(&self, kind: TableKind) -> &BTreeMap<String, String> {
        match kind {
            TableKind::Cluster => &self.clusters,
            TableKind::PreBase => &self.pre_base,
            TableKind::Reph => &self.reph,
            TableKind::PostBase => &self.post_base,
            TableKind::VowelSign => &self.vowel_signs,
            TableKind::TwoPartVowelSign => &self.two_part_vowel_signs,
            TableKind::Normalize => &self.normalize,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(TableKind),
    #[error("empty key in [{0}]")]
    EmptyPattern(TableKind),
    #[error("empty value for key {key:?} in [{table}]")]
    EmptyValue { table: TableKind, key: String },
    #[error("value for key {key:?} in [{table}] must be {expected} glyph(s), got {actual}")]
    ValueLength {
        table: TableKind,
        key: String,
        expected: &'static str,
        actual: usize,
    },
    #[error("value {value:?} for key {key:?} in [{table}] has no legacy code page byte")]
    Unrepresentable {
        table: TableKind,
        key: String,
        value: String,
    },
    #[error("trailing vowel sign {0:?} is not a [vowel_signs] value")]
    UnknownTrailingGlyph(String),
    #[error("mapping tables already initialized")]
    AlreadyInitialized,
}

/// Shape constraints for one table's entries.
struct Rule {
    kind: TableKind,
    required: bool,
    glyphs: RangeInclusive<usize>,
    expected: &'static str,
    legacy_only: bool,
}

const RULES: [Rule; 7] = [
    Rule {
        kind: TableKind::Cluster,
        required: true,
        glyphs: 1..=2,
        expected: "1 or 2",
        legacy_only: true,
    },
    Rule {
        kind: TableKind::PreBase,
        required: false,
        glyphs: 1..=2,
        expected: "1 or 2",
        legacy_only: true,
    },
    Rule {
        kind: TableKind::Reph,
        required: true,
        glyphs: 1..=1,
        expected: "1",
        legacy_only: true,
    },
    Rule {
        kind: TableKind::PostBase,
        required: true,
        glyphs: 1..=2,
        expected: "1 or 2",
        legacy_only: true,
    },
    Rule {
        kind: TableKind::VowelSign,
        required: true,
        glyphs: 1..=1,
        expected: "1",
        legacy_only: true,
    },
    Rule {
        kind: TableKind::TwoPartVowelSign,
        required: true,
        glyphs: 2..=2,
        expected: "2",
        legacy_only: true,
    },
    Rule {
        kind: TableKind::Normalize,
        required: false,
        glyphs: 1..=usize::MAX,
        expected: "at least 1",
        legacy_only: false,
    },
];

/// Parse and validate tables TOML.
pub fn parse_tables_toml(toml_str: &str) -> Result<TablesConfig, TablesError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TablesError::Parse(e.to_string()))?;

    for rule in &RULES {
        validate_table(rule, config.table(rule.kind))?;
    }

    for glyph in &config.placement.trailing_vowel_signs {
        if !config.vowel_signs.values().any(|v| v == glyph) {
            return Err(TablesError::UnknownTrailingGlyph(glyph.clone()));
        }
    }

    Ok(config)
}

fn validate_table(rule: &Rule, table: &BTreeMap<String, String>) -> Result<(), TablesError> {
    if rule.required && table.is_empty() {
        return Err(TablesError::Empty(rule.kind));
    }

    for (key, value) in table {
        if key.is_empty() {
            return Err(TablesError::EmptyPattern(rule.kind));
        }
        if value.is_empty() {
            return Err(TablesError::EmptyValue {
                table: rule.kind,
                key: key.clone(),
            });
        }
        let glyphs = value.chars().count();
        if !rule.glyphs.contains(&glyphs) {
            return Err(TablesError::ValueLength {
                table: rule.kind,
                key: key.clone(),
                expected: rule.expected,
                actual: glyphs,
            });
        }
        if rule.legacy_only && !legacy::is_representable(value) {
            return Err(TablesError::Unrepresentable {
                table: rule.kind,
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[placement]
trailing_vowel_signs = ["v"]

[clusters]
"ক" = "K"

[reph]
"র্" = "©"

[post_base]
"্র" = "Ö"

[vowel_signs]
"া" = "v"
"ি" = "w"

[two_part_vowel_signs]
"ো" = "‡v"
"#;

    #[test]
    fn parse_minimal_toml() {
        let config = parse_tables_toml(MINIMAL).unwrap();
        assert_eq!(config.clusters["ক"], "K");
        assert!(config.pre_base.is_empty());
        assert!(config.normalize.is_empty());
        assert_eq!(config.placement.trailing_vowel_signs, vec!["v"]);
    }

    #[test]
    fn parse_default_toml() {
        let config = parse_tables_toml(super::super::DEFAULT_TABLES_TOML).unwrap();
        assert!(
            config.clusters.len() > 120,
            "expected 120+ cluster mappings, got {}",
            config.clusters.len()
        );
        assert_eq!(config.reph.len(), 1);
        assert_eq!(config.two_part_vowel_signs.len(), 2);
        assert!(!config.normalize.is_empty());
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_tables_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TablesError::Parse(_)));
    }

    #[test]
    fn error_unknown_section() {
        let toml = format!("{MINIMAL}\n[extras]\n\"a\" = \"b\"\n");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::Parse(_)));
    }

    #[test]
    fn error_empty_required_table() {
        let toml = MINIMAL.replace("\"র্\" = \"©\"", "");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::Empty(TableKind::Reph)));
    }

    #[test]
    fn error_empty_value() {
        let toml = MINIMAL.replace("\"ক\" = \"K\"", "\"ক\" = \"\"");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            TablesError::EmptyValue {
                table: TableKind::Cluster,
                ..
            }
        ));
    }

    #[test]
    fn error_empty_key() {
        let toml = MINIMAL.replace("\"ক\" = \"K\"", "\"\" = \"K\"");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::EmptyPattern(TableKind::Cluster)));
    }

    #[test]
    fn error_two_part_needs_two_glyphs() {
        let toml = MINIMAL.replace("\"ো\" = \"‡v\"", "\"ো\" = \"‡\"");
        let err = parse_tables_toml(&toml).unwrap_err();
        match err {
            TablesError::ValueLength {
                table, actual, ..
            } => {
                assert_eq!(table, TableKind::TwoPartVowelSign);
                assert_eq!(actual, 1);
            }
            other => panic!("expected ValueLength, got {other:?}"),
        }
    }

    #[test]
    fn error_cluster_value_too_long() {
        let toml = MINIMAL.replace("\"ক\" = \"K\"", "\"ক\" = \"KKK\"");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::ValueLength { .. }));
    }

    #[test]
    fn error_value_outside_code_page() {
        let toml = MINIMAL.replace("\"ক\" = \"K\"", "\"ক\" = \"ক\"");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::Unrepresentable { .. }));
    }

    #[test]
    fn normalize_values_may_leave_code_page() {
        let toml = format!("{MINIMAL}\n[normalize]\n\"x\" = \"ক্ষ\"\n");
        assert!(parse_tables_toml(&toml).is_ok());
    }

    #[test]
    fn error_unknown_trailing_glyph() {
        let toml = MINIMAL.replace("trailing_vowel_signs = [\"v\"]", "trailing_vowel_signs = [\"q\"]");
        let err = parse_tables_toml(&toml).unwrap_err();
        assert!(matches!(err, TablesError::UnknownTrailingGlyph(ref g) if g == "q"));
    }
}
