use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use super::config::{parse_tables_toml, TablesConfig, TablesError};
use super::{TableKind, DEFAULT_TABLES_TOML};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Read-only lookup tables for one conversion profile.
#[derive(Debug)]
pub struct MappingTables {
    clusters: HashMap<String, String>,
    pre_base: HashMap<String, String>,
    reph: HashMap<String, String>,
    post_base: HashMap<String, String>,
    vowel_signs: HashMap<String, String>,
    two_part_vowel_signs: HashMap<String, String>,
    normalize: HashMap<String, String>,
    trailing_vowel_signs: HashSet<String>,
    max_normalize_width: usize,
}

impl MappingTables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TablesError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TablesError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MappingTables {
        static INSTANCE: OnceLock<MappingTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TABLES_TOML);
            MappingTables::from_toml(toml_str).expect("tables TOML must be valid")
        })
    }

    /// Build a standalone table set, independent of the global one.
    pub fn from_toml(toml_str: &str) -> Result<Self, TablesError> {
        parse_tables_toml(toml_str).map(Self::from_config)
    }

    pub fn from_config(config: TablesConfig) -> Self {
        fn index(map: BTreeMap<String, String>) -> HashMap<String, String> {
            map.into_iter().collect()
        }

        let max_normalize_width = config
            .normalize
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            clusters: index(config.clusters),
            pre_base: index(config.pre_base),
            reph: index(config.reph),
            post_base: index(config.post_base),
            vowel_signs: index(config.vowel_signs),
            two_part_vowel_signs: index(config.two_part_vowel_signs),
            normalize: index(config.normalize),
            trailing_vowel_signs: config.placement.trailing_vowel_signs.into_iter().collect(),
            max_normalize_width,
        }
    }

    fn table(&self, kind: TableKind) -> &HashMap<String, String> {
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

    /// Substitute for `pattern` in the given table, if present.
    pub fn lookup(&self, kind: TableKind, pattern: &str) -> Option<&str> {
        self.table(kind).get(pattern).map(String::as_str)
    }

    pub fn len(&self, kind: TableKind) -> usize {
        self.table(kind).len()
    }

    /// Whether a vowel-sign glyph is drawn after its base consonant.
    pub fn is_trailing_vowel_sign(&self, glyph: &str) -> bool {
        self.trailing_vowel_signs.contains(glyph)
    }

    /// Longest normalization pattern, in scalars.
    pub fn max_normalize_width(&self) -> usize {
        self.max_normalize_width
    }
}
