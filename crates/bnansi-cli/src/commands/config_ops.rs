use std::fs;

use bnansi_core::tables::{self, TableKind};
use bnansi_core::{settings, MappingTables};

use super::die;

pub fn tables_export() {
    print!("{}", tables::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(MappingTables::from_toml(&content), "Error: {}");
    println!("OK: {}", table_summary(&tables));
}

/// `section=count` for every table, in scan order.
pub fn table_summary(tables: &MappingTables) -> String {
    TableKind::ALL
        .iter()
        .map(|&kind| format!("{}={}", kind.section(), tables.len(kind)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!("OK: normalize.enabled={}", s.normalize.enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_default_tables() {
        let summary = table_summary(MappingTables::global());
        assert!(summary.starts_with("clusters=133, pre_base=6, reph=1, post_base=15"));
        assert!(summary.ends_with("normalize=11"));
    }
}
