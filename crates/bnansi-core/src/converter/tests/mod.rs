
use super::Converter;
use crate::tables::MappingTables;

pub(super) fn conv(input: &str) -> String {
    Converter::new(MappingTables::global()).convert(input)
}
