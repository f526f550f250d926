//! Unicode-to-legacy conversion via longest-match scanning and glyph reordering.
//!
//! The scanner tries a 3-scalar, then 2-scalar, then 1-scalar lookup at each
//! position against an explicit table priority list. The matched rule decides
//! whether the substitute is appended, swapped in front of the last glyph,
//! split around it, or (for the reph) appended and held pending until the
//! next base consonant.

mod emit;
mod engine;
pub mod explain;
mod scanner;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::normalize::normalize;
use crate::settings::settings;
use crate::tables::MappingTables;

pub use emit::{Action, OutputBuffer, RephState};
pub use engine::{Step, StepSink};
pub use explain::{ExplainResult, ExplainStep, UnmappedChar};
pub use scanner::{priorities, Rule, MAX_WIDTH, SINGLE_PRIORITY, WIDE_PRIORITY};

/// Convert with the global tables and settings.
///
/// Total: every input produces output, unmapped scalars pass through.
pub fn convert(input: &str) -> String {
    Converter::global().convert(input)
}

/// A configured conversion over one table set. Cheap to copy; holds no
/// per-call state.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    tables: &'t MappingTables,
    normalize: bool,
}

impl Converter<'static> {
    /// Global tables, normalization as configured in settings.
    pub fn global() -> Self {
        Converter::new(MappingTables::global()).with_normalize(settings().normalize.enabled)
    }
}

impl<'t> Converter<'t> {
    /// Normalization is off unless enabled with [`Converter::with_normalize`].
    pub fn new(tables: &'t MappingTables) -> Self {
        Self {
            tables,
            normalize: false,
        }
    }

    pub fn with_normalize(mut self, enabled: bool) -> Self {
        self.normalize = enabled;
        self
    }

    pub fn tables(&self) -> &'t MappingTables {
        self.tables
    }

    pub fn normalizes(&self) -> bool {
        self.normalize
    }

    pub fn convert(&self, input: &str) -> String {
        self.convert_with_sink(input, &mut ())
    }

    /// Convert, reporting every step to `sink`.
    pub fn convert_with_sink<S: StepSink + ?Sized>(&self, input: &str, sink: &mut S) -> String {
        let source = self.prepare(input);
        engine::run(&source, self.tables, sink)
    }

    /// Convert and record every step for diagnostics.
    pub fn explain(&self, input: &str) -> ExplainResult {
        let source = self.prepare(input);
        let mut steps = Vec::new();
        let output = engine::run(&source, self.tables, &mut steps);
        let normalized = match source {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        ExplainResult::new(input, normalized, output, steps)
    }

    fn prepare<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.normalize {
            normalize(input, self.tables)
        } else {
            Cow::Borrowed(input)
        }
    }
}
