use serde::Serialize;

use super::emit::{Action, RephState};
use super::engine::{Step, StepSink};
use crate::tables::TableKind;
use crate::unicode::is_bengali;

/// Full diagnostic result for a single conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    /// Scanner input when normalization changed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    pub output: String,
    pub steps: Vec<ExplainStep>,
    /// Bengali scalars no table matched. Usually a table gap.
    pub unmapped: Vec<UnmappedChar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplainStep {
    pub start: usize,
    pub width: usize,
    pub pattern: String,
    pub table: Option<TableKind>,
    pub action: Action,
    pub glyphs: String,
    pub output: String,
    pub reph_pending: bool,
}

impl From<&Step<'_>> for ExplainStep {
    fn from(step: &Step<'_>) -> Self {
        Self {
            start: step.start,
            width: step.pattern.chars().count(),
            pattern: step.pattern.to_string(),
            table: step.table,
            action: step.action,
            glyphs: step.glyphs.to_string(),
            output: step.output.to_string(),
            reph_pending: step.reph == RephState::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmappedChar {
    pub index: usize,
    pub ch: char,
}

impl StepSink for Vec<ExplainStep> {
    fn record(&mut self, step: &Step<'_>) {
        self.push(step.into());
    }
}

impl ExplainResult {
    pub(crate) fn new(
        input: &str,
        normalized: Option<String>,
        output: String,
        steps: Vec<ExplainStep>,
    ) -> Self {
        let unmapped = steps
            .iter()
            .filter(|s| s.action == Action::PassThrough)
            .filter_map(|s| {
                let ch = s.pattern.chars().next()?;
                is_bengali(ch).then_some(UnmappedChar { index: s.start, ch })
            })
            .collect();
        Self {
            input: input.to_string(),
            normalized,
            output,
            steps,
            unmapped,
        }
    }
}
