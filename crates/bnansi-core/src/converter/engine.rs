use tracing::{debug, debug_span, trace};

use super::emit::{Action, Emitter, OutputBuffer, RephState};
use super::scanner::Scanner;
use crate::tables::{MappingTables, TableKind};

/// One committed step of a conversion.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// Scalar index where the step starts.
    pub start: usize,
    /// Source scalars consumed.
    pub pattern: &'a str,
    /// Matching table; `None` for pass-through.
    pub table: Option<TableKind>,
    pub action: Action,
    /// Substitute glyphs (the scalar itself for pass-through).
    pub glyphs: &'a str,
    /// Accumulator after the step.
    pub output: &'a OutputBuffer,
    pub reph: RephState,
}

/// Receives every step of a conversion. Must not influence the output.
pub trait StepSink {
    fn record(&mut self, step: &Step<'_>);
}

impl StepSink for () {
    fn record(&mut self, _step: &Step<'_>) {}
}

/// Scan `input` to the end, emitting through the reorder engine.
pub(crate) fn run<S: StepSink + ?Sized>(
    input: &str,
    tables: &MappingTables,
    sink: &mut S,
) -> String {
    let _span = debug_span!("convert", bytes = input.len()).entered();

    let mut scanner = Scanner::new(input);
    let mut emitter = Emitter::with_capacity(scanner.len());

    while !scanner.is_done() {
        let start = scanner.position();
        let (width, table, action, glyphs) = match scanner.next_match(tables) {
            Some(m) => (m.width, Some(m.table), emitter.emit(tables, &m), m.glyphs),
            None => {
                let scalar = scanner.slice(1);
                (1, None, emitter.pass_through(scalar), scalar)
            }
        };
        let pattern = scanner.slice(width);
        trace!(start, pattern, ?table, action = action.as_str(), glyphs);
        sink.record(&Step {
            start,
            pattern,
            table,
            action,
            glyphs,
            output: emitter.output(),
            reph: emitter.reph(),
        });
        scanner.advance(width);
    }

    debug!(
        chars_in = scanner.len(),
        units_out = emitter.output().len(),
        reph_pending = emitter.reph() == RephState::Pending,
        "conversion finished"
    );
    emitter.finish()
}
