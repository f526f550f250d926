use serde::Serialize;

use super::scanner::{Match, Rule};
use crate::tables::MappingTables;

/// Ordered legacy code units emitted so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    units: Vec<char>,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[char] {
        &self.units
    }

    pub fn push_str(&mut self, glyphs: &str) {
        self.units.extend(glyphs.chars());
    }

    /// Place `unit` immediately before the last emitted unit. Appends when
    /// nothing has been emitted yet.
    pub fn insert_before_last(&mut self, unit: char) {
        let at = self.units.len().saturating_sub(1);
        self.units.insert(at, unit);
    }

    /// Sandwich the last emitted unit between `before` and `after`. On an
    /// empty buffer both halves are appended in order.
    pub fn split_around(&mut self, before: char, after: char) {
        self.insert_before_last(before);
        self.units.push(after);
    }

    pub fn into_string(self) -> String {
        self.units.into_iter().collect()
    }
}

impl std::fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.units.iter().try_for_each(|c| std::fmt::Write::write_char(f, *c))
    }
}

/// Whether a reph glyph is waiting for the next base consonant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RephState {
    #[default]
    Normal,
    /// A reph was emitted optimistically; the next single-scalar base
    /// consonant goes in front of it. Wide matches leave this state alone.
    Pending,
}

/// What the engine did with one step of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Append,
    SwapBefore,
    SplitAround,
    DeferReph,
    ResolveReph,
    PassThrough,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Append => "append",
            Action::SwapBefore => "swap-before",
            Action::SplitAround => "split-around",
            Action::DeferReph => "defer-reph",
            Action::ResolveReph => "resolve-reph",
            Action::PassThrough => "pass-through",
        }
    }
}

/// Per-call emission state: the accumulator and the reph flag.
#[derive(Debug, Default)]
pub(crate) struct Emitter {
    out: OutputBuffer,
    reph: RephState,
}

impl Emitter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: OutputBuffer::with_capacity(capacity),
            reph: RephState::Normal,
        }
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.out
    }

    pub fn reph(&self) -> RephState {
        self.reph
    }

    pub fn emit(&mut self, tables: &MappingTables, m: &Match<'_>) -> Action {
        match m.rule {
            Rule::Append => {
                self.out.push_str(m.glyphs);
                Action::Append
            }
            Rule::DeferReph => {
                self.out.push_str(m.glyphs);
                self.reph = RephState::Pending;
                Action::DeferReph
            }
            Rule::BaseConsonant => match self.reph {
                RephState::Pending => {
                    self.swap_before(m.glyphs);
                    self.reph = RephState::Normal;
                    Action::ResolveReph
                }
                RephState::Normal => {
                    self.out.push_str(m.glyphs);
                    Action::Append
                }
            },
            Rule::VowelByPlacement => {
                if tables.is_trailing_vowel_sign(m.glyphs) {
                    self.out.push_str(m.glyphs);
                    Action::Append
                } else {
                    self.swap_before(m.glyphs);
                    Action::SwapBefore
                }
            }
            Rule::SplitAround => {
                let mut units = m.glyphs.chars();
                match (units.next(), units.next()) {
                    (Some(before), Some(after)) => self.out.split_around(before, after),
                    _ => self.out.push_str(m.glyphs),
                }
                Action::SplitAround
            }
        }
    }

    /// Copy an unmapped scalar through. Leaves the reph state untouched.
    pub fn pass_through(&mut self, scalar: &str) -> Action {
        self.out.push_str(scalar);
        Action::PassThrough
    }

    /// Only the substitute's first unit takes part in a swap.
    fn swap_before(&mut self, glyphs: &str) {
        if let Some(first) = glyphs.chars().next() {
            self.out.insert_before_last(first);
        }
    }

    pub fn finish(self) -> String {
        self.out.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TableKind;

    fn buffer(s: &str) -> OutputBuffer {
        let mut b = OutputBuffer::default();
        b.push_str(s);
        b
    }

    fn single(table: TableKind, rule: Rule, glyphs: &'static str) -> Match<'static> {
        Match {
            width: 1,
            table,
            rule,
            glyphs,
        }
    }

    #[test]
    fn insert_before_last_reverses_order() {
        let mut b = buffer("aK");
        b.insert_before_last('w');
        let units = b.units();
        assert_eq!(units[units.len() - 2], 'w');
        assert_eq!(units[units.len() - 1], 'K');
        assert_eq!(b.to_string(), "awK");
    }

    #[test]
    fn insert_before_last_on_empty_appends() {
        let mut b = OutputBuffer::default();
        b.insert_before_last('w');
        assert_eq!(b.to_string(), "w");
    }

    #[test]
    fn split_around_sandwiches_last_unit() {
        let mut b = buffer("aK");
        b.split_around('‡', 'v');
        assert_eq!(b.to_string(), "a‡Kv");
        assert_eq!(b.len(), 4);
    }

    #[test]
    fn split_around_on_empty() {
        let mut b = OutputBuffer::default();
        b.split_around('‡', 'v');
        assert_eq!(b.to_string(), "‡v");
    }

    #[test]
    fn display_matches_into_string() {
        let b = buffer("¶‡Kv");
        assert_eq!(b.to_string(), b.clone().into_string());
        assert!(!b.is_empty());
    }

    #[test]
    fn reph_defers_then_resolves_once() {
        let tables = MappingTables::global();
        let mut e = Emitter::default();

        let reph = Match {
            width: 2,
            table: TableKind::Reph,
            rule: Rule::DeferReph,
            glyphs: "©",
        };
        assert_eq!(e.emit(tables, &reph), Action::DeferReph);
        assert_eq!(e.reph(), RephState::Pending);
        assert_eq!(e.output().to_string(), "©");

        let ka = single(TableKind::Cluster, Rule::BaseConsonant, "K");
        assert_eq!(e.emit(tables, &ka), Action::ResolveReph);
        assert_eq!(e.reph(), RephState::Normal);
        assert_eq!(e.output().to_string(), "K©");

        let kha = single(TableKind::Cluster, Rule::BaseConsonant, "L");
        assert_eq!(e.emit(tables, &kha), Action::Append);
        assert_eq!(e.finish(), "K©L");
    }

    #[test]
    fn wide_append_keeps_reph_pending() {
        let tables = MappingTables::global();
        let mut e = Emitter::default();
        e.emit(
            tables,
            &Match {
                width: 2,
                table: TableKind::Reph,
                rule: Rule::DeferReph,
                glyphs: "©",
            },
        );
        e.emit(
            tables,
            &Match {
                width: 3,
                table: TableKind::Cluster,
                rule: Rule::Append,
                glyphs: "³",
            },
        );
        assert_eq!(e.reph(), RephState::Pending);
        assert_eq!(e.output().to_string(), "©³");
    }

    #[test]
    fn pass_through_keeps_reph_pending() {
        let mut e = Emitter::default();
        e.reph = RephState::Pending;
        assert_eq!(e.pass_through(" "), Action::PassThrough);
        assert_eq!(e.reph(), RephState::Pending);
    }

    #[test]
    fn vowel_placement() {
        let tables = MappingTables::global();
        let mut e = Emitter::default();
        e.emit(tables, &single(TableKind::Cluster, Rule::BaseConsonant, "K"));
        let aa = single(TableKind::VowelSign, Rule::VowelByPlacement, "v");
        assert_eq!(e.emit(tables, &aa), Action::Append);
        e.emit(tables, &single(TableKind::Cluster, Rule::BaseConsonant, "L"));
        let i = single(TableKind::VowelSign, Rule::VowelByPlacement, "w");
        assert_eq!(e.emit(tables, &i), Action::SwapBefore);
        assert_eq!(e.finish(), "KvwL");
    }

    #[test]
    fn resolve_reph_uses_first_unit_only() {
        let tables = MappingTables::global();
        let mut e = Emitter::default();
        e.reph = RephState::Pending;
        e.out.push_str("©");
        e.emit(tables, &single(TableKind::Cluster, Rule::BaseConsonant, "Av"));
        assert_eq!(e.finish(), "A©");
    }

    #[test]
    fn action_names_match_serialization() {
        for action in [
            Action::Append,
            Action::SwapBefore,
            Action::SplitAround,
            Action::DeferReph,
            Action::ResolveReph,
            Action::PassThrough,
        ] {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }
}
