use crate::tables::{MappingTables, TableKind};

/// Widest pattern the scanner tries, in scalars.
pub const MAX_WIDTH: usize = 3;

/// How a matched substitute is placed in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Append the substitute.
    Append,
    /// Append, unless a reph is pending; then place before the reph glyph.
    BaseConsonant,
    /// Append or swap-before depending on the vowel glyph's placement class.
    VowelByPlacement,
    /// First half before the previous glyph, second half after it.
    SplitAround,
    /// Append and mark the reph as pending.
    DeferReph,
}

/// Lookup order for 3- and 2-scalar candidates. First table holding the
/// exact substring wins.
pub const WIDE_PRIORITY: &[(TableKind, Rule)] = &[
    (TableKind::Cluster, Rule::Append),
    (TableKind::VowelSign, Rule::Append),
    (TableKind::PostBase, Rule::Append),
    (TableKind::Reph, Rule::DeferReph),
];

/// Lookup order for single-scalar candidates.
pub const SINGLE_PRIORITY: &[(TableKind, Rule)] = &[
    (TableKind::Cluster, Rule::BaseConsonant),
    (TableKind::VowelSign, Rule::VowelByPlacement),
    (TableKind::PostBase, Rule::Append),
    (TableKind::TwoPartVowelSign, Rule::SplitAround),
];

pub fn priorities(width: usize) -> &'static [(TableKind, Rule)] {
    if width == 1 {
        SINGLE_PRIORITY
    } else {
        WIDE_PRIORITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match<'t> {
    pub width: usize,
    pub table: TableKind,
    pub rule: Rule,
    pub glyphs: &'t str,
}

/// Cursor over the input's scalars.
pub(crate) struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of every scalar plus the end offset.
    bounds: Vec<usize>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        let bounds = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        Self {
            input,
            bounds,
            pos: 0,
        }
    }

    /// Scalar count of the whole input.
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.len() - self.pos
    }

    /// The next `width` scalars. `width` must not exceed `remaining()`.
    pub fn slice(&self, width: usize) -> &'a str {
        &self.input[self.bounds[self.pos]..self.bounds[self.pos + width]]
    }

    pub fn advance(&mut self, width: usize) {
        self.pos += width;
    }

    /// Longest match at the cursor: 3 scalars, then 2, then 1. Does not move
    /// the cursor.
    pub fn next_match<'t>(&self, tables: &'t MappingTables) -> Option<Match<'t>> {
        (1..=MAX_WIDTH.min(self.remaining()))
            .rev()
            .find_map(|width| {
                let pattern = self.slice(width);
                priorities(width).iter().find_map(|&(table, rule)| {
                    tables.lookup(table, pattern).map(|glyphs| Match {
                        width,
                        table,
                        rule,
                        glyphs,
                    })
                })
            })
    }
}
