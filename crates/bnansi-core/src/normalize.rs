//! Pre-scan normalization.
//!
//! Applies the `[normalize]` table in a single left-to-right pass, longest
//! rule first at each position. Replacement text is never rescanned.

use std::borrow::Cow;

use tracing::debug;

use crate::tables::{MappingTables, TableKind};

pub fn normalize<'a>(input: &'a str, tables: &MappingTables) -> Cow<'a, str> {
    let max_width = tables.max_normalize_width();
    if max_width == 0 || input.is_empty() {
        return Cow::Borrowed(input);
    }

    // Char boundaries plus the end offset, so `bounds[i]..bounds[i + w]`
    // slices exactly `w` scalars.
    let bounds: Vec<usize> = input
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(input.len()))
        .collect();
    let n = bounds.len() - 1;

    let mut out: Option<String> = None;
    let mut i = 0;
    while i < n {
        let hit = (1..=max_width.min(n - i)).rev().find_map(|w| {
            let pattern = &input[bounds[i]..bounds[i + w]];
            tables
                .lookup(TableKind::Normalize, pattern)
                .map(|replacement| (w, replacement))
        });

        match hit {
            Some((w, replacement)) => {
                out.get_or_insert_with(|| {
                    let mut s = String::with_capacity(input.len() + 16);
                    s.push_str(&input[..bounds[i]]);
                    s
                })
                .push_str(replacement);
                i += w;
            }
            None => {
                if let Some(s) = out.as_mut() {
                    s.push_str(&input[bounds[i]..bounds[i + 1]]);
                }
                i += 1;
            }
        }
    }

    match out {
        Some(s) => {
            debug!(before = input.len(), after = s.len(), "normalized input");
            Cow::Owned(s)
        }
        None => Cow::Borrowed(input),
    }
}
