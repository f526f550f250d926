//! Bengali Unicode to legacy ANSI glyph transcoding.
//!
//! Unicode stores vowel signs and the reph in logical order; legacy glyph
//! fonts expect some of them before the consonant they follow. The converter
//! does table-driven longest-match substitution and reorders emitted glyphs
//! as it goes.

pub mod converter;
pub mod legacy;
pub mod normalize;
pub mod settings;
pub mod tables;
pub mod unicode;

pub use converter::{convert, Converter};
pub use tables::{MappingTables, TableKind};
