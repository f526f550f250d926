//! C ABI over the Bengali Unicode to legacy ANSI converter, for hosting
//! runtimes that cannot link Rust directly.

// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod ffi;
pub mod trace_init;

pub use bnansi_core::{convert, legacy, Converter, MappingTables, TableKind};
pub use ffi::*;
