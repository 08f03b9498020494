//! JSON helpers for files this client writes.
//!
//! Output is pretty-printed with 2-space indentation and a trailing
//! newline so hand-edited preference files stay readable.

mod json;

pub use json::*;
