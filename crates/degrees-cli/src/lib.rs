//! Degrees CLI library.
//!
//! Console prompting and output formatting shared by the `degrees` binary.

pub mod console;
pub mod output;
