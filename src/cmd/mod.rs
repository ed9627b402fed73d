//! CLI command implementations.
//!
//! `triage` owns both modes: the interactive default and `--list`.

pub mod triage;

pub use triage::{cmd_list, cmd_triage};
