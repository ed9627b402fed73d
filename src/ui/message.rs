//! Operator-facing status lines.
//!
//! The `format_*` functions build the styled line; the `print_*` wrappers
//! write it to stdout.

use super::icons::{CHECK, CROSS, NOTE, WARN};
use console::style;

pub fn format_warning(msg: &str) -> String {
    format!("{}{}", WARN, style(msg).yellow())
}

pub fn format_success(msg: &str) -> String {
    format!("{}{}", CHECK, style(msg).green())
}

pub fn format_error(msg: &str) -> String {
    format!("{}{}", CROSS, style(msg).red().bold())
}

pub fn format_note(msg: &str) -> String {
    format!("{}{}", NOTE, style(msg).dim())
}

pub fn print_warning(msg: &str) {
    println!("{}", format_warning(msg));
}

pub fn print_success(msg: &str) {
    println!("{}", format_success(msg));
}

pub fn print_note(msg: &str) {
    println!("{}", format_note(msg));
}

/// Errors go to stderr so `--list` output stays clean.
pub fn print_error(msg: &str) {
    eprintln!("{}", format_error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_lines_keep_message_text() {
        console::set_colors_enabled(false);
        assert!(format_warning("Exiting.").ends_with("Exiting."));
        assert!(format_success("Created issue #4").ends_with("Created issue #4"));
        assert!(format_error("boom").ends_with("boom"));
        assert!(format_note("3 TODOs").ends_with("3 TODOs"));
    }
}
