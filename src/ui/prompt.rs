//! Interactive single-choice menu for one TODO.

use super::icons::POINTER;
use crate::errors::TriageError;
use crate::todo::MarkerRecord;
use crate::triage::{Action, Prompter};
use console::style;
use dialoguer::{Select, theme::ColorfulTheme};

/// `Prompter` backed by a dialoguer `Select` on the terminal.
pub struct SelectPrompter {
    theme: ColorfulTheme,
}

impl Default for SelectPrompter {
    fn default() -> Self {
        Self {
            theme: ColorfulTheme {
                active_item_prefix: style(POINTER.to_string()).for_stderr().cyan(),
                ..ColorfulTheme::default()
            },
        }
    }
}

/// `Issue: <text> <file>:<line>` with the title highlighted and the location dimmed.
pub fn render_label(record: &MarkerRecord) -> String {
    format!(
        "{}: {} {}",
        style("Issue").cyan().bold(),
        record.text(),
        style(record.location()).dim()
    )
}

impl Prompter for SelectPrompter {
    fn choose(&mut self, record: &MarkerRecord, actions: &[Action]) -> Result<usize, TriageError> {
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt(render_label(record))
            .items(&labels)
            .default(0)
            .report(false)
            .interact_opt()?;

        // Esc / q
        selection.ok_or(TriageError::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_label_contains_text_and_location() {
        console::set_colors_enabled(false);
        let record = MarkerRecord::new("src/main.rs", 5, "fix bug");
        assert_eq!(render_label(&record), "Issue: fix bug src/main.rs:5");
    }
}
