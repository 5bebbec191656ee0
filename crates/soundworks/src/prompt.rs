//! Terminal answers for interactive flows

use dialoguer::{Confirm, Input, MultiSelect, Select};
use soundworks_core::{Answer, AnswerProvider, Error, Question, Result};

/// Answers questions on the terminal with dialoguer
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl AnswerProvider for TerminalPrompter {
    fn ask(&self, question: &Question) -> Result<Answer> {
        match question {
            Question::Text {
                message,
                initial,
                allow_empty,
            } => {
                let mut input = Input::<String>::new()
                    .with_prompt(message)
                    .allow_empty(*allow_empty);
                if let Some(initial) = initial {
                    input = input.default(initial.clone());
                }
                input.interact_text().map(Answer::Text).map_err(prompt_error)
            }
            Question::Confirm { message, initial } => Confirm::new()
                .with_prompt(message)
                .default(*initial)
                .interact()
                .map(Answer::Bool)
                .map_err(prompt_error),
            Question::Select { message, choices } => {
                let titles: Vec<&str> = choices.iter().map(|c| c.title.as_str()).collect();
                let default = choices.iter().position(|c| c.selected).unwrap_or(0);

                let index = Select::new()
                    .with_prompt(message)
                    .items(&titles)
                    .default(default)
                    .interact()
                    .map_err(prompt_error)?;

                choices
                    .get(index)
                    .map(|c| Answer::Choice(c.value.clone()))
                    .ok_or_else(|| Error::prompt(format!("No choice at index {}", index)))
            }
            Question::MultiSelect { message, choices } => {
                let titles: Vec<&str> = choices.iter().map(|c| c.title.as_str()).collect();
                let defaults: Vec<bool> = choices.iter().map(|c| c.selected).collect();

                let indices = MultiSelect::new()
                    .with_prompt(format!("{} (space to select, enter to submit)", message))
                    .items(&titles)
                    .defaults(&defaults)
                    .interact()
                    .map_err(prompt_error)?;

                Ok(Answer::Choices(
                    indices
                        .into_iter()
                        .filter_map(|i| choices.get(i).map(|c| c.value.clone()))
                        .collect(),
                ))
            }
        }
    }
}

/// Ctrl+C surfaces as an interrupted read
fn prompt_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => Error::Cancelled,
        err => Error::prompt(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let err = prompt_error(dialoguer::Error::IO(std::io::Error::from(
            std::io::ErrorKind::Interrupted,
        )));
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_other_errors_are_prompt_errors() {
        let err = prompt_error(dialoguer::Error::IO(std::io::Error::other("not a terminal")));
        assert!(matches!(err, Error::Prompt { .. }));
    }
}
