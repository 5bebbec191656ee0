//! Declarative prompts
//!
//! Interactive flows are written as a sequence of [`Question`] values handed
//! to an [`AnswerProvider`]. The CLI answers them on the terminal, tests
//! replay a fixed list with [`ScriptedAnswers`].

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Error, Result};

/// One selectable entry of a `Select` or `MultiSelect` question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub title: String,
    pub value: String,
    pub selected: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            title: value.clone(),
            value,
            selected: false,
        }
    }

    pub fn titled(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// A question asked to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Text {
        message: String,
        initial: Option<String>,
        allow_empty: bool,
    },
    Confirm {
        message: String,
        initial: bool,
    },
    Select {
        message: String,
        choices: Vec<Choice>,
    },
    MultiSelect {
        message: String,
        choices: Vec<Choice>,
    },
}

impl Question {
    pub fn text(message: impl Into<String>) -> Self {
        Question::Text {
            message: message.into(),
            initial: None,
            allow_empty: true,
        }
    }

    /// Text question that must not be answered with an empty string
    pub fn required_text(message: impl Into<String>) -> Self {
        Question::Text {
            message: message.into(),
            initial: None,
            allow_empty: false,
        }
    }

    pub fn text_with_default(message: impl Into<String>, initial: impl Into<String>) -> Self {
        Question::Text {
            message: message.into(),
            initial: Some(initial.into()),
            allow_empty: true,
        }
    }

    pub fn confirm(message: impl Into<String>, initial: bool) -> Self {
        Question::Confirm {
            message: message.into(),
            initial,
        }
    }

    pub fn select(message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Question::Select {
            message: message.into(),
            choices,
        }
    }

    pub fn multi_select(message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Question::MultiSelect {
            message: message.into(),
            choices,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Question::Text { message, .. }
            | Question::Confirm { message, .. }
            | Question::Select { message, .. }
            | Question::MultiSelect { message, .. } => message,
        }
    }

    /// Answer taken when the user accepts the proposed value
    pub fn default_answer(&self) -> Answer {
        match self {
            Question::Text { initial, .. } => Answer::Text(initial.clone().unwrap_or_default()),
            Question::Confirm { initial, .. } => Answer::Bool(*initial),
            Question::Select { choices, .. } => choices
                .iter()
                .find(|c| c.selected)
                .or_else(|| choices.first())
                .map(|c| Answer::Choice(c.value.clone()))
                .unwrap_or(Answer::Default),
            Question::MultiSelect { choices, .. } => Answer::Choices(
                choices
                    .iter()
                    .filter(|c| c.selected)
                    .map(|c| c.value.clone())
                    .collect(),
            ),
        }
    }
}

/// Answer to a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Bool(bool),
    Choice(String),
    Choices(Vec<String>),
    /// Accept whatever the question proposes
    Default,
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(values: Vec<&str>) -> Self {
        Answer::Choices(values.into_iter().map(String::from).collect())
    }
}

/// Source of answers for interactive flows
pub trait AnswerProvider: Send + Sync {
    /// Answer one question
    fn ask(&self, question: &Question) -> Result<Answer>;

    /// Ask a text question
    fn text(&self, question: Question) -> Result<String> {
        match resolve(&question, self.ask(&question)?) {
            Answer::Text(text) | Answer::Choice(text) => {
                if let Question::Text {
                    allow_empty: false, ..
                } = question
                {
                    if text.trim().is_empty() {
                        return Err(Error::prompt(format!(
                            "\"{}\" cannot be empty",
                            question.message()
                        )));
                    }
                }
                Ok(text)
            }
            other => Err(mismatch(&question, &other)),
        }
    }

    /// Ask a yes/no question
    fn confirm(&self, question: Question) -> Result<bool> {
        match resolve(&question, self.ask(&question)?) {
            Answer::Bool(value) => Ok(value),
            other => Err(mismatch(&question, &other)),
        }
    }

    /// Ask for one of the choices, returns its value
    fn select(&self, question: Question) -> Result<String> {
        match resolve(&question, self.ask(&question)?) {
            Answer::Choice(value) | Answer::Text(value) => {
                if let Question::Select { choices, .. } = &question {
                    if !choices.iter().any(|c| c.value == value) {
                        return Err(Error::prompt(format!(
                            "\"{}\" is not a valid choice for \"{}\"",
                            value,
                            question.message()
                        )));
                    }
                }
                Ok(value)
            }
            other => Err(mismatch(&question, &other)),
        }
    }

    /// Ask for any number of the choices, returns their values
    fn multi_select(&self, question: Question) -> Result<Vec<String>> {
        match resolve(&question, self.ask(&question)?) {
            Answer::Choices(values) => Ok(values),
            other => Err(mismatch(&question, &other)),
        }
    }
}

fn resolve(question: &Question, answer: Answer) -> Answer {
    match answer {
        Answer::Default => question.default_answer(),
        answer => answer,
    }
}

fn mismatch(question: &Question, answer: &Answer) -> Error {
    Error::prompt(format!(
        "Unexpected answer {:?} for \"{}\"",
        answer,
        question.message()
    ))
}

/// Replays a fixed, ordered list of answers
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    answers: Mutex<VecDeque<Answer>>,
}

impl ScriptedAnswers {
    pub fn new<I, A>(answers: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Answer>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }
}

impl AnswerProvider for ScriptedAnswers {
    fn ask(&self, question: &Question) -> Result<Answer> {
        let mut answers = self
            .answers
            .lock()
            .map_err(|_| Error::prompt("Scripted answers lock poisoned"))?;

        answers.pop_front().ok_or_else(|| {
            Error::prompt(format!("No scripted answer left for \"{}\"", question.message()))
        })
    }
}

/// Accepts the proposed answer of every question
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptDefaults;

impl AnswerProvider for AcceptDefaults {
    fn ask(&self, _question: &Question) -> Result<Answer> {
        Ok(Answer::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_in_order() {
        let answers = ScriptedAnswers::new([
            Answer::from("client"),
            Answer::Choice("browser".into()),
            Answer::from(true),
        ]);

        assert_eq!(answers.text(Question::text("Name")).unwrap(), "client");
        assert_eq!(
            answers
                .select(Question::select(
                    "Runtime",
                    vec![Choice::new("browser"), Choice::new("node")]
                ))
                .unwrap(),
            "browser"
        );
        assert!(answers.confirm(Question::confirm("Confirm?", false)).unwrap());
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn test_scripted_answers_exhausted() {
        let answers = ScriptedAnswers::new(Vec::<Answer>::new());
        let err = answers.confirm(Question::confirm("Confirm?", true)).unwrap_err();
        assert!(err.to_string().contains("Confirm?"));
    }

    #[test]
    fn test_default_answers() {
        let answers = ScriptedAnswers::new([Answer::Default, Answer::Default, Answer::Default]);
        assert_eq!(
            answers
                .text(Question::text_with_default("Name of the config", "default"))
                .unwrap(),
            "default"
        );
        assert!(answers.confirm(Question::confirm("Confirm?", true)).unwrap());
        assert_eq!(
            answers
                .multi_select(Question::multi_select(
                    "Plugins",
                    vec![Choice::new("a").selected(true), Choice::new("b")]
                ))
                .unwrap(),
            vec!["a"]
        );
    }

    #[test]
    fn test_required_text_rejects_empty() {
        let answers = ScriptedAnswers::new(["  "]);
        assert!(answers.text(Question::required_text("Name")).is_err());
    }

    #[test]
    fn test_invalid_choice() {
        let answers = ScriptedAnswers::new([Answer::Choice("deno".into())]);
        let question = Question::select("Runtime", vec![Choice::new("browser")]);
        assert!(answers.select(question).is_err());
    }

    #[test]
    fn test_type_mismatch() {
        let answers = ScriptedAnswers::new([Answer::from("yes")]);
        assert!(answers.confirm(Question::confirm("Confirm?", true)).is_err());
    }

    #[test]
    fn test_accept_defaults() {
        assert!(AcceptDefaults.confirm(Question::confirm("Confirm?", true)).unwrap());
    }
}
