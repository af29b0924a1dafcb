use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Fixed number of answer options per question.
pub const OPTION_COUNT: usize = 4;

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Topic pool a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    Coding,
    Aptitude,
    VerbalReasoning,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Coding,
        Category::Aptitude,
        Category::VerbalReasoning,
    ];

    /// Human-readable pool name as shown in the exam interface.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Coding => "Coding",
            Category::Aptitude => "Aptitude",
            Category::VerbalReasoning => "English & Reasoning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have exactly {expected} options, got {got}")]
    WrongOptionCount { expected: usize, got: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {count} options")]
    CorrectIndexOutOfRange { index: usize, count: usize },
}

/// A single multiple-choice question. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: Category,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt or an option is blank, the
    /// option count differs from `OPTION_COUNT`, or the correct index is out
    /// of range.
    pub fn new(
        id: QuestionId,
        category: Category,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount {
                expected: OPTION_COUNT,
                got: options.len(),
            });
        }
        if let Some(index) = options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                count: options.len(),
            });
        }

        Ok(Self {
            id,
            category,
            prompt,
            options,
            correct_index,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Whether the given selection answers this question correctly.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: [&str; 4]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn question_new_happy_path() {
        let q = Question::new(
            QuestionId::new(1),
            Category::Coding,
            "Which data structure uses LIFO?",
            options(["Queue", "Stack", "Linked List", "Tree"]),
            1,
        )
        .unwrap();

        assert_eq!(q.id(), QuestionId::new(1));
        assert_eq!(q.category(), Category::Coding);
        assert_eq!(q.options().len(), OPTION_COUNT);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn question_rejects_blank_prompt() {
        let err = Question::new(
            QuestionId::new(1),
            Category::Aptitude,
            "   ",
            options(["a", "b", "c", "d"]),
            0,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_rejects_wrong_option_count() {
        let err = Question::new(
            QuestionId::new(1),
            Category::Coding,
            "Prompt",
            vec!["a".into(), "b".into()],
            0,
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuestionError::WrongOptionCount {
                expected: OPTION_COUNT,
                got: 2
            }
        );
    }

    #[test]
    fn question_rejects_blank_option() {
        let err = Question::new(
            QuestionId::new(1),
            Category::Coding,
            "Prompt",
            options(["a", " ", "c", "d"]),
            0,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption { index: 1 });
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = Question::new(
            QuestionId::new(1),
            Category::VerbalReasoning,
            "Prompt",
            options(["a", "b", "c", "d"]),
            4,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::CorrectIndexOutOfRange { index: 4, count: 4 });
    }

    #[test]
    fn category_labels_match_exam_interface() {
        assert_eq!(Category::Coding.to_string(), "Coding");
        assert_eq!(Category::VerbalReasoning.to_string(), "English & Reasoning");
        assert_eq!(Category::ALL.len(), 3);
    }
}
