use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{PaperId, QuestionId};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaperError {
    #[error("paper name cannot be empty")]
    EmptyName,

    #[error("paper must contain at least one question")]
    Empty,

    #[error("duplicate question {id} within one paper")]
    DuplicateQuestion { id: QuestionId },
}

/// One generated exam instance: a fixed, ordered set of questions.
///
/// Immutable after construction. Answer state is index-addressed against this
/// order, so an attempt must hold on to the same paper for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPaper {
    id: PaperId,
    name: String,
    questions: Vec<Question>,
}

impl TestPaper {
    /// Creates a new paper.
    ///
    /// # Errors
    ///
    /// Returns `PaperError::EmptyName` for a blank name, `PaperError::Empty`
    /// for zero questions, and `PaperError::DuplicateQuestion` when the same
    /// question id appears twice.
    pub fn new(
        id: PaperId,
        name: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, PaperError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PaperError::EmptyName);
        }
        if questions.is_empty() {
            return Err(PaperError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(PaperError::DuplicateQuestion { id: question.id() });
            }
        }

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            questions,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> PaperId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, QuestionId};

    fn build_question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            Category::Coding,
            format!("Prompt {id}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            0,
        )
        .unwrap()
    }

    #[test]
    fn paper_new_happy_path() {
        let paper = TestPaper::new(
            PaperId::new(1),
            "Abhyaas Mock Test 1",
            vec![build_question(1), build_question(2)],
        )
        .unwrap();

        assert_eq!(paper.id(), PaperId::new(1));
        assert_eq!(paper.name(), "Abhyaas Mock Test 1");
        assert_eq!(paper.question_count(), 2);
        assert_eq!(paper.question(1).unwrap().id(), QuestionId::new(2));
        assert!(paper.question(2).is_none());
    }

    #[test]
    fn paper_rejects_blank_name() {
        let err = TestPaper::new(PaperId::new(1), "  ", vec![build_question(1)]).unwrap_err();
        assert_eq!(err, PaperError::EmptyName);
    }

    #[test]
    fn paper_rejects_no_questions() {
        let err = TestPaper::new(PaperId::new(1), "Test", Vec::new()).unwrap_err();
        assert_eq!(err, PaperError::Empty);
    }

    #[test]
    fn paper_rejects_duplicate_question_ids() {
        let err = TestPaper::new(
            PaperId::new(1),
            "Test",
            vec![build_question(7), build_question(7)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PaperError::DuplicateQuestion {
                id: QuestionId::new(7)
            }
        );
    }
}
