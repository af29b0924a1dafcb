use thiserror::Error;

use crate::model::ids::{PaperId, QuestionId};
use crate::model::paper::TestPaper;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("answer sheet has {answers} entries for {questions} questions")]
    AnswerCountMismatch { answers: usize, questions: usize },
}

/// Outcome of one question in a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

/// Everything the review screen needs for one question, precomputed so the
/// presentation layer never re-derives correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub question_id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub chosen: Option<usize>,
    pub correct_index: usize,
    pub outcome: AnswerOutcome,
}

/// Scored result of one attempt. Pure data; building it has no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    paper_id: PaperId,
    paper_name: String,
    correct: usize,
    incorrect: usize,
    unanswered: usize,
    reviews: Vec<QuestionReview>,
}

impl TestReport {
    /// Scores a final answer sheet against its paper.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::AnswerCountMismatch` when the sheet length does
    /// not equal the paper's question count.
    pub fn from_answers(
        paper: &TestPaper,
        selections: &[Option<usize>],
    ) -> Result<Self, ReportError> {
        if selections.len() != paper.question_count() {
            return Err(ReportError::AnswerCountMismatch {
                answers: selections.len(),
                questions: paper.question_count(),
            });
        }

        let mut correct = 0;
        let mut incorrect = 0;
        let mut unanswered = 0;
        let mut reviews = Vec::with_capacity(paper.question_count());

        for (question, chosen) in paper.questions().iter().zip(selections.iter().copied()) {
            let outcome = match chosen {
                Some(selected) if question.is_correct(selected) => {
                    correct += 1;
                    AnswerOutcome::Correct
                }
                Some(_) => {
                    incorrect += 1;
                    AnswerOutcome::Incorrect
                }
                None => {
                    unanswered += 1;
                    AnswerOutcome::Unanswered
                }
            };

            reviews.push(QuestionReview {
                question_id: question.id(),
                prompt: question.prompt().to_owned(),
                options: question.options().to_vec(),
                chosen,
                correct_index: question.correct_index(),
                outcome,
            });
        }

        debug_assert_eq!(correct + incorrect + unanswered, paper.question_count());

        Ok(Self {
            paper_id: paper.id(),
            paper_name: paper.name().to_owned(),
            correct,
            incorrect,
            unanswered,
            reviews,
        })
    }

    // Accessors
    #[must_use]
    pub fn paper_id(&self) -> PaperId {
        self.paper_id
    }

    #[must_use]
    pub fn paper_name(&self) -> &str {
        &self.paper_name
    }

    /// The headline score: number of correct answers.
    #[must_use]
    pub fn score(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.unanswered
    }

    /// Always equals correct + incorrect + unanswered.
    #[must_use]
    pub fn total(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn reviews(&self) -> &[QuestionReview] {
        &self.reviews
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Question, QuestionId};

    fn build_paper(correct_indices: &[usize]) -> TestPaper {
        let questions = correct_indices
            .iter()
            .enumerate()
            .map(|(i, &correct)| {
                Question::new(
                    QuestionId::new(i as u64 + 1),
                    Category::Coding,
                    format!("Prompt {i}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    correct,
                )
                .unwrap()
            })
            .collect();
        TestPaper::new(PaperId::new(1), "Test", questions).unwrap()
    }

    #[test]
    fn scores_mixed_answer_sheet() {
        // Correct indices [0, 1, 2]; selections [0, 2, none].
        let paper = build_paper(&[0, 1, 2]);
        let report = TestReport::from_answers(&paper, &[Some(0), Some(2), None]).unwrap();

        assert_eq!(report.score(), 1);
        assert_eq!(report.incorrect(), 1);
        assert_eq!(report.unanswered(), 1);
        assert_eq!(report.correct() + report.incorrect() + report.unanswered(), report.total());
    }

    #[test]
    fn counts_always_sum_to_total() {
        let paper = build_paper(&[0, 1, 2, 3, 0]);
        let sheets: [&[Option<usize>]; 3] = [
            &[None, None, None, None, None],
            &[Some(0), Some(1), Some(2), Some(3), Some(0)],
            &[Some(3), None, Some(2), Some(0), None],
        ];
        for selections in sheets {
            let report = TestReport::from_answers(&paper, selections).unwrap();
            assert_eq!(
                report.correct() + report.incorrect() + report.unanswered(),
                report.total()
            );
        }
    }

    #[test]
    fn review_records_carry_choice_and_outcome() {
        let paper = build_paper(&[1, 1]);
        let report = TestReport::from_answers(&paper, &[Some(1), Some(3)]).unwrap();

        let first = &report.reviews()[0];
        assert_eq!(first.chosen, Some(1));
        assert_eq!(first.correct_index, 1);
        assert_eq!(first.outcome, AnswerOutcome::Correct);
        assert_eq!(first.options.len(), 4);

        let second = &report.reviews()[1];
        assert_eq!(second.chosen, Some(3));
        assert_eq!(second.outcome, AnswerOutcome::Incorrect);
    }

    #[test]
    fn rejects_mismatched_answer_sheet() {
        let paper = build_paper(&[0, 1]);
        let err = TestReport::from_answers(&paper, &[Some(0)]).unwrap_err();
        assert_eq!(
            err,
            ReportError::AnswerCountMismatch {
                answers: 1,
                questions: 2
            }
        );
    }
}
