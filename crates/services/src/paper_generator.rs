//! Sampling of test papers from the question bank.
//!
//! Each paper draws the same number of questions from every category pool,
//! then shuffles the combined set so categories are interleaved. Draws are
//! independent per paper, so the same question may appear in several papers
//! but never twice in one.

use rand::Rng;
use rand::seq::SliceRandom;

use exam_core::model::{Category, ExamSettings, PaperId, Question, TestPaper};

use crate::error::GeneratorError;
use crate::question_bank::QuestionBank;

/// Builds the numbered paper series from a bank and settings.
#[derive(Debug, Clone)]
pub struct PaperGenerator<'a> {
    bank: &'a QuestionBank,
    settings: &'a ExamSettings,
}

impl<'a> PaperGenerator<'a> {
    #[must_use]
    pub fn new(bank: &'a QuestionBank, settings: &'a ExamSettings) -> Self {
        Self { bank, settings }
    }

    /// Checks that every pool can cover the per-category sample size.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::PoolTooSmall` naming the first short pool.
    pub fn check_pools(&self) -> Result<(), GeneratorError> {
        let requested = self.settings.questions_per_category() as usize;
        for category in Category::ALL {
            let available = self.bank.pool_len(category);
            if available < requested {
                return Err(GeneratorError::PoolTooSmall {
                    category,
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Generates the whole series in order, `Abhyaas Mock Test 1` onward.
    ///
    /// # Errors
    ///
    /// Fails if a pool is smaller than the per-category sample size.
    pub fn generate_series<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<TestPaper>, GeneratorError> {
        self.check_pools()?;

        (1..=u64::from(self.settings.paper_count()))
            .map(|number| self.generate_paper(PaperId::new(number), rng))
            .collect()
    }

    fn generate_paper<R: Rng + ?Sized>(
        &self,
        id: PaperId,
        rng: &mut R,
    ) -> Result<TestPaper, GeneratorError> {
        let per_category = self.settings.questions_per_category() as usize;
        let mut questions: Vec<Question> =
            Vec::with_capacity(per_category * Category::ALL.len());

        for category in Category::ALL {
            let mut pool = self.bank.pool(category).to_vec();
            pool.shuffle(rng);
            pool.truncate(per_category);
            questions.extend(pool);
        }
        questions.shuffle(rng);

        let name = format!("Abhyaas Mock Test {}", id.value());
        Ok(TestPaper::new(id, name, questions)?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
