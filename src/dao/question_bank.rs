use std::path::PathBuf;

use rand::Rng;
use tracing::debug;

use crate::dao::{
    codec::decode_question,
    flat_file::{FlatFile, Rewrite},
    models::Question,
    storage::{StoreError, StoreResult},
};

/// Trivia questions, backed by one question per line.
#[derive(Debug)]
pub struct QuestionBank {
    file: FlatFile,
}

impl QuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }

    /// The underlying file handle, used at startup and by health checks.
    pub fn file(&self) -> &FlatFile {
        &self.file
    }

    /// Load every question in file order.
    pub async fn load_all(&self) -> StoreResult<Vec<Question>> {
        self.file.load_records(decode_question).await
    }

    /// Draw a question uniformly at random, removing its line when `consume` is set.
    pub async fn draw(&self, consume: bool) -> StoreResult<Question> {
        self.draw_with(consume, |len| rand::rng().random_range(0..len))
            .await
    }

    /// Same as [`QuestionBank::draw`] with the index picker supplied by the caller.
    ///
    /// `pick` receives the bank size (never zero) and must return an index below it.
    pub async fn draw_with<P>(&self, consume: bool, pick: P) -> StoreResult<Question>
    where
        P: FnOnce(usize) -> usize,
    {
        if !consume {
            let mut questions = self.load_all().await?;
            if questions.is_empty() {
                return Err(StoreError::EmptyBank);
            }
            let index = pick(questions.len());
            return Ok(questions.swap_remove(index));
        }

        let drawn = self
            .file
            .mutate(|lines| {
                let questions = lines
                    .iter()
                    .map(|line| self.file.decode_line(line, decode_question))
                    .collect::<StoreResult<Vec<_>>>()?;
                if questions.is_empty() {
                    return Err(StoreError::EmptyBank);
                }

                let index = pick(questions.len());
                let question = questions[index].clone();
                let source_line = lines[index].number;

                let lines = lines
                    .into_iter()
                    .zip(&questions)
                    .filter(|(line, decoded)| {
                        line.number != source_line || decoded.prompt != question.prompt
                    })
                    .map(|(line, _)| line.text)
                    .collect();

                Ok(Rewrite {
                    lines,
                    output: question,
                })
            })
            .await?;

        debug!(prompt = %drawn.prompt, "consumed question from bank");
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const BANK: &str = "Capital of France? => [Berlin, Paris, Rome, 1]\n\
                        \n\
                        Largest planet? => [Jupiter, Mars, 0]\n\
                        Capital of France? Really? => [Paris, Lyon, 0]\n";

    fn bank_with(contents: &str) -> (tempfile::TempDir, PathBuf, QuestionBank) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.md");
        std::fs::write(&path, contents).unwrap();
        let bank = QuestionBank::new(&path);
        (dir, path, bank)
    }

    #[tokio::test]
    async fn loads_questions_skipping_blank_lines() {
        let (_dir, _path, bank) = bank_with(BANK);
        let questions = bank.load_all().await.unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].prompt, "Largest planet?");
        assert_eq!(questions[1].answers[&0], "Jupiter");
        assert_eq!(questions[1].correct_answer, 0);
    }

    #[tokio::test]
    async fn malformed_question_aborts_the_load() {
        let (_dir, _path, bank) = bank_with("Fine? => [a, 0]\nnot a question\n");
        assert!(matches!(
            bank.load_all().await,
            Err(StoreError::Format { line: 2, .. })
        ));
    }

    #[tokio::test]
    async fn consuming_draw_removes_only_the_drawn_line() {
        let (_dir, path, bank) = bank_with(BANK);

        let drawn = bank.draw_with(true, |_| 0).await.unwrap();
        assert_eq!(drawn.prompt, "Capital of France?");

        let remaining = bank.load_all().await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|q| q.prompt != drawn.prompt));
        // A prompt that merely contains the drawn one must survive.
        assert_eq!(remaining[1].prompt, "Capital of France? Really?");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Largest planet? => [Jupiter, Mars, 0]\n\
             Capital of France? Really? => [Paris, Lyon, 0]\n"
        );
    }

    #[tokio::test]
    async fn random_consuming_draw_shrinks_bank_by_one() {
        let (_dir, _path, bank) = bank_with(BANK);
        let drawn = bank.draw(true).await.unwrap();

        let remaining = bank.load_all().await.unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|q| q.prompt != drawn.prompt));
    }

    #[tokio::test]
    async fn non_consuming_draw_keeps_bank_intact() {
        let (_dir, path, bank) = bank_with(BANK);
        let before = std::fs::read_to_string(&path).unwrap();

        let mut seen = HashSet::new();
        for _ in 0..20 {
            seen.insert(bank.draw(false).await.unwrap().prompt);
        }

        assert!(!seen.is_empty());
        assert_eq!(bank.load_all().await.unwrap().len(), 3);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn same_question_can_be_drawn_twice_without_consuming() {
        let (_dir, _path, bank) = bank_with(BANK);
        let first = bank.draw_with(false, |_| 2).await.unwrap();
        let second = bank.draw_with(false, |_| 2).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn empty_bank_cannot_be_drawn() {
        let (_dir, _path, bank) = bank_with("\n\n");
        assert!(matches!(bank.draw(false).await, Err(StoreError::EmptyBank)));
        assert!(matches!(bank.draw(true).await, Err(StoreError::EmptyBank)));
    }

    #[tokio::test]
    async fn bank_empties_after_consuming_everything() {
        let (_dir, _path, bank) = bank_with(BANK);
        for _ in 0..3 {
            bank.draw(true).await.unwrap();
        }
        assert!(bank.load_all().await.unwrap().is_empty());
        assert!(matches!(bank.draw(true).await, Err(StoreError::EmptyBank)));
    }
}
