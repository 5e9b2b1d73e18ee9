use serde::{Deserialize, Serialize};

use super::enums::ScoreTier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub category: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

/// Snapshot of a finished attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Percentage in 0..=100.
    pub score: u32,
    pub total_questions: usize,
    pub elapsed_secs: u64,
    /// Question indices answered correctly, ascending.
    pub correct_answers: Vec<usize>,
}

impl QuizResult {
    pub fn correct_count(&self) -> usize {
        self.correct_answers.len()
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score)
    }
}
