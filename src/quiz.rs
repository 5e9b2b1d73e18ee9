//! Knowledge quiz: attempt state machine and grading.
//!
//! States: `Idle` → `start()` → `Active` → last `advance()` → `Complete`.
//! `start()` from any state begins a fresh attempt; `exit()` returns to `Idle`.
//! A completed attempt is frozen until one of those two calls.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::models::{QuizQuestion, QuizResult};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz has no questions")]
    EmptyQuestionSet,

    #[error("No quiz attempt in progress")]
    NotActive,

    #[error("Question {index} does not exist (quiz has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("Option {option} does not exist for question {question}")]
    OptionOutOfRange { question: usize, option: usize },
}

/// Mutable per-run state. Exactly one exists while the engine is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizAttempt {
    pub current_index: usize,
    /// Question index → selected option index.
    pub answers: BTreeMap<usize, usize>,
    pub started_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Active(QuizAttempt),
    Complete(QuizResult),
}

/// Outcome of `advance()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on; carries the new current index.
    Next(usize),
    /// The last question was passed and the attempt was graded.
    Completed(QuizResult),
}

pub struct QuizEngine {
    questions: Vec<QuizQuestion>,
    phase: QuizPhase,
    clock: Arc<dyn Clock>,
}

impl QuizEngine {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        Self::with_clock(questions, Arc::new(SystemClock))
    }

    pub fn with_clock(
        questions: Vec<QuizQuestion>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self {
            questions,
            phase: QuizPhase::Idle,
            clock,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, QuizPhase::Active(_))
    }

    /// Result of the last completed attempt, if the engine is in its terminal state.
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.phase {
            QuizPhase::Complete(result) => Some(result),
            _ => None,
        }
    }

    /// Begin a fresh attempt at question 0 with no answers.
    pub fn start(&mut self) {
        let started_at = self.clock.now();
        tracing::info!(questions = self.questions.len(), "Quiz attempt started");
        self.phase = QuizPhase::Active(QuizAttempt {
            current_index: 0,
            answers: BTreeMap::new(),
            started_at,
        });
    }

    /// Abandon any attempt or dismiss the summary, back to the intro screen.
    pub fn exit(&mut self) {
        self.phase = QuizPhase::Idle;
    }

    pub fn current_index(&self) -> Option<usize> {
        self.attempt().map(|a| a.current_index)
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn selected_answer(&self, question_index: usize) -> Option<usize> {
        self.attempt()
            .and_then(|a| a.answers.get(&question_index).copied())
    }

    pub fn is_answered(&self, question_index: usize) -> bool {
        self.selected_answer(question_index).is_some()
    }

    /// Record a choice. Returns `Ok(false)` without changing anything when the
    /// question already has an answer.
    pub fn select_answer(
        &mut self,
        question_index: usize,
        option_index: usize,
    ) -> Result<bool, QuizError> {
        let total = self.questions.len();
        let question = self
            .questions
            .get(question_index)
            .ok_or(QuizError::QuestionOutOfRange {
                index: question_index,
                total,
            })?;
        if option_index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                question: question_index,
                option: option_index,
            });
        }

        let attempt = match &mut self.phase {
            QuizPhase::Active(attempt) => attempt,
            _ => return Err(QuizError::NotActive),
        };

        if attempt.answers.contains_key(&question_index) {
            tracing::debug!(question_index, "Answer already recorded, ignoring");
            return Ok(false);
        }
        attempt.answers.insert(question_index, option_index);
        Ok(true)
    }

    /// Move to the next question, or grade the attempt on the last one.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let total = self.questions.len();
        let attempt = match &mut self.phase {
            QuizPhase::Active(attempt) => attempt,
            _ => return Err(QuizError::NotActive),
        };

        if attempt.current_index + 1 < total {
            attempt.current_index += 1;
            return Ok(Advance::Next(attempt.current_index));
        }

        let elapsed_secs = elapsed_seconds(attempt.started_at, self.clock.now());
        let result = grade(&self.questions, &attempt.answers, elapsed_secs);
        tracing::info!(
            score = result.score,
            correct = result.correct_count(),
            total = result.total_questions,
            elapsed_secs = result.elapsed_secs,
            "Quiz attempt completed"
        );
        self.phase = QuizPhase::Complete(result.clone());
        Ok(Advance::Completed(result))
    }

    /// Position in the attempt as a percentage, counting the current question.
    pub fn progress_percent(&self) -> u32 {
        match &self.phase {
            QuizPhase::Idle => 0,
            QuizPhase::Active(a) => score_percent(a.current_index + 1, self.questions.len()),
            QuizPhase::Complete(_) => 100,
        }
    }

    fn attempt(&self) -> Option<&QuizAttempt> {
        match &self.phase {
            QuizPhase::Active(attempt) => Some(attempt),
            _ => None,
        }
    }
}

/// Grade a set of answers against `questions`.
pub fn grade(
    questions: &[QuizQuestion],
    answers: &BTreeMap<usize, usize>,
    elapsed_secs: u64,
) -> QuizResult {
    let correct_answers: Vec<usize> = answers
        .iter()
        .filter(|(qi, oi)| questions.get(**qi).is_some_and(|q| q.is_correct(**oi)))
        .map(|(qi, _)| *qi)
        .collect();

    QuizResult {
        score: score_percent(correct_answers.len(), questions.len()),
        total_questions: questions.len(),
        elapsed_secs,
        correct_answers,
    }
}

/// round(part / total × 100), halves rounded up. Zero when `total` is zero.
pub fn score_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    ((part * 200 + total) / (2 * total)) as u32
}

/// Whole seconds between two instants, floored and never negative.
pub fn elapsed_seconds(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis / 1000) as u64
    }
}

/// `m:ss` display of a duration in seconds.
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::quiz_questions;
    use crate::clock::ManualClock;

    fn engine_with_clock() -> (QuizEngine, ManualClock) {
        let clock = ManualClock::fixed();
        let engine =
            QuizEngine::with_clock(quiz_questions().to_vec(), Arc::new(clock.clone())).unwrap();
        (engine, clock)
    }

    fn run_to_end(engine: &mut QuizEngine) -> QuizResult {
        loop {
            if let Advance::Completed(result) = engine.advance().unwrap() {
                return result;
            }
        }
    }

    #[test]
    fn empty_question_set_rejected() {
        assert_eq!(
            QuizEngine::new(Vec::new()).err(),
            Some(QuizError::EmptyQuestionSet)
        );
    }

    #[test]
    fn starts_idle() {
        let (engine, _) = engine_with_clock();
        assert_eq!(engine.phase(), &QuizPhase::Idle);
        assert_eq!(engine.progress_percent(), 0);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn start_begins_at_first_question() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        assert!(engine.is_active());
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(engine.current_question().unwrap().id, "1");
    }

    #[test]
    fn select_before_start_is_rejected() {
        let (mut engine, _) = engine_with_clock();
        assert_eq!(engine.select_answer(0, 1), Err(QuizError::NotActive));
    }

    #[test]
    fn answered_question_keeps_first_choice() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        assert_eq!(engine.select_answer(0, 3), Ok(true));
        assert_eq!(engine.select_answer(0, 1), Ok(false));
        assert_eq!(engine.selected_answer(0), Some(3));
    }

    #[test]
    fn out_of_range_indices_store_nothing() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        assert_eq!(
            engine.select_answer(8, 0),
            Err(QuizError::QuestionOutOfRange { index: 8, total: 8 })
        );
        assert_eq!(
            engine.select_answer(0, 4),
            Err(QuizError::OptionOutOfRange {
                question: 0,
                option: 4
            })
        );
        assert!(!engine.is_answered(0));
    }

    #[test]
    fn perfect_run_scores_100() {
        let (mut engine, clock) = engine_with_clock();
        engine.start();
        let answers: Vec<usize> = engine.questions().iter().map(|q| q.correct_index).collect();
        for (i, correct) in answers.into_iter().enumerate() {
            engine.select_answer(i, correct).unwrap();
            clock.advance_secs(10);
            let step = engine.advance().unwrap();
            if i < 7 {
                assert_eq!(step, Advance::Next(i + 1));
            } else {
                let Advance::Completed(result) = step else {
                    panic!("expected completion");
                };
                assert_eq!(result.score, 100);
                assert_eq!(result.elapsed_secs, 80);
                assert_eq!(result.correct_answers, (0..8).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn correct_indices_are_question_positions() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        // Only questions 2 and 5 right
        engine.select_answer(0, 0).unwrap();
        engine.select_answer(2, 2).unwrap();
        engine.select_answer(5, 1).unwrap();
        let result = run_to_end(&mut engine);
        assert_eq!(result.correct_answers, vec![2, 5]);
        assert_eq!(result.score, 25);
        assert_eq!(result.total_questions, 8);
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        let result = run_to_end(&mut engine);
        assert_eq!(result.score, 0);
        assert!(result.correct_answers.is_empty());
    }

    #[test]
    fn score_matches_formula_for_every_correct_count() {
        for correct in 0..=8usize {
            let (mut engine, _) = engine_with_clock();
            engine.start();
            let keys: Vec<usize> = engine.questions().iter().map(|q| q.correct_index).collect();
            for (i, key) in keys.iter().enumerate() {
                let pick = if i < correct { *key } else { (*key + 1) % 4 };
                engine.select_answer(i, pick).unwrap();
            }
            let result = run_to_end(&mut engine);
            let expected = (100.0 * correct as f64 / 8.0).round() as u32;
            assert_eq!(result.score, expected, "correct = {correct}");
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn completion_happens_exactly_once() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        let result = run_to_end(&mut engine);

        assert_eq!(engine.advance(), Err(QuizError::NotActive));
        assert_eq!(engine.select_answer(0, 1), Err(QuizError::NotActive));
        assert_eq!(engine.result(), Some(&result));
        assert_eq!(engine.progress_percent(), 100);
    }

    #[test]
    fn start_after_completion_resets_attempt() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        engine.select_answer(0, 1).unwrap();
        run_to_end(&mut engine);

        engine.start();
        assert_eq!(engine.current_index(), Some(0));
        assert!(!engine.is_answered(0));
        assert!(engine.result().is_none());
        match engine.phase() {
            QuizPhase::Active(attempt) => assert!(attempt.answers.is_empty()),
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn restart_mid_attempt_resets_timer() {
        let (mut engine, clock) = engine_with_clock();
        engine.start();
        clock.advance_secs(500);
        engine.start();
        clock.advance_secs(3);
        let result = run_to_end(&mut engine);
        assert_eq!(result.elapsed_secs, 3);
    }

    #[test]
    fn exit_returns_to_idle() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        engine.exit();
        assert_eq!(engine.phase(), &QuizPhase::Idle);
    }

    #[test]
    fn elapsed_time_is_floored() {
        let (mut engine, clock) = engine_with_clock();
        engine.start();
        clock.advance_millis(61_999);
        let result = run_to_end(&mut engine);
        assert_eq!(result.elapsed_secs, 61);
    }

    #[test]
    fn clock_going_backwards_gives_zero_elapsed() {
        let (mut engine, clock) = engine_with_clock();
        engine.start();
        clock.advance_secs(-30);
        let result = run_to_end(&mut engine);
        assert_eq!(result.elapsed_secs, 0);
    }

    #[test]
    fn progress_counts_current_question() {
        let (mut engine, _) = engine_with_clock();
        engine.start();
        assert_eq!(engine.progress_percent(), 13); // 1/8 = 12.5 rounds up
        engine.advance().unwrap();
        assert_eq!(engine.progress_percent(), 25);
    }

    #[test]
    fn score_percent_rounding() {
        assert_eq!(score_percent(1, 3), 33);
        assert_eq!(score_percent(2, 3), 67);
        assert_eq!(score_percent(1, 8), 13);
        assert_eq!(score_percent(0, 0), 0);
    }

    #[test]
    fn format_elapsed_pads_seconds() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(600), "10:00");
    }
}
