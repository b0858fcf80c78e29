use crate::logger;
use crate::models::{AnswerRecord, Question, QuizSession};
use rand::Rng;
use rand::seq::SliceRandom;

/// Exact set equality between the user's selection and the correct set:
/// same size and mutual containment. Ordering never matters.
pub fn is_correct(selected: &[usize], correct: &[usize]) -> bool {
    selected.len() == correct.len()
        && selected.iter().all(|i| correct.contains(i))
        && correct.iter().all(|i| selected.contains(i))
}

impl QuizSession {
    /// Start a new run over the full question set: uniform Fisher-Yates
    /// permutation of the questions, position 0, no answers, score 0.
    /// Restart goes through this same path.
    pub fn start<R: Rng>(pool: &[Question], rng: &mut R) -> Self {
        let mut questions = pool.to_vec();
        questions.shuffle(rng);
        logger::log(&format!("session started with {} questions", questions.len()));
        Self {
            questions,
            current_index: 0,
            answers: Vec::new(),
            score: 0,
            completed: false,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Record one submitted answer. Awards 1 point when the selection
    /// equals the correct set, 0 otherwise. Does not advance.
    pub fn submit_answer(&mut self, selected: Vec<usize>, question: &Question) {
        let correct = is_correct(&selected, &question.correct_answers);
        let points = if correct { 1 } else { 0 };
        logger::log(&format!(
            "answer for question {}: {:?} -> {}",
            question.id,
            selected,
            if correct { "correct" } else { "incorrect" }
        ));
        self.answers.push(AnswerRecord {
            question: question.clone(),
            user_answers: selected,
            is_correct: correct,
            points,
        });
        self.score += points;
    }

    /// Move to the next question, or mark the session complete when the
    /// current question is the last one.
    pub fn advance(&mut self) {
        if self.current_index < self.questions.len().saturating_sub(1) {
            self.current_index += 1;
        } else {
            self.completed = true;
            logger::log(&format!(
                "session complete: {} / {}",
                self.score,
                self.questions.len()
            ));
        }
    }
}
