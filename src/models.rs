use serde::Deserialize;

/// One quiz item as it appears in the question file. Option order is the
/// authoring order; `correct_answers` are positions into `options`.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswers")]
    pub correct_answers: Vec<usize>,
    #[serde(rename = "multipleChoice")]
    pub multiple_choice: bool,
}

/// The immutable outcome of one submitted answer.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question: Question,
    pub user_answers: Vec<usize>,
    pub is_correct: bool,
    pub points: u32,
}

/// State for one run of the quiz, from shuffle to completion or restart.
/// Mutated only through the operations in `session.rs`.
#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub answers: Vec<AnswerRecord>,
    pub score: u32,
    pub completed: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Loading,
    Quiz,
    Results,
}

/// Controller-bound events reported upward by the presenters. Consumed
/// synchronously by the main loop, so ordering is never ambiguous.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SubmitAnswer { selected: Vec<usize> },
    Advance,
    Restart,
}
