pub mod logger;
pub mod models;
pub mod presenter;
pub mod questions;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use models::{AnswerRecord, AppState, Command, Question, QuizSession};
pub use presenter::{OptionClass, QuestionView, classify_option};
pub use questions::load_questions;
pub use session::is_correct;
pub use ui::{draw_loading, draw_quiz, draw_results, percentage};
pub use utils::truncate_string;
