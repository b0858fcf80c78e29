pub mod layout;
mod loading;
mod quiz;
mod results;

pub use layout::{calculate_quiz_chunks, calculate_results_chunks};
pub use loading::draw_loading;
pub use quiz::draw_quiz;
pub use results::{draw_results, percentage};
