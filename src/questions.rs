use crate::models::Question;
use std::fs;
use std::io;
use std::path::Path;

/// Load the question set from a JSON file: an array of question records.
/// Records that violate the data invariants (no options, out-of-range or
/// empty correct set, single-answer question with more than one correct
/// index) are dropped rather than reported.
pub fn load_questions(path: &Path) -> io::Result<Vec<Question>> {
    let content = fs::read_to_string(path)?;
    let parsed: Vec<Question> = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(parsed.into_iter().filter(is_valid).collect())
}

fn is_valid(question: &Question) -> bool {
    if question.options.is_empty() || question.correct_answers.is_empty() {
        return false;
    }
    if question
        .correct_answers
        .iter()
        .any(|&i| i >= question.options.len())
    {
        return false;
    }
    question.multiple_choice || question.correct_answers.len() == 1
}
