use crate::models::{Command, Question};
use crossterm::event::KeyCode;
use rand::Rng;
use rand::seq::SliceRandom;

/// Post-submission classification of one option. Exactly one variant
/// applies to every option, derived from the correct set and the
/// selected set alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionClass {
    CorrectSelected,
    CorrectMissed,
    IncorrectSelected,
    Neutral,
}

pub fn classify_option(correct: &[usize], selected: &[usize], index: usize) -> OptionClass {
    let is_correct = correct.contains(&index);
    let is_selected = selected.contains(&index);
    match (is_correct, is_selected) {
        (true, true) => OptionClass::CorrectSelected,
        (true, false) => OptionClass::CorrectMissed,
        (false, true) => OptionClass::IncorrectSelected,
        (false, false) => OptionClass::Neutral,
    }
}

/// View state for the single question on screen. Rebuilt from scratch
/// whenever the question identity changes, so the display permutation is
/// stable across redraws of the same question.
#[derive(Debug)]
pub struct QuestionView {
    pub question: Question,
    /// Option text paired with its original index, in display order.
    pub display_order: Vec<(String, usize)>,
    /// Original indices currently selected.
    pub selected: Vec<usize>,
    /// Highlight cursor, a position into `display_order`.
    pub highlighted: usize,
    pub result_shown: bool,
}

impl QuestionView {
    pub fn new<R: Rng>(question: Question, rng: &mut R) -> Self {
        let mut display_order: Vec<(String, usize)> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| (text.clone(), i))
            .collect();
        display_order.shuffle(rng);
        Self {
            question,
            display_order,
            selected: Vec::new(),
            highlighted: 0,
            result_shown: false,
        }
    }

    pub fn is_selected(&self, original_index: usize) -> bool {
        self.selected.contains(&original_index)
    }

    /// Toggle an option by its original index. Ignored once the result is
    /// shown. Single-answer questions replace the selection, multi-answer
    /// questions toggle membership.
    pub fn toggle(&mut self, original_index: usize) {
        if self.result_shown {
            return;
        }
        if self.question.multiple_choice {
            if let Some(pos) = self.selected.iter().position(|&i| i == original_index) {
                self.selected.remove(pos);
            } else {
                self.selected.push(original_index);
            }
        } else {
            self.selected = vec![original_index];
        }
    }

    fn toggle_highlighted(&mut self) {
        if let Some(&(_, original_index)) = self.display_order.get(self.highlighted) {
            self.toggle(original_index);
        }
    }

    /// Freeze the view and hand the selection to the controller. No-op
    /// while nothing is selected.
    fn submit(&mut self) -> Option<Command> {
        if self.selected.is_empty() {
            return None;
        }
        self.result_shown = true;
        Some(Command::SubmitAnswer {
            selected: self.selected.clone(),
        })
    }

    /// Map one key press to local view mutation or a controller command.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        if self.result_shown {
            return match key {
                KeyCode::Enter => Some(Command::Advance),
                _ => None,
            };
        }
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.highlighted > 0 {
                    self.highlighted -= 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.highlighted < self.display_order.len().saturating_sub(1) {
                    self.highlighted += 1;
                }
                None
            }
            KeyCode::Char(' ') => {
                self.toggle_highlighted();
                None
            }
            KeyCode::Enter => self.submit(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(multi: bool) -> Question {
        Question {
            id: 1,
            question: "Pick.".to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answers: if multi { vec![0, 2] } else { vec![1] },
            multiple_choice: multi,
        }
    }

    fn view(multi: bool) -> QuestionView {
        let mut rng = StdRng::seed_from_u64(11);
        QuestionView::new(question(multi), &mut rng)
    }

    #[test]
    fn test_display_order_maps_back_to_original_text() {
        let v = view(false);
        assert_eq!(v.display_order.len(), v.question.options.len());
        for (text, original_index) in &v.display_order {
            assert_eq!(&v.question.options[*original_index], text);
        }
    }

    #[test]
    fn test_display_order_is_a_permutation() {
        let v = view(true);
        let mut indices: Vec<usize> = v.display_order.iter().map(|&(_, i)| i).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_single_answer_selection_replaces() {
        let mut v = view(false);
        v.toggle(0);
        assert_eq!(v.selected, vec![0]);
        v.toggle(2);
        assert_eq!(v.selected, vec![2]);
    }

    #[test]
    fn test_multi_answer_toggles_membership() {
        let mut v = view(true);
        v.toggle(0);
        v.toggle(2);
        assert!(v.is_selected(0));
        assert!(v.is_selected(2));
        v.toggle(0);
        assert!(!v.is_selected(0));
        assert!(v.is_selected(2));
    }

    #[test]
    fn test_toggle_ignored_after_result_shown() {
        let mut v = view(false);
        v.toggle(1);
        assert!(v.handle_key(KeyCode::Enter).is_some());
        assert!(v.result_shown);
        v.toggle(0);
        assert_eq!(v.selected, vec![1]);
    }

    #[test]
    fn test_submit_with_empty_selection_is_noop() {
        let mut v = view(false);
        assert_eq!(v.handle_key(KeyCode::Enter), None);
        assert!(!v.result_shown);
    }

    #[test]
    fn test_submit_reports_selection() {
        let mut v = view(true);
        v.toggle(2);
        v.toggle(0);
        match v.handle_key(KeyCode::Enter) {
            Some(Command::SubmitAnswer { selected }) => {
                assert_eq!(selected.len(), 2);
                assert!(selected.contains(&0));
                assert!(selected.contains(&2));
            }
            other => panic!("expected SubmitAnswer, got {other:?}"),
        }
    }

    #[test]
    fn test_advance_only_after_result_shown() {
        let mut v = view(false);
        v.toggle(1);
        v.handle_key(KeyCode::Enter);
        assert_eq!(v.handle_key(KeyCode::Enter), Some(Command::Advance));
    }

    #[test]
    fn test_highlight_stays_in_bounds() {
        let mut v = view(false);
        v.handle_key(KeyCode::Up);
        assert_eq!(v.highlighted, 0);
        for _ in 0..10 {
            v.handle_key(KeyCode::Down);
        }
        assert_eq!(v.highlighted, v.display_order.len() - 1);
    }

    #[test]
    fn test_space_toggles_highlighted_option() {
        let mut v = view(false);
        v.handle_key(KeyCode::Down);
        v.handle_key(KeyCode::Char(' '));
        let (_, original_index) = v.display_order[1];
        assert!(v.is_selected(original_index));
    }

    #[test]
    fn test_classification_exhaustive_and_exclusive() {
        let correct = vec![0, 2];
        let selected = vec![2, 3];
        let classes: Vec<OptionClass> = (0..4)
            .map(|i| classify_option(&correct, &selected, i))
            .collect();
        assert_eq!(classes[0], OptionClass::CorrectMissed);
        assert_eq!(classes[1], OptionClass::Neutral);
        assert_eq!(classes[2], OptionClass::CorrectSelected);
        assert_eq!(classes[3], OptionClass::IncorrectSelected);
    }

    #[test]
    fn test_fresh_view_resets_selection_and_result_flag() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut v = QuestionView::new(question(false), &mut rng);
        v.toggle(1);
        v.handle_key(KeyCode::Enter);
        let next = QuestionView::new(question(true), &mut rng);
        assert!(next.selected.is_empty());
        assert!(!next.result_shown);
        assert_eq!(next.highlighted, 0);
    }
}
