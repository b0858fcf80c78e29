use crate::models::QuizSession;
use crate::presenter::{OptionClass, QuestionView, classify_option};
use crate::ui::layout::calculate_quiz_chunks;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession, view: &QuestionView) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!(
        "Question {} / {}  -  Score {}",
        session.current_index + 1,
        session.questions.len(),
        session.score
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(view.question.question.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let items: Vec<ListItem> = view
        .display_order
        .iter()
        .enumerate()
        .map(|(display_index, (text, original_index))| {
            option_item(view, display_index, text, *original_index)
        })
        .collect();

    let options_title = if view.question.multiple_choice {
        "Options (multiple answers)"
    } else {
        "Options"
    };
    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(options_title),
    );
    f.render_widget(options, layout.options_area);

    let help_text = if view.result_shown {
        vec![Line::from(vec![
            key_span("Enter"),
            Span::from(" Next  "),
            key_span("q"),
            Span::from(" Quit"),
        ])]
    } else {
        vec![Line::from(vec![
            key_span("↑/↓"),
            Span::from(" Move  "),
            key_span("Space"),
            Span::from(" Select  "),
            key_span("Enter"),
            Span::from(" Submit  "),
            key_span("q"),
            Span::from(" Quit"),
        ])]
    };
    let help = Paragraph::new(help_text)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn option_item(
    view: &QuestionView,
    display_index: usize,
    text: &str,
    original_index: usize,
) -> ListItem<'static> {
    let selected = view.is_selected(original_index);
    let marker = match (view.question.multiple_choice, selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(o)",
        (false, false) => "( )",
    };

    let mut style = if view.result_shown {
        match classify_option(&view.question.correct_answers, &view.selected, original_index) {
            OptionClass::CorrectSelected => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            OptionClass::CorrectMissed => Style::default().fg(Color::Yellow),
            OptionClass::IncorrectSelected => Style::default().fg(Color::Red),
            OptionClass::Neutral => Style::default(),
        }
    } else if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    if !view.result_shown && display_index == view.highlighted {
        style = style.add_modifier(Modifier::REVERSED);
    }

    ListItem::new(format!("{marker} {text}")).style(style)
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}
