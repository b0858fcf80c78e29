use crate::models::{AnswerRecord, QuizSession};
use crate::presenter::{OptionClass, classify_option};
use crate::ui::layout::calculate_results_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Score as a percentage of the question count, 0 when there are no
/// questions.
pub fn percentage(score: u32, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        score as f64 / total as f64 * 100.0
    }
}

pub fn draw_results(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_results_chunks(f.area());

    let header = Paragraph::new("Quiz Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let total = session.questions.len();
    let score_text = vec![
        Line::from(format!("{} / {}", session.score, total)),
        Line::from(format!("{:.1}%", percentage(session.score, total))),
    ];
    let score = Paragraph::new(score_text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, layout.score_area);

    let incorrect: Vec<&AnswerRecord> =
        session.answers.iter().filter(|a| !a.is_correct).collect();

    let review = if incorrect.is_empty() {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Congratulations!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from("You answered every question correctly."),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    } else {
        Paragraph::new(review_text(&incorrect))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Incorrect or partially incorrect answers"),
            )
    };
    f.render_widget(review, layout.review_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// Per-question review rows, classified from the stored record alone.
fn review_text(incorrect: &[&AnswerRecord]) -> Text<'static> {
    let mut text = Text::default();
    for (i, record) in incorrect.iter().enumerate() {
        text.push_line(Line::from(Span::styled(
            format!("{}. {}", i + 1, truncate_string(&record.question.question, 70)),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (option_index, option) in record.question.options.iter().enumerate() {
            let class = classify_option(
                &record.question.correct_answers,
                &record.user_answers,
                option_index,
            );
            let (marker, style) = match class {
                OptionClass::CorrectSelected => (
                    "✓",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                OptionClass::CorrectMissed => ("•", Style::default().fg(Color::Yellow)),
                OptionClass::IncorrectSelected => ("✗", Style::default().fg(Color::Red)),
                OptionClass::Neutral => (" ", Style::default()),
            };
            text.push_line(Line::from(Span::styled(
                format!("   {} {}", marker, truncate_string(option, 66)),
                style,
            )));
        }
        text.push_line(Line::from(""));
    }
    text
}
