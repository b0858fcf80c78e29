use choice_quiz::logger;
use choice_quiz::models::{AppState, Command, QuizSession};
use choice_quiz::presenter::QuestionView;
use choice_quiz::questions::load_questions;
use choice_quiz::ui::{draw_loading, draw_quiz, draw_results};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("questions.json"));
    let pool = match load_questions(&path) {
        Ok(questions) => questions,
        Err(e) => {
            logger::log(&format!("failed to load {}: {}", path.display(), e));
            Vec::new()
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    // An empty question file keeps the loading screen up for good.
    let mut app_state = if pool.is_empty() {
        AppState::Loading
    } else {
        AppState::Quiz
    };
    let mut session = QuizSession::start(&pool, &mut rng);
    let mut view = session
        .current_question()
        .cloned()
        .map(|q| QuestionView::new(q, &mut rng));

    loop {
        terminal.draw(|f| match app_state {
            AppState::Loading => draw_loading(f),
            AppState::Quiz => {
                if let Some(view) = &view {
                    draw_quiz(f, &session, view);
                }
            }
            AppState::Results => draw_results(f, &session),
        })?;

        if let Event::Key(key) = event::read()? {
            if key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
            {
                break;
            }

            let command = match app_state {
                AppState::Loading => None,
                AppState::Quiz => view.as_mut().and_then(|v| v.handle_key(key.code)),
                AppState::Results => match key.code {
                    KeyCode::Char('r') => Some(Command::Restart),
                    _ => None,
                },
            };

            match command {
                Some(Command::SubmitAnswer { selected }) => {
                    if let Some(question) = session.current_question().cloned() {
                        session.submit_answer(selected, &question);
                    }
                }
                Some(Command::Advance) => {
                    session.advance();
                    if session.completed {
                        app_state = AppState::Results;
                        view = None;
                    } else {
                        view = session
                            .current_question()
                            .cloned()
                            .map(|q| QuestionView::new(q, &mut rng));
                    }
                }
                Some(Command::Restart) => {
                    session = QuizSession::start(&pool, &mut rng);
                    view = session
                        .current_question()
                        .cloned()
                        .map(|q| QuestionView::new(q, &mut rng));
                    app_state = AppState::Quiz;
                }
                None => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
