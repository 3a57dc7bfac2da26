use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quiz_client::{App, AppError, Config, QuizApiClient, db, logger, spawn_api_worker};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::{Arc, mpsc};
use std::time::Duration;

fn main() {
    if let Err(e) = run() {
        eprintln!("quiz-client: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logger::init(&config.log_file);
    logger::log(&format!("Starting quiz-client against {}", config.api_url));

    let conn = db::init_db(&config.db_path())?;

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let backend = Arc::new(QuizApiClient::new(config.api_url.clone()));
    let _worker = spawn_api_worker(backend, response_tx, request_rx)?;

    let mut app = App::new(request_tx, conn);

    let mut terminal = setup_terminal()?;

    let result = run_loop(&mut terminal, &mut app, &response_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    logger::log("Exiting");
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    restore_on_err(execute!(stdout, EnterAlternateScreen), restore_terminal)?;
    restore_on_err(Terminal::new(CrosstermBackend::new(stdout)), restore_terminal)
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show).ok();
}

/// Runs `restore` when a setup step fails, so raw mode never outlives a failed start.
fn restore_on_err<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    responses: &mpsc::Receiver<quiz_client::models::ApiResponse>,
) -> Result<(), AppError> {
    while !app.should_quit {
        while let Ok(response) = responses.try_recv() {
            app.handle_api_response(response);
        }

        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
