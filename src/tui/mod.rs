//! TUI (Text User Interface) for browsing and editing the model list.

mod app;
mod constants;
mod draw;
mod form;
mod handlers;
mod shortcuts;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;

use crate::core::store::Store;

use app::App;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop until the user quits.
pub fn run(store: Store) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store);

    loop {
        terminal.draw(|f| draw::draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key(key, &mut app) == HandleResult::Break {
                        break;
                    }
                    // The document may have changed on disk; never trust the cached list.
                    app.refresh();
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
