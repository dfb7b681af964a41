use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use gallery_core::AppConfig;
use gallery_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    transition::TransitionConfigExt,
    widgets::{StatusBarWidget, TrackWidget},
    App, Theme,
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("Gallery")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Arc<AppConfig>,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(config.clone(), Theme::default(), size.width)?;
    info!(slides = app.slides.len(), "gallery started");

    let event_handler = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms),
        config.transition.animation_tick_duration(),
    );

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| {
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            TrackWidget::render(frame, main_layout[0], &mut app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => app.apply_action(handle_key_event(key), now),
                AppEvent::Pointer { kind, column, row } => {
                    app.handle_pointer(kind, column, row, now)
                }
                AppEvent::Resize(width, _) => app.signal_resize(width, now),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    info!("gallery closed");
    Ok(())
}
