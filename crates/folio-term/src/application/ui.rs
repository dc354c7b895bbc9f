#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::Theme;
use crate::domain::services::EFFECTS_INDICATOR;

/// Lays out one frame: rain underneath, the scrolled log, the prompt row
/// right below the log (or pinned to the bottom once the log fills the
/// screen) and the effects indicator in the top right corner.
pub fn draw(frame: &mut Frame, app_state: &mut AppState) {
    let area = frame.area();
    app_state.set_rect(area);

    if app_state.rain.is_enabled() {
        frame.render_widget(&app_state.rain, area);
    }

    let rows = app_state.rows();
    let visible = rows
        .len()
        .saturating_sub(app_state.scroll.position())
        .min(app_state.viewport_height());
    let log_area = Rect::new(area.x, area.y, area.width, visible as u16);
    let position = u16::try_from(app_state.scroll.position()).unwrap_or(u16::MAX);
    // Rain never shows through rows that carry text.
    frame.render_widget(Clear, log_area);
    frame.render_widget(Paragraph::new(rows).scroll((position, 0)), log_area);

    if area.height > 0 {
        let input_y = area.y + (visible as u16).min(area.height - 1);
        let prompt_width = (app_state.prompt.width() as u16 + 1).min(area.width);
        frame.render_widget(Clear, Rect::new(area.x, input_y, area.width, 1));
        frame.render_widget(
            Span::styled(app_state.prompt.clone(), Theme::input()),
            Rect::new(area.x, input_y, prompt_width, 1),
        );
        frame.render_widget(
            &app_state.input,
            Rect::new(
                area.x + prompt_width,
                input_y,
                area.width - prompt_width,
                1,
            ),
        );
    }

    if app_state.effects_enabled {
        let width = (EFFECTS_INDICATOR.width() as u16).min(area.width);
        let indicator_area = Rect::new(area.right() - width, area.y, width, 1.min(area.height));
        frame.render_widget(
            Span::styled(EFFECTS_INDICATOR, Theme::indicator()),
            indicator_area,
        );
    }
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tick_rate: Duration,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props, Instant::now());
    let mut events = EventsService::new(tick_rate);
    tracing::info!(tick_rate_ms = tick_rate.as_millis() as u64, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event, Instant::now()) {
            break;
        }
    }

    tracing::info!(commands = app_state.history.len(), "ui stopped");
    return Ok(());
}

pub async fn start(app_state_props: AppStateProps, tick_rate: Duration) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props, tick_rate).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return result;
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}
