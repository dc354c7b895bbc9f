use std::time::Instant;

use ratatui::prelude::Rect;
use ratatui::text::Line;
use tui_textarea::CursorMove;
use tui_textarea::TextArea;

use super::banner;
use super::renderer;
use super::CommandProcessor;
use super::History;
use super::Rain;
use super::Scroll;
use super::Theme;
use super::Typewriter;
use crate::domain::models::CommandAction;
use crate::domain::models::Event;
use crate::domain::models::LineKind;
use crate::domain::models::TerminalLine;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub const EFFECTS_INDICATOR: &str = "✦ Matrix & CRT effects enabled! Type \"effects\" to toggle";

pub struct AppStateProps {
    pub username: String,
    pub hostname: String,
    pub banner_name: String,
    pub effects_enabled: bool,
}

impl Default for AppStateProps {
    fn default() -> AppStateProps {
        return AppStateProps {
            username: "visitor".to_string(),
            hostname: "aman".to_string(),
            banner_name: "AMAN".to_string(),
            effects_enabled: true,
        };
    }
}

pub struct AppState<'a> {
    pub banner: Vec<String>,
    pub effects_enabled: bool,
    pub history: History,
    pub input: TextArea<'a>,
    pub input_focused: bool,
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub lines: Vec<TerminalLine>,
    pub prompt: String,
    pub rain: Rain,
    pub scroll: Scroll,
    pub show_welcome: bool,
    pub welcome: Vec<Typewriter>,
    next_seq: usize,
    processor: CommandProcessor,
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps, now: Instant) -> AppState<'a> {
        return AppState::with_rain(props, now, Rain::new(false));
    }

    pub fn with_rain(props: AppStateProps, now: Instant, mut rain: Rain) -> AppState<'a> {
        rain.set_enabled(props.effects_enabled);

        let mut app_state = AppState {
            banner: banner::ascii_art(&props.banner_name),
            effects_enabled: props.effects_enabled,
            history: History::default(),
            input: TextArea::default(),
            input_focused: true,
            last_known_height: 0,
            last_known_width: 0,
            lines: vec![],
            prompt: format!("{}@{}:~/ portfolio $", props.username, props.hostname),
            rain,
            scroll: Scroll::default(),
            show_welcome: true,
            welcome: banner::welcome_typewriters(now),
            next_seq: 0,
            processor: CommandProcessor::new(props.effects_enabled),
        };
        app_state.reset_input("");

        return app_state;
    }

    /// Applies one event. Returns true when the UI should exit.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::KeyboardCTRLC => {
                return true;
            }
            Event::KeyboardEnter => {
                self.set_focus(true);
                self.submit();
            }
            Event::KeyboardUp => {
                if self.input_focused {
                    self.recall_previous();
                } else {
                    self.scroll.up();
                }
            }
            Event::KeyboardDown => {
                if self.input_focused {
                    self.recall_next();
                } else {
                    self.scroll.down();
                }
            }
            Event::KeyboardEsc => {
                self.set_focus(false);
            }
            Event::KeyboardPaste(text) => {
                self.set_focus(true);
                self.paste(&text);
            }
            Event::UIFocusInput => {
                self.set_focus(true);
            }
            Event::KeyboardCharInput(input) => {
                self.set_focus(true);
                self.input.input(input);
            }
            Event::UIResize => {}
            Event::UITick => {
                self.tick(now);
            }
            Event::UIScrollDown => {
                self.scroll.down();
            }
            Event::UIScrollUp => {
                self.scroll.up();
            }
            Event::UIScrollPageDown => {
                self.scroll.down_page();
            }
            Event::UIScrollPageUp => {
                self.scroll.up_page();
            }
        }

        return false;
    }

    pub fn input_text(&self) -> String {
        return self.input.lines().join(" ");
    }

    pub fn submit(&mut self) {
        let command = self.input_text().trim().to_string();
        if command.is_empty() {
            return;
        }

        self.execute(&command);
        self.reset_input("");
    }

    pub fn execute(&mut self, command: &str) {
        self.history.push(command);
        self.push_line(LineKind::Input, &format!("{} {command}", self.prompt));

        let result = self.processor.process(command);
        tracing::info!(command, kind = ?result.kind, "command");

        match result.action {
            Some(CommandAction::Clear) => {
                self.lines.clear();
                self.show_welcome = false;
            }
            Some(CommandAction::SetEffects(enabled)) => {
                self.set_effects(enabled);
                self.push_line(result.kind, &result.output);
            }
            None => {
                self.push_line(result.kind, &result.output);
            }
        }

        self.sync_dependants();
        self.scroll.last();
    }

    /// The input is a single line, so only the first pasted line is kept.
    pub fn paste(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or_default();
        self.input.insert_str(line);
    }

    pub fn recall_previous(&mut self) {
        if let Some(text) = self.history.previous() {
            self.reset_input(&text);
        }
    }

    pub fn recall_next(&mut self) {
        if let Some(text) = self.history.next() {
            self.reset_input(&text);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.show_welcome {
            for typewriter in self.welcome.iter_mut() {
                typewriter.advance(now);
            }
        }
        self.rain.tick();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        self.rain.resize(rect);
        self.sync_dependants();
    }

    pub fn set_effects(&mut self, enabled: bool) {
        self.effects_enabled = enabled;
        self.rain.set_enabled(enabled);
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.input_focused = focused;
        self.input.set_cursor_style(Theme::cursor(focused));
    }

    /// Rows of the scrolling area: banner and welcome lines while shown,
    /// then the log wrapped to the last known width.
    pub fn rows(&self) -> Vec<Line<'static>> {
        let mut rows: Vec<Line<'static>> = vec![];

        if self.show_welcome {
            for art in &self.banner {
                rows.push(Line::styled(art.to_string(), Theme::banner()).centered());
            }
            rows.push(Line::default());
            for (idx, typewriter) in self.welcome.iter().enumerate() {
                rows.push(Line::styled(typewriter.frame(), Theme::welcome(idx)).centered());
            }
            rows.push(Line::default());
        }

        for line in &self.lines {
            for visual in renderer::render(&line.content, line.kind) {
                for wrapped in renderer::wrap(&visual, self.last_known_width) {
                    rows.push(Theme::line(&wrapped, line.kind));
                }
            }
        }

        return rows;
    }

    /// Rows available to the log; the last row belongs to the prompt.
    pub fn viewport_height(&self) -> usize {
        return self.last_known_height.saturating_sub(1);
    }

    fn push_line(&mut self, kind: LineKind, content: &str) {
        self.lines.push(TerminalLine::new(self.next_seq, kind, content));
        self.next_seq += 1;
    }

    fn reset_input(&mut self, text: &str) {
        let mut input = TextArea::new(vec![text.to_string()]);
        input.set_style(Theme::input());
        input.set_cursor_line_style(Theme::input());
        input.set_cursor_style(Theme::cursor(self.input_focused));
        input.move_cursor(CursorMove::End);
        self.input = input;
    }

    fn sync_dependants(&mut self) {
        let scrollbar_at_bottom = self.scroll.is_position_at_last();
        let rows = self.rows().len();
        self.scroll.set_state(rows, self.viewport_height());

        if scrollbar_at_bottom {
            self.scroll.last();
        }
    }
}
