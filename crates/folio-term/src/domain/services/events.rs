#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    ticker: time::Interval,
}

impl EventsService {
    pub fn new(tick_rate: Duration) -> EventsService {
        let mut ticker = time::interval(tick_rate);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        return EventsService {
            crossterm_events: EventStream::new(),
            ticker,
        };
    }

    pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp);
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown);
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    return Some(Event::UIFocusInput);
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            // The next draw reads the new size from the frame.
            CrosstermEvent::Resize(_, _) => {
                return Some(Event::UIResize);
            }
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let key = match keyevent.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    KeyCode::Up => Key::Up,
                    KeyCode::Down => Key::Down,
                    KeyCode::Home => Key::Home,
                    KeyCode::End => Key::End,
                    KeyCode::PageUp => Key::PageUp,
                    KeyCode::PageDown => Key::PageDown,
                    KeyCode::Delete => Key::Delete,
                    KeyCode::Backspace => Key::Backspace,
                    KeyCode::Esc => Key::Esc,
                    _ => return None,
                };

                let input = Input {
                    key,
                    ctrl: keyevent.modifiers.contains(KeyModifiers::CONTROL),
                    alt: keyevent.modifiers.contains(KeyModifiers::ALT),
                    shift: keyevent.modifiers.contains(KeyModifiers::SHIFT),
                };
                match input {
                    Input { key: Key::Up, .. } => {
                        return Some(Event::KeyboardUp);
                    }
                    Input { key: Key::Down, .. } => {
                        return Some(Event::KeyboardDown);
                    }
                    Input {
                        key: Key::PageDown, ..
                    } => {
                        return Some(Event::UIScrollPageDown);
                    }
                    Input {
                        key: Key::PageUp, ..
                    } => {
                        return Some(Event::UIScrollPageUp);
                    }
                    Input {
                        key: Key::Char('d'),
                        ctrl: true,
                        ..
                    } => {
                        return Some(Event::UIScrollPageDown);
                    }
                    Input {
                        key: Key::Char('u'),
                        ctrl: true,
                        ..
                    } => {
                        return Some(Event::UIScrollPageUp);
                    }
                    Input {
                        key: Key::Char('c'),
                        ctrl: true,
                        ..
                    } => {
                        return Some(Event::KeyboardCTRLC);
                    }
                    // The input is a single line, so the textarea's newline
                    // shortcuts are swallowed here.
                    Input {
                        key: Key::Char('m') | Key::Char('j'),
                        ctrl: true,
                        ..
                    } => {
                        return None;
                    }
                    Input {
                        key: Key::Enter, ..
                    } => {
                        return Some(Event::KeyboardEnter);
                    }
                    Input { key: Key::Esc, .. } => {
                        return Some(Event::KeyboardEsc);
                    }
                    input => {
                        return Some(Event::KeyboardCharInput(input));
                    }
                }
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => EventsService::handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                        None
                    }
                    None => None
                },
                _ = self.ticker.tick() => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
