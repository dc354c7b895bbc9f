#[cfg(test)]
#[path = "typewriter_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

pub const CURSOR_GLYPH: &str = "_";

/// Reveals a fixed string one character per `speed`, starting `delay` after
/// creation.
///
/// Both timers are deadlines checked in [`Typewriter::advance`], so a late
/// tick catches up on every character that became due in the meantime.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    speed: Duration,
    delay: Duration,
    start_at: Instant,
    next_char_at: Option<Instant>,
    revealed: usize,
    revealed_bytes: usize,
}

impl Typewriter {
    pub fn new(text: &str, speed: Duration, delay: Duration, now: Instant) -> Typewriter {
        return Typewriter {
            text: text.to_string(),
            speed,
            delay,
            start_at: now + delay,
            next_char_at: None,
            revealed: 0,
            revealed_bytes: 0,
        };
    }

    /// Swaps the target string and starts over, delay included.
    pub fn restart(&mut self, text: &str, now: Instant) {
        *self = Typewriter::new(text, self.speed, self.delay, now);
    }

    pub fn advance(&mut self, now: Instant) {
        if self.next_char_at.is_none() {
            if now < self.start_at {
                return;
            }
            self.next_char_at = Some(self.start_at + self.speed);
        }

        while let Some(deadline) = self.next_char_at {
            if self.is_complete() || now < deadline {
                break;
            }

            if let Some(c) = self.text[self.revealed_bytes..].chars().next() {
                self.revealed += 1;
                self.revealed_bytes += c.len_utf8();
            }
            self.next_char_at = Some(deadline + self.speed);
        }
    }

    pub fn is_started(&self) -> bool {
        return self.next_char_at.is_some();
    }

    pub fn is_complete(&self) -> bool {
        return self.revealed_bytes >= self.text.len();
    }

    pub fn revealed(&self) -> usize {
        return self.revealed;
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn displayed(&self) -> &str {
        return &self.text[..self.revealed_bytes];
    }

    pub fn show_cursor(&self) -> bool {
        return self.is_started() && !self.is_complete();
    }

    /// The partial text followed by the cursor glyph while revealing.
    pub fn frame(&self) -> String {
        if self.show_cursor() {
            return format!("{}{}", self.displayed(), CURSOR_GLYPH);
        }

        return self.displayed().to_string();
    }
}
