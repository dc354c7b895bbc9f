#[cfg(test)]
#[path = "rain_test.rs"]
mod tests;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Widget;

// Half-width katakana and digits are all one column wide.
const GLYPHS: &[char] = &[
    'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ', 'ﾁ', 'ﾂ',
    'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ', 'ﾓ', 'ﾔ',
    'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ', 'ﾝ', '0', '1', '2', '3', '4', '5', '6', '7', '8',
    '9',
];

// Rain only falls in every other column so the trails stay readable.
const COLUMN_STRIDE: u16 = 2;
const MAX_PERIOD: u8 = 3;
const MIN_TRAIL: i32 = 4;

#[derive(Debug, Clone)]
struct Stream {
    head: i32,
    trail: i32,
    period: u8,
    counter: u8,
    glyphs: Vec<char>,
}

/// Falling-character background. Knows nothing about the terminal log; the
/// host only flips `enabled` and hands it the area to fill.
pub struct Rain {
    enabled: bool,
    area: Rect,
    streams: Vec<Stream>,
    rng: StdRng,
}

impl Rain {
    pub fn new(enabled: bool) -> Rain {
        return Rain::with_rng(enabled, StdRng::from_entropy());
    }

    pub fn with_seed(enabled: bool, seed: u64) -> Rain {
        return Rain::with_rng(enabled, StdRng::seed_from_u64(seed));
    }

    fn with_rng(enabled: bool, rng: StdRng) -> Rain {
        return Rain {
            enabled,
            area: Rect::default(),
            streams: vec![],
            rng,
        };
    }

    pub fn is_enabled(&self) -> bool {
        return self.enabled;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Re-seeds the streams whenever the drawable area changes size.
    pub fn resize(&mut self, area: Rect) {
        if area == self.area {
            return;
        }

        self.area = area;
        let count = area.width.div_ceil(COLUMN_STRIDE) as usize;
        let height = area.height as i32;
        let mut streams = Vec::with_capacity(count);
        for _ in 0..count {
            let mut stream = Stream {
                head: 0,
                trail: MIN_TRAIL,
                period: 1,
                counter: 0,
                glyphs: vec![' '; area.height as usize],
            };
            self.reset_stream(&mut stream);
            // Scatter the first frame so the screen does not fill top-down.
            stream.head = self.rng.gen_range(-height..=height);
            streams.push(stream);
        }
        self.streams = streams;
    }

    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }

        let height = self.area.height as i32;
        let mut streams = std::mem::take(&mut self.streams);
        for stream in streams.iter_mut() {
            stream.counter += 1;
            if stream.counter < stream.period {
                continue;
            }
            stream.counter = 0;
            stream.head += 1;

            if stream.head - stream.trail > height {
                self.reset_stream(stream);
                continue;
            }

            if !stream.glyphs.is_empty() && self.rng.gen_bool(0.2) {
                let idx = self.rng.gen_range(0..stream.glyphs.len());
                stream.glyphs[idx] = self.random_glyph();
            }
        }
        self.streams = streams;
    }

    fn reset_stream(&mut self, stream: &mut Stream) {
        let height = self.area.height as i32;
        stream.trail = self.rng.gen_range(MIN_TRAIL..=MIN_TRAIL + height / 2);
        stream.head = -self.rng.gen_range(0..=height.max(1));
        stream.period = self.rng.gen_range(1..=MAX_PERIOD);
        stream.counter = 0;
        for glyph in stream.glyphs.iter_mut() {
            *glyph = GLYPHS[self.rng.gen_range(0..GLYPHS.len())];
        }
    }

    fn random_glyph(&mut self) -> char {
        return GLYPHS[self.rng.gen_range(0..GLYPHS.len())];
    }

    fn cell_style(distance: i32, trail: i32, row: u16) -> Style {
        let mut style = if distance == 0 {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if distance < trail / 3 {
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else if distance < trail * 2 / 3 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        // CRT scanlines.
        if row % 2 == 1 {
            style = style.add_modifier(Modifier::DIM);
        }

        return style;
    }
}

impl Widget for &Rain {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.enabled {
            return;
        }

        let area = area.intersection(self.area).intersection(buf.area);
        for (idx, stream) in self.streams.iter().enumerate() {
            let x = self.area.x + idx as u16 * COLUMN_STRIDE;
            if x < area.left() || x >= area.right() {
                continue;
            }

            for row in 0..area.height {
                let y = area.y + row;
                let offset = (y - self.area.y) as i32;
                let distance = stream.head - offset;
                if distance < 0 || distance >= stream.trail {
                    continue;
                }

                let glyph = stream.glyphs.get(offset as usize).copied().unwrap_or(' ');
                buf[(x, y)]
                    .set_char(glyph)
                    .set_style(Rain::cell_style(distance, stream.trail, row));
            }
        }
    }
}
