#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::FragmentStyle;
use crate::domain::models::LineKind;
use crate::domain::models::VisualLine;

/// Green-on-black palette of the portfolio terminal.
pub struct Theme {}

impl Theme {
    pub fn base(kind: LineKind) -> Style {
        let color = match kind {
            LineKind::Input => Color::Green,
            LineKind::Output => Color::LightGreen,
            LineKind::Error => Color::LightRed,
        };

        return Style::default().fg(color);
    }

    pub fn fragment(style: FragmentStyle, kind: LineKind) -> Style {
        return match style {
            FragmentStyle::Prompt => Style::default().fg(Color::Green),
            FragmentStyle::Command => Style::default().fg(Color::Cyan),
            FragmentStyle::Heading => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            FragmentStyle::Label => Style::default().fg(Color::Yellow),
            FragmentStyle::Description => Style::default().fg(Color::Gray),
            FragmentStyle::BarLabel => Style::default().fg(Color::Cyan),
            FragmentStyle::Bar => Style::default().fg(Color::Green),
            FragmentStyle::BarValue => Style::default().fg(Color::Gray),
            FragmentStyle::Link => Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            FragmentStyle::Text => Theme::base(kind),
        };
    }

    pub fn line(visual: &VisualLine, kind: LineKind) -> Line<'static> {
        let spans = visual
            .fragments
            .iter()
            .map(|fragment| Span::styled(fragment.text.clone(), Theme::fragment(fragment.style, kind)))
            .collect::<Vec<Span>>();

        return Line::from(spans);
    }

    pub fn banner() -> Style {
        return Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
    }

    /// Styles of the four welcome lines, top to bottom.
    pub fn welcome(idx: usize) -> Style {
        return match idx {
            0 => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            1 => Style::default().fg(Color::LightGreen),
            2 => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::DarkGray),
        };
    }

    pub fn indicator() -> Style {
        return Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::SLOW_BLINK);
    }

    pub fn input() -> Style {
        return Style::default().fg(Color::Green);
    }

    pub fn cursor(focused: bool) -> Style {
        if focused {
            return Style::default().bg(Color::Green).add_modifier(Modifier::SLOW_BLINK);
        }

        return Style::default();
    }
}
