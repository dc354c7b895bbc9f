#[cfg(test)]
#[path = "renderer_test.rs"]
mod tests;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthChar;

use crate::domain::models::Fragment;
use crate::domain::models::FragmentStyle;
use crate::domain::models::LineKind;
use crate::domain::models::Verb;
use crate::domain::models::VisualLine;

const PROMPT_DELIMITER: char = '$';
const HEADING_MARKER: &str = "Available Commands:";
const BAR_GLYPH: char = '█';

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+\s+-").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

// Section titles of the bundled text blocks: unindented lines ending in ':'.
static HEADINGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    return Verb::iter()
        .filter_map(|verb| verb.text())
        .flat_map(|text| text.lines())
        .filter(|line| !line.starts_with(char::is_whitespace) && !URL.is_match(line))
        .map(|line| line.trim_end())
        .filter(|line| line.ends_with(':'))
        .collect();
});

/// Turns a text block into styled rows, one per source line.
pub fn render(content: &str, kind: LineKind) -> Vec<VisualLine> {
    return content
        .split('\n')
        .map(|line| render_line(line, kind))
        .collect();
}

pub fn render_line(line: &str, kind: LineKind) -> VisualLine {
    if line.is_empty() {
        // Keeps blank rows from collapsing.
        return VisualLine::plain(" ");
    }

    if kind == LineKind::Input {
        if let Some(idx) = line.find(PROMPT_DELIMITER) {
            let (prompt, command) = line.split_at(idx + PROMPT_DELIMITER.len_utf8());
            return VisualLine::new(vec![
                Fragment::new(FragmentStyle::Prompt, prompt),
                Fragment::new(FragmentStyle::Command, command),
            ]);
        }
    }

    if is_heading(line) {
        return VisualLine::new(vec![Fragment::new(FragmentStyle::Heading, line)]);
    }

    if LIST_ITEM.is_match(line.trim()) {
        if let Some((label, description)) = line.split_once(" - ") {
            return VisualLine::new(vec![
                Fragment::new(FragmentStyle::Label, label),
                Fragment::new(FragmentStyle::Description, &format!(" - {description}")),
            ]);
        }
    }

    if line.contains(BAR_GLYPH) {
        return render_bar(line);
    }

    if URL.is_match(line) {
        return render_links(line);
    }

    return VisualLine::plain(line);
}

fn is_heading(line: &str) -> bool {
    if line.contains(HEADING_MARKER) {
        return true;
    }

    return HEADINGS.contains(line.trim_end());
}

fn render_bar(line: &str) -> VisualLine {
    let first = line.find(BAR_GLYPH).unwrap_or_default();
    let last = line.rfind(BAR_GLYPH).unwrap_or_default();
    let count = line.chars().filter(|c| *c == BAR_GLYPH).count();

    let before = &line[..first];
    let after = &line[last + BAR_GLYPH.len_utf8()..];
    let bar = BAR_GLYPH.to_string().repeat(count);

    let mut fragments = vec![];
    if !before.is_empty() {
        fragments.push(Fragment::new(FragmentStyle::BarLabel, before));
    }
    fragments.push(Fragment::new(FragmentStyle::Bar, &bar));
    if !after.is_empty() {
        fragments.push(Fragment::new(FragmentStyle::BarValue, after));
    }

    return VisualLine::new(fragments);
}

fn render_links(line: &str) -> VisualLine {
    let mut fragments = vec![];
    let mut cursor = 0;

    for url in URL.find_iter(line) {
        if url.start() > cursor {
            fragments.push(Fragment::new(
                FragmentStyle::Text,
                &line[cursor..url.start()],
            ));
        }
        fragments.push(Fragment::new(FragmentStyle::Link, url.as_str()));
        cursor = url.end();
    }

    if cursor < line.len() {
        fragments.push(Fragment::new(FragmentStyle::Text, &line[cursor..]));
    }

    return VisualLine::new(fragments);
}

/// Breaks a row into rows no wider than `width` columns, keeping each
/// fragment's style across the break.
pub fn wrap(line: &VisualLine, width: usize) -> Vec<VisualLine> {
    if width == 0 || line.width() <= width {
        return vec![line.clone()];
    }

    let mut rows: Vec<VisualLine> = vec![];
    let mut current = VisualLine::default();
    let mut current_width = 0;

    for fragment in &line.fragments {
        let mut chunk = String::new();
        for c in fragment.text.chars() {
            let cw = c.width().unwrap_or(0);
            if current_width + cw > width && current_width > 0 {
                if !chunk.is_empty() {
                    current
                        .fragments
                        .push(Fragment::new(fragment.style, &chunk));
                    chunk.clear();
                }
                rows.push(current);
                current = VisualLine::default();
                current_width = 0;
            }
            chunk.push(c);
            current_width += cw;
        }

        if !chunk.is_empty() {
            current.fragments.push(Fragment::new(fragment.style, &chunk));
        }
    }

    if !current.fragments.is_empty() {
        rows.push(current);
    }

    return rows;
}
