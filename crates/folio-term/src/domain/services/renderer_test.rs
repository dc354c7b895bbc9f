use super::*;
use crate::domain::models::Verb;

fn styles(line: &VisualLine) -> Vec<FragmentStyle> {
    return line.fragments.iter().map(|f| f.style).collect();
}

#[test]
fn it_splits_lines() {
    let rows = render("one\n\nthree", LineKind::Output);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], VisualLine::plain("one"));
    assert_eq!(rows[1], VisualLine::plain(" "));
    assert_eq!(rows[2], VisualLine::plain("three"));
}

#[test]
fn it_renders_prompt_two_tone() {
    let line = render_line("visitor@aman:~/ portfolio $ help", LineKind::Input);
    assert_eq!(
        line.fragments,
        vec![
            Fragment::new(FragmentStyle::Prompt, "visitor@aman:~/ portfolio $"),
            Fragment::new(FragmentStyle::Command, " help"),
        ]
    );
}

#[test]
fn it_keeps_text_after_second_delimiter() {
    let line = render_line("guest@host $ echo $home", LineKind::Input);
    assert_eq!(line.fragments[1].text, " echo $home");
}

#[test]
fn it_ignores_delimiter_on_output() {
    let line = render_line("costs $5", LineKind::Output);
    assert_eq!(styles(&line), vec![FragmentStyle::Text]);
}

#[test]
fn it_renders_headings() {
    assert_eq!(
        styles(&render_line("Available Commands:", LineKind::Output)),
        vec![FragmentStyle::Heading]
    );
    assert_eq!(
        styles(&render_line("🎯 Short-term Goals (2025):", LineKind::Output)),
        vec![FragmentStyle::Heading]
    );
    assert_eq!(
        styles(&render_line("  indented:", LineKind::Output)),
        vec![FragmentStyle::Text]
    );
}

#[test]
fn it_renders_list_items() {
    let line = render_line(
        "about      - Display information about me",
        LineKind::Output,
    );
    assert_eq!(
        line.fragments,
        vec![
            Fragment::new(FragmentStyle::Label, "about     "),
            Fragment::new(FragmentStyle::Description, " - Display information about me"),
        ]
    );
}

#[test]
fn it_leaves_bracketed_items_plain() {
    let line = render_line("echo [text] - Display a line of text", LineKind::Output);
    assert_eq!(styles(&line), vec![FragmentStyle::Text]);
}

#[test]
fn it_renders_bars() {
    let line = render_line("  • Python                ██████████   85%", LineKind::Output);
    assert_eq!(
        line.fragments,
        vec![
            Fragment::new(FragmentStyle::BarLabel, "  • Python                "),
            Fragment::new(FragmentStyle::Bar, "██████████"),
            Fragment::new(FragmentStyle::BarValue, "   85%"),
        ]
    );
}

#[test]
fn it_renders_bare_bar() {
    let line = render_line("███", LineKind::Output);
    assert_eq!(line.fragments, vec![Fragment::new(FragmentStyle::Bar, "███")]);
}

#[test]
fn it_renders_links() {
    let line = render_line(
        "  • GitHub:      https://github.com/aman and https://aman.dev",
        LineKind::Output,
    );
    assert_eq!(
        line.fragments,
        vec![
            Fragment::new(FragmentStyle::Text, "  • GitHub:      "),
            Fragment::new(FragmentStyle::Link, "https://github.com/aman"),
            Fragment::new(FragmentStyle::Text, " and "),
            Fragment::new(FragmentStyle::Link, "https://aman.dev"),
        ]
    );
}

#[test]
fn it_does_not_treat_link_lines_as_headings() {
    let line = render_line("Online Version: https://aman-portfolio.dev/resume", LineKind::Output);
    assert_eq!(styles(&line), vec![FragmentStyle::Text, FragmentStyle::Link]);
}

#[test]
fn it_renders_every_skill_row_as_bar() {
    let skills = Verb::Skills.text().unwrap();
    let bars = render(skills, LineKind::Output)
        .into_iter()
        .filter(|row| styles(row).contains(&FragmentStyle::Bar))
        .count();
    assert_eq!(bars, 16);
}

#[test]
fn it_preserves_text() {
    let help = Verb::Help.text().unwrap();
    let joined = render(help, LineKind::Output)
        .iter()
        .map(|row| row.text())
        .collect::<Vec<String>>()
        .join("\n");
    assert_eq!(joined.replace("\n \n", "\n\n"), help);
}

#[test]
fn it_wraps_by_width() {
    let line = VisualLine::new(vec![
        Fragment::new(FragmentStyle::Label, "abcd"),
        Fragment::new(FragmentStyle::Description, "efgh"),
    ]);

    let rows = wrap(&line, 3);
    let texts = rows.iter().map(|row| row.text()).collect::<Vec<String>>();
    assert_eq!(texts, vec!["abc", "def", "gh"]);
    assert_eq!(
        rows[1].fragments,
        vec![
            Fragment::new(FragmentStyle::Label, "d"),
            Fragment::new(FragmentStyle::Description, "ef"),
        ]
    );
}

#[test]
fn it_does_not_wrap_short_lines() {
    let line = VisualLine::plain("short");
    assert_eq!(wrap(&line, 80), vec![line.clone()]);
    assert_eq!(wrap(&line, 0), vec![line]);
}

#[test]
fn it_wraps_wide_glyphs() {
    let line = VisualLine::plain("🚀🚀🚀");
    let rows = wrap(&line, 4);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].width(), 4);
}

#[test]
fn it_only_styles_known_headings() {
    assert_eq!(
        styles(&render_line("note:", LineKind::Output)),
        vec![FragmentStyle::Text]
    );
    assert_eq!(
        styles(&render_line("Technical Skills:", LineKind::Output)),
        vec![FragmentStyle::Heading]
    );
}
