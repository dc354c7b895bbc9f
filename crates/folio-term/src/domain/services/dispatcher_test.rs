use strum::IntoEnumIterator;

use super::*;
use crate::domain::models::LineKind;

#[test]
fn it_returns_static_text_for_content_verbs() {
    let mut processor = CommandProcessor::new(true);

    for verb in Verb::iter() {
        let Some(text) = verb.text() else {
            continue;
        };

        let res = processor.process(&verb.to_string());
        assert_eq!(res.output, text, "verb {verb}");
        assert_eq!(res.kind, LineKind::Output);
        assert_eq!(res.action, None);
    }
}

#[test]
fn it_has_text_for_every_verb_but_actions() {
    let without_text = Verb::iter()
        .filter(|verb| verb.text().is_none())
        .collect::<Vec<Verb>>();

    assert_eq!(without_text, vec![Verb::Effects, Verb::Clear, Verb::Echo]);
    assert!(Verb::Help.text().unwrap().starts_with("Available Commands:"));
}

#[test]
fn it_reports_unknown_verbs() {
    let mut processor = CommandProcessor::new(true);

    for unknown in ["ls", "sudo", "helpme", "rm -rf /"] {
        let res = processor.process(unknown);
        let verb = unknown.split_whitespace().next().unwrap();
        assert_eq!(res.kind, LineKind::Error);
        assert!(res.output.contains(verb));
        assert!(res.output.contains("'help'"));
        assert_eq!(res.action, None);
    }
}

#[test]
fn it_formats_not_found() {
    let mut processor = CommandProcessor::new(true);
    let res = processor.process("whoami");
    insta::assert_snapshot!(res.output, @"Command not found: whoami. Type 'help' for available commands.");
}

#[test]
fn it_echoes_arguments() {
    let mut processor = CommandProcessor::new(true);
    assert_eq!(processor.process("echo a b c").output, "a b c");
    assert_eq!(processor.process("echo   a   b").output, "a b");
    assert_eq!(processor.process("echo").output, "");
}

#[test]
fn it_lower_cases_before_dispatch() {
    let mut processor = CommandProcessor::new(true);

    let res = processor.process("HELP");
    assert_eq!(res.kind, LineKind::Output);
    assert_eq!(res.output, Verb::Help.text().unwrap());

    assert_eq!(processor.process("ECHO Hello World").output, "hello world");
}

#[test]
fn it_signals_clear() {
    let mut processor = CommandProcessor::new(true);
    let res = processor.process("clear");
    assert_eq!(res.action, Some(CommandAction::Clear));
    assert_eq!(res.output, "");
    assert_eq!(res.kind, LineKind::Output);
}

#[test]
fn it_toggles_effects() {
    let mut processor = CommandProcessor::new(true);

    let first = processor.process("effects");
    assert_eq!(first.output, "Matrix/CRT effects disabled.");
    assert_eq!(first.action, Some(CommandAction::SetEffects(false)));
    assert!(!processor.effects_enabled());

    let second = processor.process("effects");
    assert_eq!(second.output, "Matrix/CRT effects enabled.");
    assert_eq!(second.action, Some(CommandAction::SetEffects(true)));
    assert!(processor.effects_enabled());
}

#[test]
fn it_toggles_from_disabled() {
    let mut processor = CommandProcessor::new(false);
    assert_eq!(
        processor.process("effects").action,
        Some(CommandAction::SetEffects(true))
    );
}
