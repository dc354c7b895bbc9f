#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;

use std::str::FromStr;

use crate::domain::models::CommandAction;
use crate::domain::models::CommandResult;
use crate::domain::models::Verb;

pub fn not_found_text(verb: &str) -> String {
    return format!("Command not found: {verb}. Type 'help' for available commands.");
}

pub fn effects_text(enabled: bool) -> String {
    let state = if enabled { "enabled" } else { "disabled" };
    return format!("Matrix/CRT effects {state}.");
}

/// Maps a submitted command line onto the fixed verb table.
pub struct CommandProcessor {
    effects_enabled: bool,
}

impl CommandProcessor {
    pub fn new(effects_enabled: bool) -> CommandProcessor {
        return CommandProcessor { effects_enabled };
    }

    pub fn effects_enabled(&self) -> bool {
        return self.effects_enabled;
    }

    pub fn process(&mut self, command: &str) -> CommandResult {
        let normalized = command.to_lowercase();
        let mut tokens = normalized.split_whitespace();
        let verb_str = tokens.next().unwrap_or_default();
        let args = tokens.collect::<Vec<&str>>();

        let verb = match Verb::from_str(verb_str) {
            Ok(verb) => verb,
            Err(_) => {
                tracing::debug!(verb = verb_str, "unknown verb");
                return CommandResult::error(&not_found_text(verb_str));
            }
        };

        tracing::debug!(verb = %verb, args = args.len(), "dispatch");

        return match verb {
            Verb::Echo => CommandResult::output(&args.join(" ")),
            Verb::Clear => CommandResult::output("").with_action(CommandAction::Clear),
            Verb::Effects => {
                self.effects_enabled = !self.effects_enabled;
                CommandResult::output(&effects_text(self.effects_enabled))
                    .with_action(CommandAction::SetEffects(self.effects_enabled))
            }
            _ => CommandResult::output(verb.text().unwrap_or_default()),
        };
    }
}
