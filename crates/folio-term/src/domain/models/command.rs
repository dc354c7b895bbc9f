use strum::Display;
use strum::EnumIter;
use strum::EnumString;

use super::LineKind;

/// Every command the portfolio understands. Parsing is exact, so callers
/// lower-case the verb first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Help,
    About,
    Skills,
    Resume,
    Goals,
    Projects,
    Socials,
    Experiences,
    Effects,
    Clear,
    Echo,
}

impl Verb {
    /// The canned text block for content verbs, `None` for verbs that act.
    pub fn text(&self) -> Option<&'static str> {
        let text = match self {
            Verb::Help => include_str!("../../../content/help.txt"),
            Verb::About => include_str!("../../../content/about.txt"),
            Verb::Skills => include_str!("../../../content/skills.txt"),
            Verb::Resume => include_str!("../../../content/resume.txt"),
            Verb::Goals => include_str!("../../../content/goals.txt"),
            Verb::Projects => include_str!("../../../content/projects.txt"),
            Verb::Socials => include_str!("../../../content/socials.txt"),
            Verb::Experiences => include_str!("../../../content/experiences.txt"),
            Verb::Effects | Verb::Clear | Verb::Echo => return None,
        };

        return Some(text.trim_end());
    }
}

/// Side effect the host UI has to apply after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandAction {
    Clear,
    SetEffects(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub kind: LineKind,
    pub action: Option<CommandAction>,
}

impl CommandResult {
    pub fn output(text: &str) -> CommandResult {
        return CommandResult {
            output: text.to_string(),
            kind: LineKind::Output,
            action: None,
        };
    }

    pub fn error(text: &str) -> CommandResult {
        return CommandResult {
            output: text.to_string(),
            kind: LineKind::Error,
            action: None,
        };
    }

    pub fn with_action(mut self, action: CommandAction) -> CommandResult {
        self.action = Some(action);
        return self;
    }
}
