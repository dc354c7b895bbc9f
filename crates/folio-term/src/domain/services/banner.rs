#[cfg(test)]
#[path = "banner_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use super::Typewriter;

const AMAN: &str = r#"
 █████╗ ███╗   ███╗ █████╗ ███╗   ██╗
██╔══██╗████╗ ████║██╔══██╗████╗  ██║
███████║██╔████╔██║███████║██╔██╗ ██║
██╔══██║██║╚██╔╝██║██╔══██║██║╚██╗██║
██║  ██║██║ ╚═╝ ██║██║  ██║██║ ╚████║
╚═╝  ╚═╝╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝
"#;

const LETTER_GAP: &str = "  ";

fn letter(c: char) -> [&'static str; 5] {
    return match c {
        'A' => ["  ██  ", " ████ ", "██  ██", "██████", "██  ██"],
        'M' => ["██  ██", "██████", "██████", "██  ██", "██  ██"],
        'N' => ["██  ██", "███ ██", "██████", "██ ███", "██  ██"],
        _ => ["██████", "██    ", "██████", "██    ", "██████"],
    };
}

/// ASCII art rows for the owner's name.
pub fn ascii_art(name: &str) -> Vec<String> {
    let upper = name.trim().to_uppercase();
    if upper == "AMAN" {
        return AMAN.trim_matches('\n').lines().map(String::from).collect();
    }

    let letters = upper.chars().map(letter).collect::<Vec<[&str; 5]>>();
    if letters.is_empty() {
        return vec![];
    }

    return (0..5)
        .map(|row| {
            letters
                .iter()
                .map(|glyph| glyph[row])
                .collect::<Vec<&str>>()
                .join(LETTER_GAP)
        })
        .collect();
}

pub struct WelcomeLine {
    pub text: &'static str,
    pub speed_ms: u64,
    pub delay_ms: u64,
}

pub const WELCOME_LINES: [WelcomeLine; 4] = [
    WelcomeLine {
        text: "Welcome to my Portfolio.",
        speed_ms: 50,
        delay_ms: 0,
    },
    WelcomeLine {
        text: "Use ↑ and ↓ to navigate command history.",
        speed_ms: 30,
        delay_ms: 1500,
    },
    WelcomeLine {
        text: "Type 'help' for more commands.",
        speed_ms: 30,
        delay_ms: 3000,
    },
    WelcomeLine {
        text: "Note: Commands are case-sensitive. Please use lowercase only.",
        speed_ms: 20,
        delay_ms: 4500,
    },
];

/// One typewriter per welcome line, all timed from `now`.
pub fn welcome_typewriters(now: Instant) -> Vec<Typewriter> {
    return WELCOME_LINES
        .iter()
        .map(|line| {
            Typewriter::new(
                line.text,
                Duration::from_millis(line.speed_ms),
                Duration::from_millis(line.delay_ms),
                now,
            )
        })
        .collect();
}
