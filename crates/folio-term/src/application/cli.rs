#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Shell;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("FOLIO_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_effects() -> Arg {
    return Arg::new(ConfigKey::Effects.to_string())
        .short('e')
        .long(ConfigKey::Effects.to_string())
        .env("FOLIO_EFFECTS")
        .num_args(1)
        .value_parser(["true", "false"])
        .help(format!(
            "Start with the matrix rain and CRT effects on. [default: {}]",
            Config::default(ConfigKey::Effects)
        ));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("FOLIO_USERNAME")
        .num_args(1)
        .help(format!(
            "User shown in the prompt. [default: {}]",
            Config::default(ConfigKey::Username)
        ));
}

fn arg_hostname() -> Arg {
    return Arg::new(ConfigKey::Hostname.to_string())
        .long(ConfigKey::Hostname.to_string())
        .env("FOLIO_HOSTNAME")
        .num_args(1)
        .help(format!(
            "Host shown in the prompt. [default: {}]",
            Config::default(ConfigKey::Hostname)
        ));
}

fn arg_banner_name() -> Arg {
    return Arg::new(ConfigKey::BannerName.to_string())
        .short('b')
        .long(ConfigKey::BannerName.to_string())
        .env("FOLIO_BANNER_NAME")
        .num_args(1)
        .help(format!(
            "Name drawn as ASCII art above the welcome text. [default: {}]",
            Config::default(ConfigKey::BannerName)
        ));
}

fn arg_frame_rate() -> Arg {
    return Arg::new(ConfigKey::FrameRate.to_string())
        .long(ConfigKey::FrameRate.to_string())
        .env("FOLIO_FRAME_RATE")
        .num_args(1)
        .help(format!(
            "Milliseconds between animation frames, from 10 to 1000. [default: {}]",
            Config::default(ConfigKey::FrameRate)
        ));
}

fn arg_log_level() -> Arg {
    return Arg::new("log-level")
        .long("log-level")
        .env("FOLIO_LOG_LEVEL")
        .num_args(1)
        .default_value("info")
        .value_parser(["error", "warn", "info", "debug", "trace"])
        .help("Level written to folio.log in the cache directory.");
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(Command::new("default").about("Outputs the default configuration file."))
        .arg_required_else_help(true);
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("folio")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_config_file())
        .arg(arg_effects())
        .arg(arg_username())
        .arg(arg_hostname())
        .arg(arg_banner_name())
        .arg(arg_frame_rate())
        .arg(arg_log_level());
}

/// Writes completions for the shell named in `completions --shell`.
pub fn print_completions(matches: &ArgMatches) {
    if let Some(shell) = matches.get_one::<Shell>("shell").copied() {
        let mut cmd = build();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
    }
}
