use anyhow::Result;
use folio_term::application::cli;
use folio_term::application::ui;
use folio_term::destruct_terminal_for_panic;
use folio_term::Config;

mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            cli::print_completions(subcmd_matches);
            return Ok(());
        }
        Some(("config", subcmd_matches)) => {
            if let Some(("default", _)) = subcmd_matches.subcommand() {
                println!("{}", Config::serialize_default(cli::build()));
            }
            return Ok(());
        }
        _ => {}
    }

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("info");
    let logging_guard = logging::init(level);

    Config::load(cli::build(), vec![&matches]).await?;
    let tick_rate = Config::frame_rate()?;

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        tracing::error!(panic = %panic_info, "panic");
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let result = ui::start(Config::app_state_props(), tick_rate).await;
    if let Err(err) = &result {
        destruct_terminal_for_panic();
        tracing::error!(error = %err, "ui exited with error");
    }

    if let Some(guard) = &logging_guard {
        tracing::debug!(log_dir = %guard.log_dir().display(), "shutting down");
    }

    return result;
}
