//! CLI entry point for tsm.

mod cli;

use clap::Parser;
use tracing::info;
use tsm::build_info::cli_version_text;
use tsm::chooser::ChooserState;
use tsm::config::{load_config_with_source, Config};
use tsm::error::AppError;
use tsm::logging;
use tsm::session::{ExitReason, SessionListState};
use tsm::tmux::{ClientContext, TmuxBackend};
use tsm::tui;

fn main() {
    let args = cli::Args::parse();

    if args.version || matches!(args.command, Some(cli::Command::Version)) {
        println!("{}", cli_version_text());
        return;
    }

    // Before config is known, only the flag and NO_COLOR decide color.
    let early_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tui::print_error(&AppError::from(e).to_string(), early_color);
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    if args.no_color {
        config.display.color = false;
    }

    match logging::init(&config.log) {
        Ok(Some(path)) => info!(
            log = %path.display(),
            source = %loaded.source,
            "tsm {} starting",
            tsm::build_info::VERSION
        ),
        Ok(None) => {}
        Err(e) => eprintln!("warning: failed to open log file: {e}"),
    }

    if let Err(e) = run(args.command.as_ref(), &config) {
        tui::print_error(&e.to_string(), config.display.color);
        std::process::exit(1);
    }
}

fn run(command: Option<&cli::Command>, config: &Config) -> Result<(), AppError> {
    let mut backend = TmuxBackend::from_config(&config.tmux);
    let color = config.display.color;
    let max_name_len = config.input.max_name_len;

    let reason = match command {
        Some(cli::Command::Sessions) => {
            let mut state = SessionListState::load(&mut backend, max_name_len)?;
            tui::run(&mut state, &mut backend, color)?
        }
        _ => {
            let mut state = ChooserState::new(max_name_len);
            tui::run(&mut state, &mut backend, color)?
        }
    };

    // Outside tmux the switch only validated the target; attach now that
    // the terminal is ours again.
    if let ExitReason::Switched { session } = reason {
        if backend.client() == ClientContext::Detached {
            backend.attach_session(&session)?;
        }
    }
    Ok(())
}
