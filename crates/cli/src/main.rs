use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use envelope_cli::cli_args::Args;
use envelope_cli::handlers::Session;
use envelope_cli::repl::Repl;
use envelope_cli::terminal::{Terminal, Theme};
use envelope_core::error::Result;
use envelope_core::config;
use envelope_core::settings::{self, Settings};
use log::debug;

fn load_settings(args: &Args) -> Result<Settings> {
    let settings_path = config::get_settings_path(args.settings_path.as_deref());
    debug!("Settings path: `{}`", settings_path);

    settings::load_settings(&settings_path)
}

fn build_theme(args: &Args, settings: &Settings) -> Result<Theme> {
    if args.no_color {
        return Ok(Theme::plain());
    }

    Theme::from_definition(&settings.theme)
}

/// Runs the shell. Returns whether a one-shot command succeeded.
fn execute(args: &Args) -> Result<bool> {
    let settings = load_settings(args)?;
    let theme = build_theme(args, &settings)?;
    let session = Session::from_settings(&settings, args.directory.as_deref());
    debug!("Env file directory: `{}`", session.directory().display());

    let terminal = Terminal::new(stdin().lock(), stdout(), theme);
    let mut repl = Repl::new(session, terminal, settings.clock);

    if args.is_one_shot() {
        return repl.execute_once(&args.command);
    }

    if settings.banner && !args.no_banner {
        repl.print_banner()?;
    }
    repl.run()?;

    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match execute(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
