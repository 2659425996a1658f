//! Command-line argument parsing.
//!
//! The options configure the shell. Anything after them is a single shell command
//! run once instead of starting the interactive loop.

use clap::Parser;

/// Command-line arguments for the `envelope` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use envelope_cli::cli_args::Args;
///
/// let args = Args::parse_from(["envelope", "--no-banner", "read", "db"]);
/// assert!(args.no_banner);
/// assert_eq!(args.command, vec!["read", "db"]);
/// ```
#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.envelope/settings.yml`.
    #[arg(long, short = 'c')]
    pub settings_path: Option<String>,

    /// Directory holding the env files. Overrides the settings file.
    ///
    /// If neither is given, file names are resolved against the working directory.
    #[arg(long, short = 'd')]
    pub directory: Option<String>,

    /// Do not print the banner when the shell starts.
    #[arg(long, action)]
    pub no_banner: bool,

    /// Print without colors.
    #[arg(long, action)]
    pub no_color: bool,

    /// A shell command to run once, e.g. `read db` or `get db HOST`.
    ///
    /// Flags of the command itself (`-var`, `-s`, `-v`, `-p`) are passed through.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Whether a one-shot command was given on the command line.
    #[must_use]
    pub fn is_one_shot(&self) -> bool {
        !self.command.is_empty()
    }
}
