#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use clap::{CommandFactory, Parser, Subcommand};
use issuedash_core::config::{ConfigError, load_config};
use issuedash_core::error::ErrorCode;
use issuedash_core::seed;
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "issuedash: filter and sort a small issue list in the terminal",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format for non-interactive commands.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Derive the output mode from flags, `FORMAT`, and the terminal.
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Open the interactive dashboard",
        long_about = "Open the interactive dashboard. This is the default when no subcommand is given.",
        after_help = "EXAMPLES:\n    # Start with open high-priority issues\n    idash tui --open-only --priority high\n\n    # Start with a search\n    idash tui --query token"
    )]
    Tui(cmd::tui::TuiArgs),

    #[command(
        about = "Print the filtered issue list",
        long_about = "Apply the view filters once and print the resulting issue list.",
        after_help = "EXAMPLES:\n    # Lowest priority first\n    idash list --sort asc\n\n    # Emit machine-readable output\n    idash list --priority medium --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    idash completions bash > ~/.local/share/bash-completion/completions/idash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ISSUEDASH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "issuedash_core=debug,idash=debug,info"
        } else {
            "issuedash_core=info,idash=info,warn"
        })
    });

    let format = env::var("ISSUEDASH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Pick the error code that best describes a failed command.
fn classify(err: &anyhow::Error) -> ErrorCode {
    if let Some(config) = err.downcast_ref::<ConfigError>() {
        config.error_code()
    } else if err.is::<cmd::tui::NoTerminal>() {
        ErrorCode::TerminalUnavailable
    } else {
        ErrorCode::InternalUnexpected
    }
}

fn run(cli: Cli, output: OutputMode) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");
    let base = config.view.to_view_state();
    let issues = seed::issues();

    match cli.command {
        None => cmd::tui::run_tui(&cmd::tui::TuiArgs::default(), base, &config.ui, issues),
        Some(Commands::Tui(ref args)) => cmd::tui::run_tui(args, base, &config.ui, issues),
        Some(Commands::List(ref args)) => cmd::list::run_list(args, base, issues, output),
        Some(Commands::Completions(args)) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    match run(cli, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = classify(&err);
            let error = CliError::from_code(code, format!("{err:#}"));
            if render_error(output, &error).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
