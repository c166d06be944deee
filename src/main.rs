//! notice - styled modal dialogs in the terminal

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use notice::app::{App, Outcome};
use notice::config::{Config, DialogSpec};
use notice::modal::ModalKind;
use notice::paths;
use serde::Serialize;
use std::path::PathBuf;

/// Show a styled modal dialog and report how it was dismissed
#[derive(Parser)]
#[command(name = "notice")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    show: ShowArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sample dialog spec as JSON
    Example {
        /// Kind of dialog to describe
        #[arg(short, long, default_value = "info")]
        kind: ModalKind,
    },
    /// Show the effective configuration
    Config {
        /// Print the config file location instead
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag maps to one dialog option"
)]
struct ShowArgs {
    /// Message shown in the dialog
    message: Option<String>,

    /// Dialog kind: success, error, warning or info
    #[arg(short, long, default_value = "info")]
    kind: ModalKind,

    /// Title shown above the message
    #[arg(short, long)]
    title: Option<String>,

    /// Extra text shown under the message
    #[arg(long)]
    body: Option<String>,

    /// Custom footer text; replaces the default buttons
    #[arg(long)]
    footer: Option<String>,

    /// Load the dialog from a JSON spec file instead of flags
    #[arg(long, value_name = "FILE", conflicts_with = "message")]
    spec: Option<PathBuf>,

    /// Show a close icon in the top-right corner
    #[arg(long)]
    close_icon: bool,

    /// Keep the dialog open when the backdrop is clicked
    #[arg(long)]
    no_backdrop_close: bool,

    /// Show a Close button
    #[arg(long)]
    close_button: bool,

    /// Show Save and Cancel buttons
    #[arg(long)]
    actions: bool,

    /// Hide the Save button (with --actions)
    #[arg(long)]
    no_save: bool,

    /// Hide the Cancel button (with --actions)
    #[arg(long)]
    no_cancel: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    /// Resolve the dialog to show, or `None` when neither a message nor a
    /// spec file was given.
    fn dialog(&self) -> Result<Option<DialogSpec>> {
        if let Some(path) = &self.spec {
            let spec = DialogSpec::load(path)
                .with_context(|| format!("Failed to load dialog from {}", path.display()))?;
            return Ok(Some(spec));
        }

        let Some(message) = &self.message else {
            return Ok(None);
        };

        let mut spec = DialogSpec::new(self.kind, message.clone());
        spec.title.clone_from(&self.title);
        spec.body.clone_from(&self.body);
        spec.footer.clone_from(&self.footer);
        spec.show_close_icon = self.close_icon;
        spec.close_on_backdrop_click = !self.no_backdrop_close;
        spec.show_close_button = self.close_button;
        spec.show_action_buttons = self.actions;
        spec.show_save_button = !self.no_save;
        spec.show_cancel_button = !self.no_cancel;
        Ok(Some(spec))
    }
}

#[derive(Serialize)]
struct Report<'a> {
    outcome: Outcome,
    kind: ModalKind,
    label: &'a str,
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Example { kind }) => cmd_example(kind),
        Some(Commands::Config { path }) => cmd_config(path),
        None => {
            let Some(dialog) = cli.show.dialog()? else {
                eprintln!("error: a MESSAGE or --spec FILE is required\n");
                Cli::command().print_help()?;
                std::process::exit(1);
            };
            let outcome = cmd_show(dialog, cli.show.json)?;
            std::process::exit(outcome.exit_code());
        }
    }
}

/// Log to the temp dir - tail with: tail -f /tmp/notice.log
/// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging() {
    let log_path = paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(dir, "notice.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn cmd_show(dialog: DialogSpec, json: bool) -> Result<Outcome> {
    let app = App::new(Config::load(), dialog);
    let outcome = notice::tui::run(&app)?;

    if json {
        let label = app.modal().label();
        let report = Report {
            outcome,
            kind: app.dialog.kind,
            label: &label,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", outcome.label());
    }
    Ok(outcome)
}

fn cmd_example(kind: ModalKind) -> Result<()> {
    let spec = DialogSpec::example(kind);
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn cmd_config(path: bool) -> Result<()> {
    if path {
        let location = paths::config_path().context("No config location available")?;
        println!("{}", location.display());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&Config::load())?);
    Ok(())
}
