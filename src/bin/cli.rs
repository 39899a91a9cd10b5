//! Torrent Statusbar CLI - Command-line interface
//!
//! Renders the status bar summary headlessly from snapshot files and edits
//! the persisted status bar sections.

use clap::{Parser, Subcommand};
use statusbar_core::cli::{print_exit_codes, render_sections, render_summary, render_titles};
use statusbar_core::config::{self, AppConfig, ConfigHandle};
use statusbar_core::core::TorrentId;
use statusbar_core::{set_locale, CliResult, OutputFormat, StatusBarState, StatusSnapshot, StatusSources};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Torrent Statusbar CLI
#[derive(Parser, Debug)]
#[command(
    name = "statusbar-cli",
    author = "Torrent Statusbar Team",
    version,
    about = "Status bar summary for a remote torrent daemon",
    long_about = None
)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, env = "STATUSBAR_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Snapshot input shared by the rendering commands
#[derive(clap::Args, Debug)]
struct SnapshotArgs {
    /// Snapshot JSON file (session, torrents, filtered, selected, hostname)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Override the selected torrent ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    selected: Option<Vec<TorrentId>>,

    /// Override the daemon host name
    #[arg(long)]
    hostname: Option<String>,

    /// Sum rates over all torrents instead of the filtered list
    #[arg(long, conflicts_with = "filtered_speeds")]
    global: bool,

    /// Sum rates over the filtered list only
    #[arg(long)]
    filtered_speeds: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the visible status bar sections
    Summary(SnapshotArgs),

    /// Print the document and window titles
    Title(SnapshotArgs),

    /// Inspect or edit the status bar sections
    Sections {
        #[command(subcommand)]
        action: SectionAction,
    },

    /// Print the exit code table
    ExitCodes,
}

#[derive(Subcommand, Debug)]
enum SectionAction {
    /// List sections in display order
    List,
    /// Flip a section's visibility
    Toggle {
        /// Section name (e.g. free-space)
        name: String,
    },
    /// Show a section
    Show {
        /// Section name
        name: String,
    },
    /// Hide a section
    Hide {
        /// Section name
        name: String,
    },
    /// Move a section to a display position (0-based)
    Move {
        /// Section name
        name: String,
        /// Target position
        position: usize,
    },
    /// Restore the default sections
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let result = run(&cli);
    if let Some(msg) = result.message() {
        if result.is_success() {
            if !cli.quiet {
                println!("{}", msg);
            }
        } else {
            eprintln!("Error: {}", msg);
        }
    }
    result.to_exit_code()
}

fn config_path(cli: &Cli) -> Result<PathBuf, CliResult> {
    cli.config
        .clone()
        .or_else(config::config_file)
        .ok_or_else(|| CliResult::from(config::ConfigError::NoConfigDir))
}

fn load_config(path: &Path) -> Result<ConfigHandle, CliResult> {
    let config = AppConfig::load_from(path)?;
    set_locale(config.locale());
    Ok(ConfigHandle::new(config))
}

fn run(cli: &Cli) -> CliResult {
    match try_run(cli) {
        Ok(result) | Err(result) => result,
    }
}

fn try_run(cli: &Cli) -> Result<CliResult, CliResult> {
    match &cli.command {
        Commands::Summary(args) => {
            let (state, sources, _) = prepare(cli, args)?;
            summary(cli, state, &sources)
        }
        Commands::Title(args) => {
            let (mut state, sources, server_name) = prepare(cli, args)?;
            let summary = state.summary(&sources);
            Ok(CliResult::success_with_message(render_titles(summary, &server_name, cli.format)?))
        }
        Commands::Sections { action } => sections(cli, action),
        Commands::ExitCodes => {
            print_exit_codes();
            Ok(CliResult::success())
        }
    }
}

fn prepare(cli: &Cli, args: &SnapshotArgs) -> Result<(StatusBarState, StatusSources, String), CliResult> {
    let config = load_config(&config_path(cli)?)?;
    if !args.snapshot.exists() {
        return Err(CliResult::file_not_found(&args.snapshot.display().to_string()));
    }

    let mut snapshot = StatusSnapshot::load(&args.snapshot)?;
    if let Some(selected) = &args.selected {
        snapshot.selected.clone_from(selected);
    }
    if let Some(hostname) = &args.hostname {
        snapshot.hostname.clone_from(hostname);
    }
    if snapshot.hostname.is_empty() {
        snapshot.hostname = config.read().server.host.clone();
    }
    tracing::debug!(
        torrents = snapshot.torrents.len(),
        selected = snapshot.selected.len(),
        "Loaded snapshot {}",
        args.snapshot.display()
    );

    let server_name = config.read().server.name.clone();
    let mut state = StatusBarState::new(config);
    if args.global {
        state.set_global_speeds(true);
    } else if args.filtered_speeds {
        state.set_global_speeds(false);
    }

    Ok((state, StatusSources::from_snapshot(&snapshot), server_name))
}

fn summary(cli: &Cli, mut state: StatusBarState, sources: &StatusSources) -> Result<CliResult, CliResult> {
    let kinds = state.layout()?;
    let summary = state.summary(sources);
    Ok(CliResult::success_with_message(render_summary(summary, &kinds, cli.format)?))
}

fn sections(cli: &Cli, action: &SectionAction) -> Result<CliResult, CliResult> {
    let path = config_path(cli)?;
    let config = load_config(&path)?;
    let mut state = StatusBarState::new(config.clone());

    match action {
        SectionAction::List => {
            return Ok(CliResult::success_with_message(render_sections(state.sections(), cli.format)?));
        }
        SectionAction::Toggle { name } => {
            state.toggle_section(name)?;
        }
        SectionAction::Show { name } => state.set_section_visible(name, true)?,
        SectionAction::Hide { name } => state.set_section_visible(name, false)?,
        SectionAction::Move { name, position } => state.move_section(name, *position)?,
        SectionAction::Reset => state.reset_sections(),
    }

    config.save_to(&path)?;
    tracing::info!("Updated status bar sections in {}", path.display());
    Ok(CliResult::success_with_message(render_sections(state.sections(), cli.format)?))
}
