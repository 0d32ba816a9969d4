//! rost - terminal data table viewer and registry splitter

use clap::{Args, Parser, Subcommand};
use rost_table::config::{self, ResolvedConfig};
use rost_table::model::{AppError, DataTableSort, SortDirection};
use rost_table::view::{ColorConfig, ViewerArgs};
use rost_table::{logging, registry, source, view};
use std::path::PathBuf;
use tracing::info;

/// rost - sortable, paginated JSON tables in the terminal
#[derive(Parser, Debug)]
#[command(name = "rost")]
#[command(version)]
#[command(about = "Browse JSON rows as a sortable, paginated table")]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// View a JSON array of objects as a table
    View(ViewCommand),
    /// Split a registry manifest into one JSON file per item
    Registry(RegistryCommand),
}

/// Arguments of `rost view`.
#[derive(Args, Debug)]
pub struct ViewCommand {
    /// Path to a JSON file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Rows per page (0 disables pagination)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Comma-separated column keys (default: keys of the first row)
    #[arg(long)]
    pub columns: Option<String>,

    /// Column key to sort by on startup
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Placeholder shown when there are no rows
    #[arg(long)]
    pub empty_message: Option<String>,

    /// Hide the pagination footer
    #[arg(long)]
    pub no_pagination: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments of `rost registry`.
#[derive(Args, Debug)]
pub struct RegistryCommand {
    /// Registry manifest to read
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Directory to write item files to
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl ViewCommand {
    fn startup_sort(&self) -> Option<DataTableSort<String>> {
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort
            .as_ref()
            .map(|key| DataTableSort::new(key.clone(), direction))
    }
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(cli: &Cli) -> Result<ResolvedConfig, AppError> {
    // 1. Load config file (or None if missing)
    let config_file = config::load_config_with_precedence(cli.config.clone())?;

    // 2. Merge with defaults
    let merged = config::merge_config(config_file);

    // 3. Apply environment variable overrides
    let with_env = config::apply_env_overrides(merged);

    // 4. Apply CLI argument overrides (only flags the user set)
    let resolved = match &cli.command {
        Command::View(view) => config::apply_cli_overrides(
            with_env,
            view.page_size,
            view.empty_message.clone(),
            view.no_pagination.then_some(false),
        ),
        Command::Registry(registry) => {
            let mut config = with_env;
            if let Some(manifest) = &registry.manifest {
                config.registry_manifest = manifest.clone();
            }
            if let Some(out) = &registry.out {
                config.registry_out_dir = out.clone();
            }
            config
        }
    };

    Ok(resolved)
}

fn run_view(command: &ViewCommand, config: &ResolvedConfig) -> Result<(), AppError> {
    let input = source::detect_input_source(command.file.clone())?;
    let rows = input.load()?;

    let explicit = command.columns.as_deref().map(source::parse_column_list);
    let keys = source::column_keys(&rows, explicit.as_deref());
    let columns = source::build_columns(&keys);

    let args = ViewerArgs {
        title: Some(input.origin()),
        description: Some(format!("{} rows", rows.len())),
        default_sort: command.startup_sort(),
        ..ViewerArgs::from_config(config, ColorConfig::from_env_and_args(command.no_color))
    };

    view::run_viewer(rows, columns, args)?;
    Ok(())
}

fn run_registry(config: &ResolvedConfig) -> Result<(), AppError> {
    let report = registry::generate_from_path(&config.registry_manifest, &config.registry_out_dir)?;
    println!("{}", report);
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;

    logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    match &cli.command {
        Command::View(command) => run_view(command, &config),
        Command::Registry(_) => run_registry(&config),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse())?;
    Ok(())
}
