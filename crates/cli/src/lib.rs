//! # SpringBoot CLI
//!
//! Command surface of the project wizard.
//!
//! ```text
//! springboot-cli create [name]
//!     │
//!     ├──> Settings::load      defaults → TOML file → env → flags
//!     ├──> MetadataProvider    HTTP source (or offline) + fallback table
//!     ├──> Wizard::run         TerminalInteraction (dialoguer/indicatif on stderr)
//!     └──> summary             human text, or flat JSON on stdout with --json
//! ```

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use springboot_metadata::{FallbackCatalog, MetadataProvider};
use springboot_wizard::{ProjectConfiguration, Wizard, WizardError};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod banner;
mod settings;
mod summary;
mod terminal;

pub use banner::render_banner;
pub use settings::{Overrides, Settings};
pub use summary::{render_closing, render_summary};
pub use terminal::TerminalInteraction;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "springboot-cli")]
#[command(about = "SpringBoot CLI - Generate Spring Boot projects interactively", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (overrides SPRINGBOOT_CLI_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Spring Boot project
    Create(CreateArgs),
}

#[derive(Args)]
struct CreateArgs {
    /// Project name; prompted for when missing or invalid
    project_name: Option<String>,

    /// Print the collected configuration as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Skip the remote metadata fetch and use the built-in tables
    #[arg(long)]
    offline: bool,

    /// Metadata document URL (env: SPRINGBOOT_CLI_METADATA_URL)
    #[arg(long)]
    metadata_url: Option<String>,

    /// Metadata request timeout in seconds (env: SPRINGBOOT_CLI_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl CreateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            metadata_url: self.metadata_url.clone(),
            timeout_secs: self.timeout_secs,
            offline: self.offline,
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

pub async fn main_entry() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli);

    let Some(Commands::Create(args)) = &cli.command else {
        print_stdout(&render_banner())?;
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    eprintln!("{}", render_banner());
    match run_create(&cli, args).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            report_failure(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}

const PROMPT_FAILURE: &str = "Prompt couldn't be rendered in the current environment";

fn report_failure(err: &anyhow::Error) {
    let interaction_failure = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<WizardError>())
        .any(WizardError::is_interaction);
    let message = format!("{err:#}");
    eprintln!(
        "\n{} {message}",
        console::style("❌ Error creating project:").red()
    );
    if interaction_failure && !message.contains(PROMPT_FAILURE) {
        eprintln!("{PROMPT_FAILURE}");
    }
}

async fn run_create(cli: &Cli, args: &CreateArgs) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref(), &args.overrides())?;
    if let Some(path) = &settings.source {
        log::debug!("Using settings from {}", path.display());
    }

    let provider = MetadataProvider::from_config(&settings.metadata, FallbackCatalog::builtin())
        .context("Failed to set up the metadata source")?;

    eprintln!(
        "{}",
        console::style("\nWelcome to Spring Boot CLI! 🚀\n").bold().green()
    );

    let config = collect(&provider, settings, args.project_name.as_deref()).await?;

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&config)?)?;
    } else {
        print_stdout(&render_summary(&config))?;
        print_stdout(&render_closing())?;
    }
    Ok(())
}

async fn collect(
    provider: &MetadataProvider,
    settings: Settings,
    project_name: Option<&str>,
) -> Result<ProjectConfiguration> {
    let mut ui = TerminalInteraction::new().map_err(WizardError::from)?;
    let config = Wizard::new(provider)
        .with_defaults(settings.defaults)
        .run(&mut ui, project_name)
        .await?;
    Ok(config)
}
