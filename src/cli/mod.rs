//! # Command Line Interface
//!
//! Interactive menu and one-shot commands for listing EC2 instances and S3
//! buckets with credentials fetched from Vault.

pub mod config;
pub mod menu;
pub mod output;
pub mod session;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::cloud::ServiceKind;
use crate::config::ConfigOverrides;
use crate::observability::{init_logging, LogFormat, LoggingConfig};
use output::OutputFormat;
use session::{InventoryAction, Session};

#[derive(Parser)]
#[command(name = "vaultscope")]
#[command(about = "Inspect EC2 instances and S3 buckets using AWS credentials stored in Vault")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the config file (default: ~/.vaultscope/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vault server address
    #[arg(long, global = true)]
    pub vault_addr: Option<String>,

    /// Logical Vault path of the AWS credentials secret
    #[arg(long, global = true)]
    pub secret_path: Option<String>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (the default when no command is given)
    Menu,

    /// List EC2 instances
    Ec2 {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// List S3 buckets
    S3 {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig { verbose: cli.verbose, format: cli.log_format });

    let overrides = ConfigOverrides {
        vault_addr: cli.vault_addr,
        secret_path: cli.secret_path,
        region: cli.region,
    };
    let app_config = config::resolve_config(cli.config, &overrides)?;
    tracing::debug!(
        vault_addr = %app_config.vault.address,
        secret_path = %app_config.secret_path,
        region = ?app_config.aws.region,
        "Resolved configuration"
    );

    let session = Session::new(app_config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            menu::run_menu(stdin.lock(), &mut stdout, &session).await?
        }
        Commands::Ec2 { output } => run_once(&session, ServiceKind::Ec2, output).await?,
        Commands::S3 { output } => run_once(&session, ServiceKind::S3, output).await?,
    }

    Ok(())
}

/// Run a single listing action and print it.
async fn run_once(
    session: &Session,
    kind: ServiceKind,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let inventory = session
        .inventory(kind)
        .await
        .with_context(|| format!("{} listing failed", kind))?;

    let mut stdout = std::io::stdout().lock();
    output::write_inventory(&mut stdout, &inventory, format)?;
    stdout.flush()?;
    Ok(())
}
