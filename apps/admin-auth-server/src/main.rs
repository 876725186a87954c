//! Admin authentication server.
//!
//! Loads configuration, bootstraps the admin auth subsystem and exposes the
//! result on the command line.

use std::path::PathBuf;
use std::sync::Arc;

use admin_auth::{ProviderRegistry, Service, StrategyCatalog, StrategyTable};
use admin_auth_sdk::{CredentialVerdict, HostContext};
use anyhow::Context;
use clap::{Parser, Subcommand};
use redirect_sso_plugin::{RedirectSsoStrategy, register_redirect_sso};
use tracing_subscriber::EnvFilter;

mod config;
mod credentials;

use config::AppConfig;
use credentials::StaticCredentialChecker;

#[derive(Parser)]
#[command(name = "admin-auth-server", about = "Admin panel authentication bootstrap")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config/admin-auth.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List installed strategies and their callback paths
    Providers,
    /// Run the local strategy against the given credentials
    Login {
        #[arg(long)]
        identifier: String,
        #[arg(long)]
        secret: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let table = bootstrap(&cfg)?;

    match cli.command {
        Command::Providers => {
            print_providers(&table);
            Ok(())
        }
        Command::Login { identifier, secret } => login(&table, &identifier, &secret).await,
    }
}

fn bootstrap(cfg: &AppConfig) -> anyhow::Result<StrategyTable> {
    let mut catalog = StrategyCatalog::new();
    register_redirect_sso(&mut catalog);

    let host = HostContext::new(Arc::new(StaticCredentialChecker::new(&cfg.accounts)))
        .with_callbacks(cfg.admin_auth.callback_urls());
    let service = Service::new(Arc::new(ProviderRegistry::new()), catalog, host);

    let mut table = StrategyTable::new();
    let report = service
        .bootstrap(&cfg.admin_auth, &mut table)
        .context("admin auth bootstrap failed")?;
    tracing::info!(installed = report.installed().len(), "admin auth ready");
    Ok(table)
}

fn print_providers(table: &StrategyTable) {
    for name in table.names() {
        let sso = table
            .get(name)
            .and_then(|s| s.as_any().downcast_ref::<RedirectSsoStrategy>());
        match sso {
            Some(sso) => println!(
                "{name}\t{}\t{}\t{}",
                sso.display_name(),
                sso.authorize_url(),
                sso.callback_url()
            ),
            None => println!("{name}"),
        }
    }
}

async fn login(table: &StrategyTable, identifier: &str, secret: &str) -> anyhow::Result<()> {
    let local = table.local().context("local strategy is not installed")?;

    match local.authenticate(identifier, secret).await? {
        CredentialVerdict::Accepted { user, .. } => {
            println!("authenticated as user {}", user.id);
            Ok(())
        }
        CredentialVerdict::Rejected { info } => {
            let reason = info
                .as_ref()
                .and_then(|i| i.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("rejected");
            anyhow::bail!("login rejected: {reason}")
        }
    }
}
