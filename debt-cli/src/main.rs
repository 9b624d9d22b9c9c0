use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use debt_cli::config::AppConfig;
use debt_cli::state::SessionState;
use debt_cli::{app, logging, views};
use debt_core::IdScheme;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Look up a client's debt and quote an installment plan with discount.
#[derive(Debug, Parser)]
#[command(name = "debt-desk", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Account source backend (`memory` or `csv`).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Backend-specific source, e.g. the CSV file path.
    #[arg(long, global = true)]
    source: Option<String>,

    /// Log filter, e.g. `debug` or `debt_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up an account by identifier and show the quote for a plan.
    Lookup {
        /// DPI (13 digits) or NIT, depending on --scheme.
        #[arg(long)]
        id: String,

        /// `primary`/`dpi` or `secondary`/`nit`.
        #[arg(long, default_value = "primary", value_parser = parse_scheme)]
        scheme: IdScheme,

        /// Number of installments (1-12). Defaults to the configured plan.
        #[arg(long)]
        installments: Option<u32>,

        /// Also print the agreement letter preview.
        #[arg(long)]
        letter: bool,

        /// Override the simulated lookup delay.
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Quote a balance directly, without a lookup.
    Quote {
        /// Balance, e.g. `12,500.50`.
        #[arg(long)]
        balance: String,

        /// Number of installments (1-12). Defaults to the configured plan.
        #[arg(long)]
        installments: Option<u32>,

        /// Show every plan from 1 to 12 installments.
        #[arg(long)]
        all: bool,
    },

    /// Print the discount schedule.
    Schedule,
}

fn parse_scheme(s: &str) -> Result<IdScheme, String> {
    IdScheme::parse(s)
        .ok_or_else(|| format!("unknown scheme '{s}' (expected primary, secondary, dpi or nit)"))
}

// ─── commands ────────────────────────────────────────────────────────────────

async fn run_lookup(
    config: &AppConfig,
    id: String,
    scheme: IdScheme,
    installments: Option<u32>,
    letter: bool,
    delay: Duration,
) -> anyhow::Result<()> {
    let mut state = SessionState::new(config.default_installments);
    state.scheme = scheme;
    state.identifier = id;
    app::apply_installments(&mut state, installments);

    let repo = app::open_store(&config.store)
        .await
        .with_context(|| format!("failed to open '{}' account store", config.store.backend))?;

    let account = app::search(&mut state, &*repo, delay).await?;
    let quote = state
        .quote()?
        .ok_or_else(|| anyhow!("no account loaded after search"))?;

    println!("{}", views::render_summary(&account, &quote, &config.currency_symbol)?);

    if letter {
        println!();
        println!(
            "{}",
            views::render_agreement_letter(
                &account,
                state.scheme,
                &quote,
                &config.currency_symbol,
                Local::now().date_naive(),
            )
        );
    }

    Ok(())
}

fn run_quote(
    config: &AppConfig,
    balance: &str,
    installments: Option<u32>,
    all: bool,
) -> anyhow::Result<()> {
    println!("{}", app::quote_balance(config, balance, installments, all)?);
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.store.backend = backend;
    }
    if let Some(source) = cli.source {
        config.store.source = source;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Lookup {
            id,
            scheme,
            installments,
            letter,
            delay_ms,
        } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.lookup_delay_ms));
            run_lookup(&config, id, scheme, installments, letter, delay).await
        }
        Command::Quote {
            balance,
            installments,
            all,
        } => run_quote(&config, &balance, installments, all),
        Command::Schedule => {
            println!("{}", views::render_schedule_legend());
            Ok(())
        }
    }
}
