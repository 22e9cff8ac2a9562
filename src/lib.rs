//! phdplanner library root.
//! Exposes the CLI parser, the high-level `run()` function and the planner
//! modules (workbook backends, typed store, core operations, export).

pub mod auth;
pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheets;
pub mod store;
pub mod ui;
pub mod utils;

use auth::AuthorizedClient;
use clap::Parser;
use cli::Session;
use cli::parser::{Cli, Commands};
use config::Config;
use context::{RequestContext, parse_utc_offset};
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter.
pub const LOG_ENV: &str = "PHDPLANNER_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &session.cfg),
        Commands::Prof { .. } => cli::commands::professors::handle(&cli.command, session),
        Commands::Sch { .. } => cli::commands::scholarships::handle(&cli.command, session),
        Commands::Comm { .. } => cli::commands::communication::handle(&cli.command, session),
        Commands::Task { .. } => cli::commands::timeline::handle(&cli.command, session),
        Commands::Dashboard => cli::commands::dashboard::handle(&cli.command, session),
        Commands::Check => cli::commands::check::handle(session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, session),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, session),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, session),
    }
}

/// Diagnostics on stderr, filtered by `PHDPLANNER_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.workbook {
        cfg.workbook = Config::resolve_workbook(custom);
    }

    // `init` and `config` must work with broken credentials.
    let client = match cli.command {
        Commands::Init | Commands::Config { .. } => AuthorizedClient::anonymous(),
        _ => AuthorizedClient::from_config(&cfg)?,
    };

    let offset = parse_utc_offset(&cfg.utc_offset)?;
    let ctx = RequestContext::at_offset(offset, cfg.workbook.clone())
        .with_deadline_window(cfg.deadline_window_days);

    tracing::debug!(workbook = %cfg.workbook, offset = %offset, "session ready");

    let session = Session { cfg, client, ctx };
    dispatch(&cli, &session)
}
