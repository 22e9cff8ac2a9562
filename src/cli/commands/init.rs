use crate::auth::AuthorizedClient;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::sheets::BackendKind;
use crate::store::{SheetStore, Table};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the workbook with the four planner worksheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.workbook.as_deref(), cli.test)?;
    let kind = BackendKind::from_locator(&cfg.workbook);

    info("Initializing phdplanner…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Workbook    : {} ({})", cfg.workbook, kind.as_str()));

    let client = AuthorizedClient::from_config(&cfg)?;
    let mut store = SheetStore::open(client.open(&cfg.workbook)?)?;

    let titles: Vec<&str> = Table::ALL.iter().map(|t| t.title()).collect();
    store.audit(
        "init",
        &cfg.workbook,
        &format!("Workbook initialized with {}", titles.join(", ")),
    );

    success(format!("Workbook initialized at {}", cfg.workbook));
    Ok(())
}
