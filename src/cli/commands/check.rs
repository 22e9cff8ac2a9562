use crate::cli::Session;
use crate::core::{CheckLogic, SheetState};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};

/// Handle the `check` command.
///
/// Credentials have already been validated by `run()`, so reaching this
/// point means they loaded; what remains is opening the workbook.
pub fn handle(session: &Session) -> AppResult<()> {
    header("Connection check");

    match session.client.account() {
        Some(account) => {
            success("Credentials loaded.");
            info(format!("project_id   : {}", account.project_id));
            info(format!("client_email : {}", account.client_email));
        }
        None => info("No credentials configured; local workbooks are opened directly."),
    }

    let report = CheckLogic::run(&session.client, session.ctx.workbook())?;
    success(format!(
        "Workbook reachable: {} ({})",
        report.locator, report.backend
    ));

    for (table, state) in &report.worksheets {
        match state {
            SheetState::Ok { rows } => success(format!("{table}: {rows} row(s)")),
            SheetState::StaleHeader { rows } => warning(format!(
                "{table}: header differs from the expected columns ({rows} row(s)); it is repaired on next use"
            )),
            SheetState::Missing => warning(format!("{table}: missing; it is created on next use")),
        }
    }

    if report.is_healthy() {
        success("All worksheets are in place.");
    }

    Ok(())
}
