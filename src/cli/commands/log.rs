use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let workbook = session.client.open(session.ctx.workbook())?;
        LogLogic::print_log(workbook.as_ref())?;
    }

    Ok(())
}
