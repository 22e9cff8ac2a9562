use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(
            session.ctx.workbook(),
            &expand_tilde(file),
            *compress,
            *force,
        )?;
    }

    Ok(())
}
