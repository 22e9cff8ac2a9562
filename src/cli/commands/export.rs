use crate::cli::Session;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        force,
    } = cmd
    {
        let mut store = session.open_store()?;
        ExportLogic::export(&mut store, *table, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
