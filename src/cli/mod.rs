pub mod commands;
pub mod parser;

use crate::auth::AuthorizedClient;
use crate::config::Config;
use crate::context::RequestContext;
use crate::errors::AppResult;
use crate::store::SheetStore;

/// Everything a command needs for one invocation.
pub struct Session {
    pub cfg: Config,
    pub client: AuthorizedClient,
    pub ctx: RequestContext,
}

impl Session {
    /// Open the workbook of this invocation with all planner tables in place.
    pub fn open_store(&self) -> AppResult<SheetStore> {
        let workbook = self.client.open(self.ctx.workbook())?;
        SheetStore::open(workbook)
    }

    /// Character used for table separator lines.
    pub fn separator(&self) -> char {
        self.cfg.separator_char.chars().next().unwrap_or('-')
    }
}
