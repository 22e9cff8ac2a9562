//! Connection check: credentials, workbook access and worksheet layout.
//!
//! Read-only. Missing worksheets and stale headers are reported, not fixed;
//! the next regular command repairs them.

use crate::auth::AuthorizedClient;
use crate::errors::AppResult;
use crate::sheets::BackendKind;
use crate::store::Table;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetState {
    Missing,
    /// Present, but the header row differs from the expected columns.
    StaleHeader { rows: usize },
    Ok { rows: usize },
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub project_id: Option<String>,
    pub client_email: Option<String>,
    pub locator: String,
    pub backend: &'static str,
    pub worksheets: Vec<(Table, SheetState)>,
}

impl CheckReport {
    /// True when every worksheet exists with the expected header.
    pub fn is_healthy(&self) -> bool {
        self.worksheets
            .iter()
            .all(|(_, state)| matches!(state, SheetState::Ok { .. }))
    }
}

pub struct CheckLogic;

impl CheckLogic {
    pub fn run(client: &AuthorizedClient, locator: &str) -> AppResult<CheckReport> {
        let workbook = client.open(locator)?;

        let mut worksheets = Vec::with_capacity(Table::ALL.len());
        for table in Table::ALL {
            let state = match workbook.header(table.title())? {
                None => SheetState::Missing,
                Some(header) => {
                    let rows = workbook.rows(table.title())?.len();
                    if header == table.header() {
                        SheetState::Ok { rows }
                    } else {
                        SheetState::StaleHeader { rows }
                    }
                }
            };
            tracing::debug!(table = table.title(), ?state, "worksheet checked");
            worksheets.push((table, state));
        }

        let account = client.account();
        Ok(CheckReport {
            project_id: account.map(|a| a.project_id.clone()),
            client_email: account.map(|a| a.client_email.clone()),
            locator: workbook.locator().to_string(),
            backend: BackendKind::from_locator(locator).as_str(),
            worksheets,
        })
    }
}
