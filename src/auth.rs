//! Service-account credentials and the authorized handle workbooks are
//! opened through.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sheets::{Workbook, open_workbook};
use crate::utils::path::expand_tilde;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";

/// The fields of a service-account key file the planner relies on.
/// Other fields of the file are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub token_uri: String,
}

impl ServiceAccount {
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Auth(format!("cannot read credentials {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        let account: ServiceAccount = serde_json::from_str(content)
            .map_err(|e| AppError::Auth(format!("malformed credentials: {e}")))?;
        account.validate()?;
        Ok(account)
    }

    /// Every required field present, key material in PEM form.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(t) = &self.account_type
            && t != SERVICE_ACCOUNT_TYPE
        {
            return Err(AppError::Auth(format!(
                "unsupported credentials type '{t}'"
            )));
        }

        let missing: Vec<&str> = [
            ("project_id", &self.project_id),
            ("client_email", &self.client_email),
            ("private_key", &self.private_key),
            ("token_uri", &self.token_uri),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Auth(format!(
                "credentials missing {}",
                missing.join(", ")
            )));
        }

        if !self.client_email.contains('@') {
            return Err(AppError::Auth(format!(
                "invalid client_email '{}'",
                self.client_email
            )));
        }

        if !self.private_key.contains("PRIVATE KEY") {
            return Err(AppError::Auth("private_key is not a PEM key".into()));
        }

        Ok(())
    }
}

/// Handle every workbook is opened through.
///
/// Holds the validated service account, or nothing for unauthenticated
/// local use. Credentials are never refreshed.
#[derive(Debug, Clone, Default)]
pub struct AuthorizedClient {
    account: Option<ServiceAccount>,
}

impl AuthorizedClient {
    pub fn anonymous() -> Self {
        Self { account: None }
    }

    pub fn authorize(account: ServiceAccount) -> AppResult<Self> {
        account.validate()?;
        Ok(Self {
            account: Some(account),
        })
    }

    /// Authorize with the configured credentials file, if any.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        match cfg.credentials.as_deref().map(str::trim) {
            None | Some("") => Ok(Self::anonymous()),
            Some(path) => {
                let account = ServiceAccount::from_file(&expand_tilde(path))?;
                tracing::debug!(client = %account.client_email, "credentials loaded");
                Self::authorize(account)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&ServiceAccount> {
        self.account.as_ref()
    }

    /// Client e-mail of the account, if authenticated.
    pub fn identity(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.client_email.as_str())
    }

    pub fn open(&self, locator: &str) -> AppResult<Box<dyn Workbook>> {
        tracing::debug!(locator, identity = ?self.identity(), "open workbook");
        open_workbook(locator)
    }
}
