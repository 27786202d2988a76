//! Collaborator contracts supplied by the host application.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// App password record returned by the account service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAppPassword {
    pub name: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Mints app passwords against the signed-in account.
///
/// The flow calls this at most once per submit and treats every failure
/// the same; retry policy, if any, lives behind this trait.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn create_app_password(&self, name: &str) -> Result<CreatedAppPassword>;
}

/// System clipboard. Fire and forget.
pub trait Clipboard: Send + Sync {
    fn set_string(&self, text: &str);
}

/// Transient user-facing notices (toasts). Fire and forget, non-blocking.
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str);
}
