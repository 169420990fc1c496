use std::fmt;
use std::path::PathBuf;

use actix_web::HttpRequest;

use crate::middleware::RequestIdExt;
use crate::validation::log_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Created => write!(f, "created"),
            Action::Updated => write!(f, "updated"),
            Action::Deleted => write!(f, "deleted"),
        }
    }
}

/// Records every committed mutation as a line in an append-only file.
#[derive(Debug, Clone)]
pub struct ActivityLogger {
    path: PathBuf,
}

impl ActivityLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Failures are logged and swallowed; the mutation itself has already
    /// committed.
    pub fn log(
        &self,
        entity_type: &str,
        entity_id: i64,
        action: Action,
        description: &str,
        req: &HttpRequest,
    ) {
        let correlation_id = req.correlation_id().unwrap_or_else(|| "-".to_string());
        let line = format!(
            "{} {} {}: {} correlation_id={}",
            entity_type, entity_id, action, description, correlation_id
        );

        if let Err(e) = log_message(&self.path, &line) {
            log::warn!(
                "Failed to write activity log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
