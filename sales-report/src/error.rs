//! Report generator errors

use std::path::PathBuf;

use shared::db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Failed to build workbook: {0}")]
    Workbook(String),

    #[error("Failed to write report to {}: {message}", path.display())]
    Write { path: PathBuf, message: String },
}

impl ReportError {
    pub fn is_connection(&self) -> bool {
        matches!(self, ReportError::Db(e) if e.is_connection())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
