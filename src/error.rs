use std::io;

use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("terminal I/O error")]
    Terminal(#[from] io::Error),
    #[error("failed to install log subscriber")]
    Logging(#[from] SetGlobalDefaultError),
    #[error("alert catalog must contain at least one message")]
    EmptyCatalog,
}
