use thiserror::Error;

use crate::mode::errors::ModeError;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Mode(#[from] ModeError),

    /// Missing or invalid command-line input. Carries clap's rendered usage message.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Report error: {0}.")]
    Report(String),
}
