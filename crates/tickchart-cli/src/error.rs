use thiserror::Error;
use tickchart_core::{CoreError, FetchError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] tickchart_core::ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("input closed before a selection was complete")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Core(CoreError::Validation(_)) => 2,
            Self::Core(CoreError::Fetch(FetchError::Network { .. })) => 3,
            Self::Core(CoreError::Fetch(FetchError::Format { .. })) => 4,
            Self::Core(CoreError::EmptyResult { .. }) => 5,
            Self::Core(CoreError::Render(_)) => 6,
            Self::InputClosed | Self::Io(_) => 10,
        }
    }
}
