use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Width(#[from] bitwidth::WidthError),
    #[error(transparent)]
    Config(#[from] bitwidth::ConfigError),
}

impl HarnessError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Width(_) | Self::Config(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
