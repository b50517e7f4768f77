use thiserror::Error;

#[derive(Error, Debug)]
pub enum CampsiteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unrecognized day of week '{name}'")]
    InvalidDayOfWeek { name: String },

    #[error("invalid date: {reason}")]
    InvalidDate { reason: String },

    #[error("search request failed: HTTP {status} from {url}")]
    FetchFailed { status: u16, url: String },

    #[error("failed to parse results document: {reason}")]
    MalformedDocument { reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, CampsiteError>;
