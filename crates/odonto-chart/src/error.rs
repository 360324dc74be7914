use std::path::PathBuf;

use odonto_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u32, supported: u32 },

    #[error("config is not a JSON object")]
    MalformedConfig,
}
