use std::path::PathBuf;

use javaprops_core::PropertiesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{}: {source}", path.display())]
    Properties {
        path: PathBuf,
        #[source]
        source: PropertiesError,
    },
}
