use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::CliError;
use crate::loader::{layered, read_into, read_properties};

#[derive(Debug, Error)]
pub enum GetCommandError {
    #[error(transparent)]
    Source(#[from] CliError),
    #[error("key not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct GetOptions {
    pub path: PathBuf,
    pub key: String,
    pub defaults_path: Option<PathBuf>,
    pub fallback: Option<String>,
}

pub fn run_get(options: &GetOptions, out: &mut impl Write) -> Result<(), GetCommandError> {
    let defaults = options
        .defaults_path
        .as_deref()
        .map(read_properties)
        .transpose()?;
    let mut props = layered(defaults.as_ref());
    read_into(&options.path, &mut props)?;

    let value = match (props.get(&options.key), options.fallback.as_deref()) {
        (Some(value), _) => value,
        (None, Some(fallback)) => fallback,
        (None, None) => return Err(GetCommandError::NotFound(options.key.clone())),
    };
    writeln!(out, "{value}")?;
    Ok(())
}
