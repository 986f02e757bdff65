use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::load_config_or_default;
use crate::error::CliError;
use crate::loader::read_properties_or_empty;

#[derive(Debug, Error)]
pub enum SetCommandError {
    #[error(transparent)]
    Source(#[from] CliError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct SetOptions {
    pub path: PathBuf,
    pub key: String,
    pub value: String,
    pub comment: Option<String>,
    pub config_path: PathBuf,
}

pub fn run_set(options: &SetOptions, out: &mut impl Write) -> Result<(), SetCommandError> {
    let config = load_config_or_default(&options.config_path)?;
    let mut props = read_properties_or_empty(&options.path)?;
    let previous = props.set(options.key.as_str(), options.value.as_str());

    let comment = options
        .comment
        .as_deref()
        .or(config.default_comment.as_deref());
    let staging = staging_path(&options.path);
    let file = File::create(&staging)?;
    if let Err(err) = props.store_with(file, comment, &config.store) {
        fs::remove_file(&staging).ok();
        return Err(err.into());
    }
    fs::rename(&staging, &options.path)?;
    info!(path = %options.path.display(), key = %options.key, "property written");

    if let Some(previous) = previous {
        writeln!(out, "{previous}")?;
    }
    Ok(())
}

/// Sibling file the new contents are written to before replacing the target.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
