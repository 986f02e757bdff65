use std::io::Write;
use std::path::PathBuf;

use crate::error::CliError;
use crate::loader::{layered, read_into, read_properties};

#[derive(Debug, Clone)]
pub struct KeysOptions {
    pub path: PathBuf,
    pub defaults_path: Option<PathBuf>,
}

pub fn run_keys(options: &KeysOptions, out: &mut impl Write) -> Result<(), CliError> {
    let defaults = options
        .defaults_path
        .as_deref()
        .map(read_properties)
        .transpose()?;
    let mut props = layered(defaults.as_ref());
    read_into(&options.path, &mut props)?;
    for key in props.keys() {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
