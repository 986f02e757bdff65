use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use crate::error::CliError;
use crate::loader::{layered, read_into, read_properties};

#[derive(Debug, Clone)]
pub struct DumpOptions {
    pub path: PathBuf,
    pub defaults_path: Option<PathBuf>,
}

pub fn run_dump(options: &DumpOptions, out: &mut impl Write) -> Result<(), CliError> {
    let defaults = options
        .defaults_path
        .as_deref()
        .map(read_properties)
        .transpose()?;
    let mut props = layered(defaults.as_ref());
    read_into(&options.path, &mut props)?;

    let resolved: BTreeMap<&str, &str> = props
        .keys()
        .into_iter()
        .filter_map(|key| props.get(key).map(|value| (key, value)))
        .collect();
    serde_json::to_writer_pretty(&mut *out, &resolved)?;
    writeln!(out)?;
    Ok(())
}
