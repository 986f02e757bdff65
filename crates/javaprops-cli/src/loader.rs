use std::fs::File;
use std::path::Path;

use javaprops_core::Properties;
use tracing::debug;

use crate::error::CliError;

pub fn read_properties(path: &Path) -> Result<Properties<'static>, CliError> {
    let mut props = Properties::new();
    read_into(path, &mut props)?;
    Ok(props)
}

pub fn read_properties_or_empty(path: &Path) -> Result<Properties<'static>, CliError> {
    if !path.exists() {
        return Ok(Properties::new());
    }
    read_properties(path)
}

pub fn read_into(path: &Path, props: &mut Properties<'_>) -> Result<(), CliError> {
    let file = File::open(path)?;
    props
        .load_from(file)
        .map_err(|source| CliError::Properties {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), entries = props.len(), "read properties file");
    Ok(())
}

pub fn layered<'a>(defaults: Option<&'a Properties<'a>>) -> Properties<'a> {
    match defaults {
        Some(defaults) => Properties::with_defaults(defaults),
        None => Properties::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{layered, read_properties, read_properties_or_empty};
    use crate::error::CliError;
    use javaprops_core::Properties;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("javaprops_{name}_{nanos}.properties"));
        path
    }

    #[test]
    fn reads_latin1_file() {
        let path = temp_path("latin1");
        fs::write(&path, b"name=Jos\xE9\n").expect("write");
        let props = read_properties(&path).expect("read");
        assert_eq!(props.get("name"), Some("Jos\u{E9}"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_empty_when_allowed() {
        let path = temp_path("absent");
        let props = read_properties_or_empty(&path).expect("read");
        assert!(props.is_empty());
        assert!(matches!(read_properties(&path), Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_file_names_path() {
        let path = temp_path("malformed");
        fs::write(&path, "bad=\\u00zz\n").expect("write");
        let err = read_properties(&path).expect_err("malformed");
        assert!(err.to_string().starts_with(&path.display().to_string()));
        assert!(matches!(err, CliError::Properties { .. }));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn layered_uses_defaults() {
        let defaults: Properties = [("a", "1")].into_iter().collect();
        let child = layered(Some(&defaults));
        assert_eq!(child.get("a"), Some("1"));
        assert!(layered(None).is_empty());
    }
}
