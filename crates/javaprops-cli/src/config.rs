use std::fs;
use std::path::Path;

use javaprops_core::StoreOptions;
use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub default_comment: Option<String>,
    pub store: StoreOptions,
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, load_config_or_default};
    use javaprops_core::LineEnding;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("javaprops_{name}_{nanos}.toml"));
        path
    }

    #[test]
    fn uses_default_when_missing() {
        let path = temp_path("missing");
        let config = load_config_or_default(&path).expect("config");
        assert!(config.default_comment.is_none());
        assert!(config.store.timestamp);
    }

    #[test]
    fn loads_from_file() {
        let path = temp_path("config");
        let contents = r#"
default_comment = "Application labels"

[store]
timestamp = false
line_ending = "crlf"
"#;
        fs::write(&path, contents).expect("write");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.default_comment.as_deref(), Some("Application labels"));
        assert!(!config.store.timestamp);
        assert_eq!(config.store.line_ending, LineEnding::Crlf);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_unknown_line_ending() {
        let path = temp_path("bad");
        fs::write(&path, "[store]\nline_ending = \"cr\"\n").expect("write");
        assert!(load_config_or_default(&path).is_err());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn default_values_are_stable() {
        let config = CliConfig::default();
        assert_eq!(config.store.line_ending, LineEnding::Lf);
    }
}
