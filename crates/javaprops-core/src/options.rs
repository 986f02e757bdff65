use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub timestamp: bool,
    pub line_ending: LineEnding,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            timestamp: true,
            line_ending: LineEnding::Lf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LineEnding, StoreOptions};

    #[test]
    fn default_values_are_stable() {
        let options = StoreOptions::default();
        assert!(options.timestamp);
        assert_eq!(options.line_ending, LineEnding::Lf);
    }

    #[test]
    fn deserializes_partial_table() {
        let options: StoreOptions = toml::from_str("line_ending = \"crlf\"").expect("options");
        assert!(options.timestamp);
        assert_eq!(options.line_ending.as_str(), "\r\n");
    }

    #[test]
    fn deserializes_full_table() {
        let options: StoreOptions =
            toml::from_str("timestamp = false\nline_ending = \"lf\"").expect("options");
        assert!(!options.timestamp);
        assert_eq!(options.line_ending, LineEnding::Lf);
    }
}
