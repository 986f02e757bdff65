use std::io::Read;

use tracing::{debug, trace};

use crate::error::{PropertiesError, PropertiesResult};
use crate::escape::{MalformedEscape, decode_escapes};
use crate::line_reader::LineReader;
use crate::properties::Properties;
use crate::split::split_key_value;

/// Reads a property list from an ISO-8859-1 byte stream.
pub fn load<R: Read>(reader: R) -> PropertiesResult<Properties<'static>> {
    Properties::load(reader)
}

impl<'a> Properties<'a> {
    pub fn load<R: Read>(reader: R) -> PropertiesResult<Self> {
        let mut props = Self::new();
        props.load_from(reader)?;
        Ok(props)
    }

    /// Adds every entry of the stream to this list, later entries replacing
    /// earlier ones. Nothing is inserted unless the whole stream parses.
    pub fn load_from<R: Read>(&mut self, reader: R) -> PropertiesResult<()> {
        let entries = read_entries(reader)?;
        self.extend(entries);
        Ok(())
    }
}

fn read_entries<R: Read>(reader: R) -> PropertiesResult<Vec<(String, String)>> {
    let mut lines = LineReader::new(reader);
    let mut entries = Vec::new();
    while let Some(line) = lines.read_line()? {
        let (raw_key, raw_value) = split_key_value(line);
        let (key, value) = decode_entry(raw_key, raw_value).map_err(|reason| {
            PropertiesError::MalformedEscape {
                line: lines.line_number(),
                reason,
            }
        })?;
        trace!(line = lines.line_number(), key = %key, "property entry");
        entries.push((key, value));
    }
    debug!(
        entries = entries.len(),
        lines = lines.physical_lines(),
        "properties loaded"
    );
    Ok(entries)
}

fn decode_entry(raw_key: &[u8], raw_value: &[u8]) -> Result<(String, String), MalformedEscape> {
    Ok((decode_escapes(raw_key)?, decode_escapes(raw_value)?))
}

#[cfg(test)]
mod tests {
    use super::load;
    use crate::error::PropertiesError;
    use crate::escape::MalformedEscape;
    use crate::properties::Properties;

    #[test]
    fn loads_key_value_pairs() {
        let props = load(&b"key=value\nother : thing\n"[..]).expect("load");
        assert_eq!(props.get("key"), Some("value"));
        assert_eq!(props.get("other"), Some("thing"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let props = load(&b"a=1\na=2\n"[..]).expect("load");
        assert_eq!(props.get("a"), Some("2"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn decodes_keys_and_values() {
        let props = load(&br"a\:b\ c=caf\u00e9\tend"[..]).expect("load");
        assert_eq!(props.get("a:b c"), Some("caf\u{E9}\tend"));
    }

    #[test]
    fn reports_malformed_escape_with_line() {
        let err = load(&b"ok=1\n\nbad=\\u12x4\n"[..]).expect_err("malformed");
        match err {
            PropertiesError::MalformedEscape { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, MalformedEscape::InvalidHexDigit('x'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_key_is_also_fatal() {
        let err = load(&b"\\u00=value\n"[..]).expect_err("malformed");
        assert!(matches!(err, PropertiesError::MalformedEscape { line: 1, .. }));
    }

    #[test]
    fn load_from_leaves_store_untouched_on_failure() {
        let mut props = Properties::new();
        props.set("keep", "me");
        let err = props
            .load_from(&b"fresh=1\nbroken=\\u\n"[..])
            .expect_err("malformed");
        assert!(matches!(err, PropertiesError::MalformedEscape { .. }));
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("fresh"), None);
    }

    #[test]
    fn load_from_merges_into_existing_entries() {
        let mut props = Properties::new();
        props.set("a", "old");
        props.set("b", "kept");
        props.load_from(&b"a=new\nc=added\n"[..]).expect("load");
        assert_eq!(props.get("a"), Some("new"));
        assert_eq!(props.get("b"), Some("kept"));
        assert_eq!(props.get("c"), Some("added"));
    }

    #[test]
    fn load_into_child_keeps_defaults() {
        let defaults = load(&b"x=1\ny=2\n"[..]).expect("defaults");
        let mut child = Properties::with_defaults(&defaults);
        child.load_from(&b"y=3\n"[..]).expect("child");
        assert_eq!(child.get("x"), Some("1"));
        assert_eq!(child.get("y"), Some("3"));
        assert_eq!(defaults.get("y"), Some("2"));
    }
}
