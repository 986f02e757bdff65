use crate::line_reader::is_line_whitespace;

/// Splits one logical line into its raw key and value spans. The key ends at
/// the first unescaped `=`, `:` or whitespace; one separator surrounded by
/// whitespace is consumed before the value starts.
pub fn split_key_value(line: &[u8]) -> (&[u8], &[u8]) {
    let limit = line.len();
    let mut key_len = 0;
    let mut value_start = limit;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    while key_len < limit {
        let byte = line[key_len];
        if !preceding_backslash {
            if is_separator(byte) {
                value_start = key_len + 1;
                has_separator = true;
                break;
            }
            if is_line_whitespace(byte) {
                value_start = key_len + 1;
                break;
            }
        }
        preceding_backslash = byte == b'\\' && !preceding_backslash;
        key_len += 1;
    }

    while value_start < limit {
        let byte = line[value_start];
        if !is_line_whitespace(byte) {
            if has_separator || !is_separator(byte) {
                break;
            }
            has_separator = true;
        }
        value_start += 1;
    }

    (&line[..key_len], &line[value_start..])
}

fn is_separator(byte: u8) -> bool {
    byte == b'=' || byte == b':'
}
