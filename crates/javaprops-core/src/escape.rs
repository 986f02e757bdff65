use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// Every space is escaped.
    Key,
    /// Only a leading space is escaped.
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedEscape {
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),
    #[error("unexpected end of input")]
    Truncated,
}

/// Decodes one raw key or value span. Each byte is one ISO-8859-1 character;
/// anything above U+00FF can only arrive through a `\uXXXX` escape.
pub fn decode_escapes(raw: &[u8]) -> Result<String, MalformedEscape> {
    let mut out = String::with_capacity(raw.len());
    let mut high_surrogate = None;
    let mut offset = 0;
    while offset < raw.len() {
        let byte = raw[offset];
        offset += 1;
        if byte != b'\\' {
            flush_surrogate(&mut out, &mut high_surrogate);
            out.push(char::from(byte));
            continue;
        }
        let Some(&escaped) = raw.get(offset) else {
            break;
        };
        offset += 1;
        if escaped == b'u' {
            let unit = read_hex_unit(raw, offset)?;
            offset += 4;
            push_utf16_unit(&mut out, &mut high_surrogate, unit);
            continue;
        }
        flush_surrogate(&mut out, &mut high_surrogate);
        out.push(match escaped {
            b't' => '\t',
            b'r' => '\r',
            b'n' => '\n',
            b'f' => '\u{000C}',
            other => char::from(other),
        });
    }
    flush_surrogate(&mut out, &mut high_surrogate);
    Ok(out)
}

/// Encodes literal text into the escaped form written to a properties file.
/// The result is pure ASCII.
pub fn encode_escapes(text: &str, mode: EscapeMode) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (idx, ch) in text.chars().enumerate() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '>'..='~' => out.push(ch),
            ' ' => {
                if idx == 0 || mode == EscapeMode::Key {
                    out.push('\\');
                }
                out.push(' ');
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{000C}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => push_unicode_escape(&mut out, ch),
        }
    }
    out
}

pub(crate) fn push_unicode_escape(out: &mut String, ch: char) {
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units) {
        out.push_str("\\u");
        out.push_str(&hex::encode_upper(unit.to_be_bytes()));
    }
}

fn read_hex_unit(raw: &[u8], start: usize) -> Result<u16, MalformedEscape> {
    let digits = &raw[start..raw.len().min(start + 4)];
    if let Some(&bad) = digits.iter().find(|byte| !byte.is_ascii_hexdigit()) {
        return Err(MalformedEscape::InvalidHexDigit(char::from(bad)));
    }
    let mut unit = [0u8; 2];
    hex::decode_to_slice(digits, &mut unit).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, .. } => MalformedEscape::InvalidHexDigit(c),
        _ => MalformedEscape::Truncated,
    })?;
    Ok(u16::from_be_bytes(unit))
}

fn push_utf16_unit(out: &mut String, high_surrogate: &mut Option<u16>, unit: u16) {
    if let Some(high) = high_surrogate.take() {
        if (0xDC00..=0xDFFF).contains(&unit) {
            out.extend(
                char::decode_utf16([high, unit])
                    .map(|ch| ch.unwrap_or(char::REPLACEMENT_CHARACTER)),
            );
            return;
        }
        push_unpaired(out, high);
    }
    if (0xD800..=0xDBFF).contains(&unit) {
        *high_surrogate = Some(unit);
        return;
    }
    match char::from_u32(u32::from(unit)) {
        Some(ch) => out.push(ch),
        None => push_unpaired(out, unit),
    }
}

fn flush_surrogate(out: &mut String, high_surrogate: &mut Option<u16>) {
    if let Some(high) = high_surrogate.take() {
        push_unpaired(out, high);
    }
}

fn push_unpaired(out: &mut String, unit: u16) {
    warn!(unit, "unpaired surrogate escape replaced with U+FFFD");
    out.push(char::REPLACEMENT_CHARACTER);
}
