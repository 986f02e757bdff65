use std::io::{self, BufWriter, Write};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::escape::{EscapeMode, encode_escapes, push_unicode_escape};
use crate::options::StoreOptions;
use crate::properties::Properties;

/// Writes `props` with the default options.
pub fn store<W: Write>(writer: W, props: &Properties<'_>, comment: Option<&str>) -> io::Result<()> {
    props.store(writer, comment)
}

impl Properties<'_> {
    pub fn store<W: Write>(&self, writer: W, comment: Option<&str>) -> io::Result<()> {
        self.store_with(writer, comment, &StoreOptions::default())
    }

    /// Writes the local entries, one `key=value` line each, in ISO-8859-1.
    /// Entries inherited from the defaults list are not written.
    pub fn store_with<W: Write>(
        &self,
        writer: W,
        comment: Option<&str>,
        options: &StoreOptions,
    ) -> io::Result<()> {
        self.write_document(writer, comment, options, Utc::now())
    }

    fn write_document<W: Write>(
        &self,
        writer: W,
        comment: Option<&str>,
        options: &StoreOptions,
        generated_at: DateTime<Utc>,
    ) -> io::Result<()> {
        let eol = options.line_ending.as_str();
        let mut out = BufWriter::new(writer);
        let mut text = String::new();
        if let Some(comment) = comment {
            push_comment(&mut text, comment, eol);
        }
        if options.timestamp {
            text.push('#');
            text.push_str(&format_timestamp(generated_at));
            text.push_str(eol);
        }
        write_latin1(&mut out, &text)?;

        for (key, value) in self.iter() {
            text.clear();
            text.push_str(&encode_escapes(key, EscapeMode::Key));
            text.push('=');
            text.push_str(&encode_escapes(value, EscapeMode::Value));
            text.push_str(eol);
            write_latin1(&mut out, &text)?;
        }
        out.flush()?;
        debug!(entries = self.len(), "properties stored");
        Ok(())
    }
}

fn push_comment(out: &mut String, comment: &str, eol: &str) {
    out.push('#');
    let mut chars = comment.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(eol);
                if !matches!(chars.peek(), Some('#' | '!')) {
                    out.push('#');
                }
            }
            '\u{0000}'..='\u{00FF}' => out.push(ch),
            _ => push_unicode_escape(out, ch),
        }
    }
    out.push_str(eol);
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%a %b %d %H:%M:%S UTC %Y").to_string()
}

fn write_latin1<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let bytes: Vec<u8> = text
        .chars()
        .map(|ch| u8::try_from(ch).unwrap_or(b'?'))
        .collect();
    out.write_all(&bytes)
}
