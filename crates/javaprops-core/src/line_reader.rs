use std::io::{self, Read};

const INPUT_BUFFER_SIZE: usize = 8192;
const LINE_BUFFER_SIZE: usize = 1024;

/// Assembles logical lines from a byte stream: comment and blank lines are
/// skipped, leading whitespace is dropped and a line ending in an odd run of
/// backslashes is joined with the next physical line.
pub struct LineReader<R> {
    reader: R,
    input: Vec<u8>,
    input_len: usize,
    input_pos: usize,
    line: Vec<u8>,
    physical_lines: u32,
    after_cr: bool,
    line_start: u32,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            input: vec![0; INPUT_BUFFER_SIZE],
            input_len: 0,
            input_pos: 0,
            line: Vec::with_capacity(LINE_BUFFER_SIZE),
            physical_lines: 0,
            after_cr: false,
            line_start: 0,
        }
    }

    /// Returns the raw bytes of the next logical line, or `None` once the
    /// stream is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        let mut skip_whitespace = true;
        let mut is_comment = false;
        let mut is_new_line = true;
        let mut appended_line_begin = false;
        let mut preceding_backslash = false;
        let mut skip_lf = false;
        let mut started = false;

        loop {
            let Some(byte) = self.next_byte()? else {
                if self.line.is_empty() || is_comment {
                    return Ok(None);
                }
                if preceding_backslash {
                    self.line.pop();
                }
                return Ok(Some(&self.line));
            };

            if skip_lf {
                skip_lf = false;
                if byte == b'\n' {
                    continue;
                }
            }

            if skip_whitespace {
                if is_line_whitespace(byte) {
                    continue;
                }
                if !appended_line_begin && is_terminator(byte) {
                    continue;
                }
                skip_whitespace = false;
                appended_line_begin = false;
            }

            if is_new_line {
                is_new_line = false;
                if byte == b'#' || byte == b'!' {
                    is_comment = true;
                    continue;
                }
            }

            if !is_terminator(byte) {
                if is_comment {
                    continue;
                }
                if !started {
                    started = true;
                    self.line_start = self.physical_lines.saturating_add(1);
                }
                self.line.push(byte);
                preceding_backslash = byte == b'\\' && !preceding_backslash;
                continue;
            }

            if is_comment || self.line.is_empty() {
                is_comment = false;
                is_new_line = true;
                skip_whitespace = true;
                preceding_backslash = false;
                started = false;
                self.line.clear();
                continue;
            }

            if preceding_backslash {
                self.line.pop();
                skip_whitespace = true;
                appended_line_begin = true;
                preceding_backslash = false;
                skip_lf = byte == b'\r';
                continue;
            }

            return Ok(Some(&self.line));
        }
    }

    /// The 1-based physical line on which the last logical line started.
    pub fn line_number(&self) -> u32 {
        self.line_start
    }

    /// Number of line terminators consumed so far.
    pub fn physical_lines(&self) -> u32 {
        self.physical_lines
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.input_pos >= self.input_len {
            self.input_len = self.fill()?;
            self.input_pos = 0;
            if self.input_len == 0 {
                return Ok(None);
            }
        }
        let byte = self.input[self.input_pos];
        self.input_pos += 1;
        self.count_terminator(byte);
        Ok(Some(byte))
    }

    fn fill(&mut self) -> io::Result<usize> {
        loop {
            match self.reader.read(&mut self.input) {
                Ok(len) => return Ok(len),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    fn count_terminator(&mut self, byte: u8) {
        match byte {
            b'\r' => {
                self.physical_lines = self.physical_lines.saturating_add(1);
                self.after_cr = true;
            }
            b'\n' => {
                if !self.after_cr {
                    self.physical_lines = self.physical_lines.saturating_add(1);
                }
                self.after_cr = false;
            }
            _ => self.after_cr = false,
        }
    }
}

pub(crate) fn is_line_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | 0x0C)
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}
