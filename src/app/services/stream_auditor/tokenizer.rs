//! Quote-aware row tokenization for delimited streams
//!
//! The tokenizer consumes its reader incrementally and yields one row per
//! pull, so arbitrarily large feeds are processed without holding more than
//! the current row in memory. It does not attempt full RFC-4180
//! conformance: quotes toggle delimiter/newline interpretation but
//! are retained in the field text, and stripping them is the consumer's
//! concern.

use std::io::BufRead;

use crate::Result;
use crate::constants::QUOTE_BYTE;

/// One logical record: the ordered fields of a single row
pub type Row = Vec<String>;

/// Pull-based tokenizer over a buffered byte stream
///
/// State is carried explicitly between pulls: whether the cursor sits
/// inside a quoted span, and whether the final pending row has already been
/// emitted. A tokenizer is bound to one stream and is forward-only.
#[derive(Debug)]
pub struct RowTokenizer<R> {
    reader: R,
    delimiter: u8,
    in_quotes: bool,
    finished: bool,
}

impl<R: BufRead> RowTokenizer<R> {
    /// Create a tokenizer for the given reader and field delimiter
    pub fn new(reader: R, delimiter: char) -> Self {
        Self {
            reader,
            delimiter: delimiter as u8,
            in_quotes: false,
            finished: false,
        }
    }

    /// Read the next row from the stream.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. The row pending at
    /// end-of-stream is emitted exactly once: input without a trailing
    /// newline yields its last partial row, input with a trailing newline
    /// yields one final empty row that callers are expected to skip.
    pub fn read_row(&mut self) -> Result<Option<Row>> {
        if self.finished {
            return Ok(None);
        }

        let mut fields: Row = Vec::new();
        let mut field: Vec<u8> = Vec::new();

        loop {
            let byte = match self.next_byte()? {
                Some(byte) => byte,
                None => {
                    self.finished = true;
                    if !field.is_empty() || !fields.is_empty() {
                        fields.push(into_field(field));
                    }
                    return Ok(Some(fields));
                }
            };

            if self.in_quotes {
                if byte == QUOTE_BYTE {
                    self.in_quotes = false;
                }
                // Delimiters and newlines inside quotes are literal content
                field.push(byte);
                continue;
            }

            match byte {
                b if b == self.delimiter => {
                    fields.push(into_field(std::mem::take(&mut field)));
                }
                b'\n' => {
                    if field.last() == Some(&b'\r') {
                        field.pop();
                    }
                    fields.push(into_field(field));
                    return Ok(Some(fields));
                }
                QUOTE_BYTE => {
                    self.in_quotes = true;
                    field.push(byte);
                }
                _ => field.push(byte),
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let buffer = self.reader.fill_buf()?;
        if buffer.is_empty() {
            return Ok(None);
        }
        let byte = buffer[0];
        self.reader.consume(1);
        Ok(Some(byte))
    }
}

fn into_field(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}
