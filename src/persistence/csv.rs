//! A minimal comma-separated reader and writer pair, just enough for the
//! dashboard files: comma delimiters, one record per line, double-quote
//! escaping for fields that carry commas, quotes or line breaks.
//!
//! The files this store manages are a few rows long, so there is no
//! buffering cleverness here; records are parsed line by line.

use std::io::{self, BufRead, Write};

pub struct CsvReader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CsvReader<R> {
    pub fn new(reader: R) -> CsvReader<R> {
        CsvReader { reader }
    }

    fn read_raw_line(&mut self) -> io::Result<Option<String>> {
        //! Pull one physical line from the input, without its line
        //! terminator. Returns [`None`] at end of input.

        let mut line = String::new();
        let n_read = self.reader.read_line(&mut line)?;

        if n_read == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = match self.read_raw_line() {
            Ok(Some(line)) => line,
            Ok(None) => return None,
            Err(error) => return Some(Err(error)),
        };

        let mut record = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        loop {
            let mut chars = line.chars().peekable();

            while let Some(c) = chars.next() {
                match c {
                    '"' if in_quotes => {
                        // A doubled quote inside a quoted field is a
                        // literal quote.
                        if chars.peek() == Some(&'"') {
                            field.push('"');
                            chars.next();
                        } else {
                            in_quotes = false;
                        }
                    }
                    '"' => in_quotes = true,
                    ',' if !in_quotes => record.push(std::mem::take(&mut field)),
                    _ => field.push(c),
                }
            }

            if !in_quotes {
                break;
            }

            // The record had a quoted line break; keep consuming physical
            // lines until the quote closes.
            match self.read_raw_line() {
                Ok(Some(next_line)) => {
                    field.push('\n');
                    line = next_line;
                }
                Ok(None) => break,
                Err(error) => return Some(Err(error)),
            }
        }

        record.push(field);
        Some(Ok(record))
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> CsvWriter<W> {
        CsvWriter { writer }
    }

    pub fn write_record(&mut self, record: &[String]) -> io::Result<()> {
        //! Write one record as a single line, quoting only the fields
        //! that need it.

        let mut first = true;

        for field in record {
            if !first {
                write!(self.writer, ",")?;
            }
            first = false;

            let needs_quotes =
                field.contains(',') || field.contains('"') || field.contains('\n');

            if needs_quotes {
                write!(self.writer, "\"{}\"", field.replace('"', "\"\""))?;
            } else {
                write!(self.writer, "{}", field)?;
            }
        }

        writeln!(self.writer)?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
