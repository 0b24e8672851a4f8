//! Delimited text tables over byte streams.
//!
//! [`DelimReader`] turns each line of a [`BufRead`] into a row of fields and
//! [`DelimWriter`] writes rows back out. Delimiter arguments are symbol sets,
//! as elsewhere in [`strings`](crate::strings).

use std::io::{self, BufRead, Write};

/// Field delimiters used by [`DelimReader::new`].
pub const DEFAULT_DELIMITERS: &str = "\t\n\r ";

/// Splits `line` into fields.
///
/// When `single` is false, runs of delimiters count as one and leading or
/// trailing delimiters produce no fields. When it is true, every delimiter
/// separates two fields, so empty fields survive; only a single trailing
/// empty field is dropped.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::split_fields;
///
/// assert_eq!(split_fields("  a \t b ", " \t", false), ["a", "b"]);
/// assert_eq!(split_fields("a,,b,", ",", true), ["a", "", "b"]);
/// ```
#[must_use]
pub fn split_fields(line: &str, delimiters: &str, single: bool) -> Vec<String> {
    let is_delim = |c: char| delimiters.contains(c);
    if single {
        let mut fields: Vec<String> = line.split(is_delim).map(str::to_string).collect();
        if fields.last().is_some_and(String::is_empty) {
            fields.pop();
        }
        fields
    } else {
        line.split(is_delim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Reads rows of delimited fields, one row per line.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use xhelpers::strings::DelimReader;
///
/// let input = Cursor::new("name size\nreport.txt 512\n");
/// let rows = DelimReader::new(input).read_table().unwrap();
/// assert_eq!(rows, [["name", "size"], ["report.txt", "512"]]);
/// ```
#[derive(Debug)]
pub struct DelimReader<R> {
    reader: R,
    delimiters: String,
    line_delimiter: u8,
    single: bool,
}

impl<R: BufRead> DelimReader<R> {
    /// Reads whitespace-separated fields from newline-terminated lines,
    /// collapsing runs of delimiters.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            delimiters: DEFAULT_DELIMITERS.to_string(),
            line_delimiter: b'\n',
            single: false,
        }
    }

    /// Sets the field delimiter symbols.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: &str) -> Self {
        self.delimiters = delimiters.to_string();
        self
    }

    /// Sets the byte that ends a row.
    #[must_use]
    pub fn with_line_delimiter(mut self, line_delimiter: u8) -> Self {
        self.line_delimiter = line_delimiter;
        self
    }

    /// Treats every delimiter as a field boundary, keeping empty fields.
    #[must_use]
    pub fn with_single_delimiters(mut self, single: bool) -> Self {
        self.single = single;
        self
    }

    /// Reads the next row, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns the reader's I/O error, or `InvalidData` for a line that is
    /// not UTF-8.
    pub fn read_row(&mut self) -> io::Result<Option<Vec<String>>> {
        let mut buffer = Vec::new();
        if self.reader.read_until(self.line_delimiter, &mut buffer)? == 0 {
            return Ok(None);
        }
        if buffer.last() == Some(&self.line_delimiter) {
            buffer.pop();
        }
        let line = String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(split_fields(&line, &self.delimiters, self.single)))
    }

    /// Reads every remaining row.
    ///
    /// # Errors
    ///
    /// Stops at the first failing row, see [`DelimReader::read_row`].
    pub fn read_table(&mut self) -> io::Result<Vec<Vec<String>>> {
        self.by_ref().collect()
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for DelimReader<R> {
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}

/// Writes rows of fields joined by a delimiter.
///
/// # Examples
///
/// ```
/// use xhelpers::strings::DelimWriter;
///
/// let mut writer = DelimWriter::new(Vec::new()).with_delimiter(";");
/// writer.write_row(&["a", "b"]).unwrap();
/// writer.write_row(&["c"]).unwrap();
/// assert_eq!(writer.into_inner(), b"a;b\nc\n");
/// ```
#[derive(Debug)]
pub struct DelimWriter<W> {
    writer: W,
    delimiter: String,
    line_delimiter: String,
}

impl<W: Write> DelimWriter<W> {
    /// Tab-separated fields, newline-terminated rows.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: "\t".to_string(),
            line_delimiter: "\n".to_string(),
        }
    }

    /// Sets the text written between fields.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    /// Sets the text written after each row.
    #[must_use]
    pub fn with_line_delimiter(mut self, line_delimiter: &str) -> Self {
        self.line_delimiter = line_delimiter.to_string();
        self
    }

    /// Writes the fields of one row without the row terminator.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error.
    pub fn write_fields<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(self.delimiter.as_bytes())?;
            }
            self.writer.write_all(field.as_ref().as_bytes())?;
        }
        Ok(())
    }

    /// Writes one row followed by the row terminator.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error.
    pub fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        self.write_fields(fields)?;
        self.writer.write_all(self.line_delimiter.as_bytes())
    }

    /// Writes every row of `table`.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error.
    pub fn write_table<S: AsRef<str>>(&mut self, table: &[Vec<S>]) -> io::Result<()> {
        table.iter().try_for_each(|row| self.write_row(row.as_slice()))
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
