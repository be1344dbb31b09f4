use std::io::{BufRead, Write};

/// Where commands come from.
pub trait LineSource {
    /// Reads the next line, without its line terminator.
    ///
    /// Bytes that aren't valid UTF-8 become replacement characters, so a
    /// garbled line is still a line.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Where responses go.
pub trait LineSink {
    /// Writes `line` without surrounding whitespace, followed by a newline.
    fn write_line(&mut self, line: &str) -> anyhow::Result<()>;
}

pub struct ReaderSource<R> {
    reader: R,
    // A re-usable buffer for IO.
    buf: Vec<u8>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        self.buf.clear(); // because read_until() appends to the buffer
        let num_bytes_read = self.reader.read_until(b'\n', &mut self.buf)?;
        if num_bytes_read == 0 {
            return Ok(None);
        }
        let line = self.buf.strip_suffix(b"\n").unwrap_or(self.buf.as_slice());
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line.trim())?;
        self.writer.flush()?;
        Ok(())
    }
}
