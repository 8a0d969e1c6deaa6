use std::io::{BufWriter, Write};

/// Writes newline-terminated rows and keeps a tally of the bytes emitted.
pub struct LineWriter<W: Write> {
    inner: BufWriter<W>,
    bytes: u64,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            bytes: 0,
        }
    }

    pub fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.bytes = self.bytes.saturating_add(line.len() as u64 + 1);
        Ok(())
    }

    /// Flush buffered rows and return the total byte count.
    pub fn finish(mut self) -> std::io::Result<u64> {
        self.inner.flush()?;
        Ok(self.bytes)
    }
}
