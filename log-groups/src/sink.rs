//! Line sinks
//!
//! A sink is the single place group markers (and, through the decorator,
//! rendered output) are written to. Every write is one complete line.

use crate::types::Result;
use std::io::Write;

/// Destination for output lines
pub trait LineSink {
    /// Write one line; the sink supplies the line terminator
    fn emit(&mut self, line: &str) -> Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) -> Result<()> {
        (**self).emit(line)
    }
}

/// Sink writing newline-terminated lines to any `io::Write`
///
/// Each line is flushed immediately so markers never trail the output they
/// bracket when other writers share the same stream.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Sink collecting lines in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for MemorySink {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GroupError;
    use std::io;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_sink_terminates_lines() {
        let mut sink = WriteSink::new(Vec::new());
        sink.emit("::group::ROLE [web]").unwrap();
        sink.emit("::endgroup::").unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "::group::ROLE [web]\n::endgroup::\n");
    }

    #[test]
    fn test_write_sink_propagates_io_error() {
        let mut sink = WriteSink::new(ClosedPipe);
        let err = sink.emit("::endgroup::").unwrap_err();

        match err {
            GroupError::Sink(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        }
    }

    fn emit_pair(mut sink: impl LineSink) {
        sink.emit("one").unwrap();
        sink.emit("two").unwrap();
    }

    #[test]
    fn test_memory_sink_through_reference() {
        let mut sink = MemorySink::new();
        emit_pair(&mut sink);
        assert_eq!(sink.lines(), ["one", "two"]);
    }
}
