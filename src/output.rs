// src/output.rs

//! Where user-facing progress lines go.
//!
//! Diagnostics use `tracing` and end up on stderr; the lines produced by
//! the formatters are written to an `OutputSink`.

/// Destination for display lines.
pub trait OutputSink: Send + Sync {
    fn line(&self, text: &str);

    fn lines(&self, lines: &[String]) {
        for line in lines {
            self.line(line);
        }
    }
}

/// Writes every line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}
