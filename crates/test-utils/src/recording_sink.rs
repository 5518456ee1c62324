use std::sync::{Arc, Mutex};

use sfdxrun::output::OutputSink;

/// Sink that keeps every line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l == line)
    }
}

impl OutputSink for RecordingSink {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}
