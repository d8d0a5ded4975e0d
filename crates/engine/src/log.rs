// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented build log sinks.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Sink for human-readable build log lines, one operation per line.
///
/// Passed explicitly through every cleanup call; there is no global log.
pub trait BuildLog: Send + Sync {
    fn println(&self, line: &str);
}

/// Writes each line to an `io::Write` (stdout, a log file).
///
/// Write failures are traced and dropped; logging must not break a pass.
pub struct WriterLog<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> BuildLog for WriterLog<W> {
    fn println(&self, line: &str) {
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, "failed to write build log line");
        }
    }
}

/// Collects lines in memory.
#[derive(Clone, Default)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether any line equals `line` exactly.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.lock().iter().any(|l| l == line)
    }
}

impl BuildLog for MemoryLog {
    fn println(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
