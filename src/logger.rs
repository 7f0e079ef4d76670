//! Session-scoped logging.
//!
//! The logger is owned by the session and passed in explicitly; there is no
//! process-wide singleton. Logging is off unless the config names a file,
//! since the terminal itself belongs to the TUI.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Utc;

use crate::error::Result;

pub struct SessionLogger {
    file: Option<File>,
}

impl SessionLogger {
    /// A logger that drops everything.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Append to `path`, creating it if needed.
    pub fn to_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Some(file) })
    }

    pub fn info(&mut self, msg: &str) {
        self.write("INFO", msg);
    }

    pub fn warn(&mut self, msg: &str) {
        self.write("WARN", msg);
    }

    pub fn error(&mut self, msg: &str) {
        self.write("ERROR", msg);
    }

    fn write(&mut self, level: &str, msg: &str) {
        if let Some(file) = self.file.as_mut() {
            let ts = Utc::now().format("%Y-%m-%d %H:%M:%S");
            // A failed log write must never take down the session.
            let _ = writeln!(file, "[{level}] {ts} {msg}");
        }
    }
}
