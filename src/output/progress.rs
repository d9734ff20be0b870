//! Human-readable progress messages.
//!
//! These are status lines for the person running the report, separate from
//! the `log` output which always goes to stderr.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Stdout,
    Stderr,
    Silent,
}

impl Progress {
    pub fn info(&self, msg: &str) {
        self.emit(format!("🔍 {msg}"));
    }

    pub fn ok(&self, msg: &str) {
        self.emit(format!("✅ {msg}"));
    }

    pub fn warn(&self, msg: &str) {
        self.emit(format!("⚠️  {}", msg.yellow()));
    }

    pub fn fail(&self, msg: &str) {
        self.emit(format!("❌ {}", msg.red()));
    }

    fn emit(&self, line: String) {
        match self {
            Progress::Stdout => println!("{line}"),
            Progress::Stderr => eprintln!("{line}"),
            Progress::Silent => {}
        }
    }
}
