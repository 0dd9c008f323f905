// 📣 Reporter
// Output sink passed into the pipeline; the binary decides where messages end up

use std::cell::RefCell;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*};

// ============================================================================
// REPORTER TRAIT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Detail,
    Info,
    Warn,
    Error,
}

pub trait Reporter {
    /// Console and run log
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// Run log only
    fn detail(&self, message: &str);
}

// ============================================================================
// CONSOLE
// ============================================================================

/// Prints to stdout and mirrors each message into the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        println!("{}", message);
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        println!("{}", message);
        tracing::error!("{}", message);
    }

    fn detail(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

// ============================================================================
// IN-MEMORY
// ============================================================================

/// Keeps every message in memory, in order
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.borrow().iter().any(|(_, m)| m.contains(needle))
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn detail(&self, message: &str) {
        self.push(Level::Detail, message);
    }
}

// ============================================================================
// RUN LOG
// ============================================================================

/// Install the global subscriber writing `timestamp LEVEL: message` lines to
/// `log_path`, appending across runs.
pub fn init_run_log(log_path: &Path) -> std::io::Result<()> {
    let file = File::options().create(true).append(true).open(log_path)?;

    let layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================
