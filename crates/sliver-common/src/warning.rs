//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The set of already-printed warnings lives in the [`Reporter`] value, so
//! separate reporters (and separate parses) never share state.

use std::collections::HashSet;

use owo_colors::OwoColorize;

/// Prints component-tagged warnings, each unique message at most once.
///
/// # Example
/// ```
/// use sliver_common::warning::Reporter;
///
/// let mut reporter = Reporter::muted();
/// reporter.warn_once("HTML", "doctype skipped");
/// reporter.warn_once("HTML", "doctype skipped");
/// assert_eq!(reporter.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Reporter {
    /// Messages we've already printed, keyed as `[component] message`.
    warned: HashSet<String>,
    /// When set, warnings are still recorded but never printed.
    muted: bool,
}

impl Reporter {
    /// Create a reporter that prints to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter that records warnings without printing them.
    #[must_use]
    pub fn muted() -> Self {
        Self {
            warned: HashSet::new(),
            muted: true,
        }
    }

    /// Warn about a non-fatal condition (prints once per unique message).
    pub fn warn_once(&mut self, component: &str, message: &str) {
        let first = self.warned.insert(format!("[{component}] {message}"));
        if first && !self.muted {
            eprintln!("{}", format!("[sliver {component}] ⚠ {message}").yellow());
        }
    }

    /// Number of distinct warnings seen so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.warned.len()
    }

    /// Forget all recorded warnings (call before parsing a new document).
    pub fn clear(&mut self) {
        self.warned.clear();
    }
}
