//! Rule result: violation flag plus optional diagnostic text.

pub mod finding;
pub mod sink;

use std::borrow::Cow;

use tlsaudit_core::config::OutputConfig;
use tlsaudit_core::errors::OutputError;

pub use finding::{Finding, ItemIdentifier};
pub use sink::DiagnosticSink;

/// Accumulates the outcome of one or more validation runs.
///
/// A default-constructed result is boolean-only: it records whether any
/// violation was found and never touches its sink. Call [`init_output`]
/// (or use [`with_output`]) to also capture one diagnostic line per
/// violation.
///
/// Results compose: validating several rules or policies into the same
/// result accumulates their findings; nothing is reset between runs.
///
/// [`init_output`]: RuleResult::init_output
/// [`with_output`]: RuleResult::with_output
#[derive(Debug, Default)]
pub struct RuleResult {
    found_error: bool,
    write_output: bool,
    output: DiagnosticSink,
}

impl RuleResult {
    /// A boolean-only result.
    pub fn new() -> Self {
        Self::default()
    }

    /// A result that captures diagnostic text.
    pub fn with_output() -> Self {
        let mut result = Self::new();
        result.init_output();
        result
    }

    /// A result that captures diagnostic text up to `limit` bytes.
    pub fn with_output_limit(limit: usize) -> Self {
        Self {
            found_error: false,
            write_output: true,
            output: DiagnosticSink::with_limit(limit),
        }
    }

    /// A result shaped by output configuration.
    pub fn from_config(config: &OutputConfig) -> Self {
        match (config.effective_diagnostics(), config.max_bytes) {
            (false, _) => Self::new(),
            (true, Some(limit)) => Self::with_output_limit(limit),
            (true, None) => Self::with_output(),
        }
    }

    /// Enable diagnostic capture with an empty, zero-capacity sink.
    pub fn init_output(&mut self) {
        self.output = DiagnosticSink::growable();
        self.write_output = true;
    }

    /// Whether any violation has been recorded.
    pub fn found_error(&self) -> bool {
        self.found_error
    }

    pub fn writes_output(&self) -> bool {
        self.write_output
    }

    /// Accumulated diagnostic bytes; empty in boolean-only mode.
    pub fn output(&self) -> &[u8] {
        self.output.as_bytes()
    }

    /// Accumulated diagnostics as text.
    pub fn output_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.output.as_bytes())
    }

    /// One entry per recorded finding, without the trailing newline. Names
    /// containing line breaks stay inside their own entry.
    pub fn diagnostics(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        self.output.lines().map(String::from_utf8_lossy)
    }

    /// Record one predicate outcome. Passing outcomes leave no trace; a
    /// failure sets the violation flag before any text is written.
    pub fn process(&mut self, passed: bool, finding: &Finding<'_>) -> Result<(), OutputError> {
        if passed {
            return Ok(());
        }
        self.found_error = true;

        if !self.write_output {
            return Ok(());
        }
        self.output.write_line(format_args!("{finding}"))
    }

    /// Release diagnostic storage and reset to the boolean-only zero state.
    /// Safe to call more than once, or on a result that never captured
    /// output.
    pub fn free(&mut self) {
        *self = Self::default();
    }
}
