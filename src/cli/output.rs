//! Diagnostic output
//!
//! The interactive transcript goes through [`super::Console`]; this helper
//! only carries `--verbose` diagnostics, which always go to stderr so they
//! never interleave with prompts.

/// Verbose diagnostics helper
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
