//! Handing diagnostics to the host's warning output.

use crate::diagnostic::Diagnostic;
use std::sync::{Arc, Mutex};

/// The host's warning reporter. It attaches the source location of the form
/// currently being compiled.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, category: &str, message: &str);
}

/// Formats diagnostics and passes them to a sink.
pub struct Emitter {
    sink: Box<dyn DiagnosticSink>,
}

impl Emitter {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    pub fn emit(&self, diagnostic: &Diagnostic) {
        let message = diagnostic.message();
        tracing::trace!(rule = diagnostic.rule, %message, "emitting diagnostic");
        self.sink.warn(diagnostic.category, &message);
    }
}

/// Sink that keeps every warning in memory.
///
/// Clones share the same buffer, so a host can keep one clone and hand the
/// other to the engine.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    warnings: Arc<Mutex<Vec<(String, String)>>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(category, message)` pairs in emission order.
    pub fn warnings(&self) -> Vec<(String, String)> {
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.warnings()
            .into_iter()
            .map(|(_, message)| message)
            .collect()
    }

    pub fn take(&self) -> Vec<(String, String)> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl DiagnosticSink for CollectSink {
    fn warn(&self, category: &str, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((category.to_string(), message.to_string()));
    }
}

/// Sink that prints `Warning (simplify): ...` to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink {
    pub colors: bool,
}

impl StderrSink {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    pub fn format(&self, category: &str, message: &str) -> String {
        let label = format!("Warning ({category}):");
        if self.colors {
            let label = nu_ansi_term::Color::Yellow.bold().paint(label);
            format!("{label} {message}")
        } else {
            format!("{label} {message}")
        }
    }
}

impl DiagnosticSink for StderrSink {
    fn warn(&self, category: &str, message: &str) {
        eprintln!("{}", self.format(category, message));
    }
}
