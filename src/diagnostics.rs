//! Non-fatal diagnostics for degraded checker construction.
//!
//! A handful of factory functions accept dynamic arguments and must never
//! fail at construction time; when handed something malformed they degrade
//! to an always-pass checker and report through a [`DiagnosticSink`]. The
//! sink is caller-suppliable so the report is observable without this
//! crate mandating a logging mechanism: the default [`TracingSink`] emits
//! through the `tracing` facade and is inert unless the host installs a
//! subscriber.

/// Receiver for non-fatal construction diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Reports one diagnostic message.
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at WARN level.
///
/// This is the default sink. Without a subscriber installed it discards
/// everything, which makes it a no-op in hosts that do not opt in.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "gatecheck", "{message}");
    }
}

/// Discards all diagnostics unconditionally.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _message: &str) {}
}

/// Any `Fn(&str)` works as a sink, which keeps tests and ad-hoc collectors
/// free of boilerplate.
///
/// ```rust
/// use gatecheck::DiagnosticSink;
/// use std::sync::Mutex;
///
/// let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
/// let sink = |message: &str| seen.lock().unwrap().push(message.to_string());
/// sink.warn("degraded");
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn warn(&self, message: &str) {
        self(message)
    }
}
