//! Program notifications, kept for the session and saveable to disk.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;

/// How loud a notification is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Normal,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Normal => "NORMAL",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Collects program notifications in arrival order.
///
/// Every push is mirrored to the [`log`] facade at the matching level, so the
/// live console sees messages as they happen while the notifier keeps the
/// full transcript for saving at shutdown. Hand it to whoever needs to report
/// instead of reaching for a global.
#[derive(Debug, Default)]
pub struct Notifier {
    messages: Vec<(Severity, String)>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Records a notification and mirrors it to the logger.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Normal => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
        self.messages.push((severity, message));
    }

    /// The newest message of this severity, if any arrived.
    pub fn latest(&self, severity: Severity) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|(recorded, _)| *recorded == severity)
            .map(|(_, message)| message.as_str())
    }

    /// Everything recorded so far, in arrival order.
    #[inline]
    pub fn messages(&self) -> &[(Severity, String)] {
        &self.messages
    }

    /// Whether anything was pushed at [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|(severity, _)| *severity == Severity::Error)
    }

    /// The transcript as one `[SEVERITY] message` line per notification.
    pub fn transcript(&self) -> String {
        let mut text = String::new();
        for (severity, message) in &self.messages {
            text.push_str(&format!("[{severity}] {message}\n"));
        }
        text
    }

    /// Writes the transcript to `path`, replacing whatever was there.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.transcript())
            .with_context(|| format!("writing notification log to {}", path.display()))?;
        log::debug!(
            "saved {} notification(s) to {}",
            self.messages.len(),
            path.display()
        );
        Ok(())
    }
}
