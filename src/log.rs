//! The battle log: an append-only, drain-on-read event channel.
//!
//! Producers inside the engine push human-readable lines; the presentation
//! layer drains everything since the last drain in one call. Blank lines
//! and structural separators are filtered at the push site so consumers
//! only ever see real events.

/// Drain-on-read buffer of battle event descriptions.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    entries: Vec<String>,
}

impl BattleLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event line. Blank strings and separator-only lines
    /// (`---` / `===` prefixes) are dropped.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        let trimmed = message.trim();
        if trimmed.is_empty() || trimmed.starts_with("---") || trimmed.starts_with("===") {
            return;
        }
        tracing::debug!(target: "battle_engine::log", "{message}");
        self.entries.push(message);
    }

    /// Return all buffered lines since the last drain and clear the buffer.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.entries)
    }

    /// Number of buffered lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Peek at the buffered lines without draining.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
