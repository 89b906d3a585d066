use std::{fmt, time::Duration};

use super::settings::StreamSettings;

/// Receives `(current_text, is_done)` for every tick of a session.
pub type PartialCallback = Box<dyn FnMut(&str, bool)>;

/// Progress of one in-flight delivery.
///
/// Owned by the [`StreamEngine`](super::StreamEngine) for its whole lifetime
/// and dropped on completion or cancellation.
pub struct StreamSession<K> {
    target: K,
    full_text: String,
    /// Characters delivered so far; never decreases.
    delivered_chars: usize,
    /// Byte offset matching `delivered_chars`, always on a char boundary.
    delivered_bytes: usize,
    total_chars: usize,
    settings: StreamSettings,
    next_due: Duration,
    /// Start order, used to break ties between equal deadlines.
    seq: u64,
    on_partial: PartialCallback,
}

impl<K> StreamSession<K> {
    pub(crate) fn new(
        target: K,
        full_text: String,
        settings: StreamSettings,
        started_at: Duration,
        seq: u64,
        on_partial: PartialCallback,
    ) -> Self {
        let total_chars = full_text.chars().count();
        Self {
            target,
            full_text,
            delivered_chars: 0,
            delivered_bytes: 0,
            total_chars,
            settings,
            next_due: started_at.saturating_add(settings.interval()),
            seq,
            on_partial,
        }
    }

    /// Delivered length in characters.
    pub fn delivered_len(&self) -> usize {
        self.delivered_chars
    }

    /// The prefix handed out by the most recent tick.
    pub fn delivered_text(&self) -> &str {
        &self.full_text[..self.delivered_bytes]
    }

    /// Total length of the target text in characters.
    pub fn total_len(&self) -> usize {
        self.total_chars
    }

    /// Virtual time at which the next tick fires.
    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    /// Moves the delivered prefix forward by one chunk.
    ///
    /// Returns true once the whole text has been delivered.
    pub(crate) fn step(&mut self) -> bool {
        let rest = &self.full_text[self.delivered_bytes..];
        let chunk = self.settings.chunk_size();
        let step_bytes = rest
            .char_indices()
            .nth(chunk)
            .map_or(rest.len(), |(i, _)| i);

        self.delivered_bytes += step_bytes;
        self.delivered_chars = (self.delivered_chars + chunk).min(self.total_chars);
        self.next_due = self.next_due.saturating_add(self.settings.interval());
        self.delivered_bytes == self.full_text.len()
    }

    /// Hands the current prefix to the callback.
    pub(crate) fn notify(&mut self, is_done: bool) {
        let text = &self.full_text[..self.delivered_bytes];
        (self.on_partial)(text, is_done);
    }
}

impl<K: fmt::Debug> fmt::Debug for StreamSession<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSession")
            .field("target", &self.target)
            .field("delivered_chars", &self.delivered_chars)
            .field("total_chars", &self.total_chars)
            .field("settings", &self.settings)
            .field("next_due", &self.next_due)
            .finish_non_exhaustive()
    }
}
