use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    #[error("chunk size must be at least one character")]
    ZeroChunkSize,
}

/// Cadence of a simulated stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    chunk_size: usize,
    interval: Duration,
}

impl StreamSettings {
    pub const DEFAULT_CHUNK_SIZE: usize = 2;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(30);

    /// Builds settings, rejecting a zero chunk size (the stream would never end).
    pub fn new(chunk_size: usize, interval: Duration) -> Result<Self, StreamError> {
        if chunk_size == 0 {
            return Err(StreamError::ZeroChunkSize);
        }
        Ok(Self {
            chunk_size,
            interval,
        })
    }

    /// Characters delivered per tick.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks needed to deliver `char_count` characters.
    ///
    /// An empty text still takes one tick to report completion.
    pub fn ticks_for(&self, char_count: usize) -> usize {
        char_count.div_ceil(self.chunk_size).max(1)
    }
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}
