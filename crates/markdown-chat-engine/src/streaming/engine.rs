use std::{collections::HashMap, fmt, hash::Hash, time::Duration};

use super::{
    session::{PartialCallback, StreamSession},
    settings::StreamSettings,
};

/// What `start` did to the target id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// No session existed for the id.
    Started,
    /// An active session for the id was cancelled and replaced.
    Superseded,
}

/// Delivers texts in fixed-size increments at a fixed cadence.
///
/// The engine owns the session registry (one session per target id) and a
/// virtual clock. Callers drive time with [`advance`](Self::advance),
/// [`run_until_idle`](Self::run_until_idle) or
/// [`run_blocking`](Self::run_blocking); callbacks run synchronously inside
/// those calls.
pub struct StreamEngine<K> {
    settings: StreamSettings,
    sessions: HashMap<K, StreamSession<K>>,
    now: Duration,
    next_seq: u64,
}

impl<K> StreamEngine<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new(settings: StreamSettings) -> Self {
        Self {
            settings,
            sessions: HashMap::new(),
            now: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Begins streaming `full_text` to `target`.
    ///
    /// The first tick fires one interval from now. If `target` already has an
    /// active session it is cancelled before the new one is registered, so its
    /// callback never fires again.
    pub fn start<F>(
        &mut self,
        target: K,
        full_text: impl Into<String>,
        on_partial: F,
    ) -> StartOutcome
    where
        F: FnMut(&str, bool) + 'static,
    {
        let outcome = if self.cancel(&target) {
            log::debug!("superseded active stream for {target:?}");
            StartOutcome::Superseded
        } else {
            StartOutcome::Started
        };

        let seq = self.next_seq;
        self.next_seq += 1;

        let on_partial: PartialCallback = Box::new(on_partial);
        let session = StreamSession::new(
            target.clone(),
            full_text.into(),
            self.settings,
            self.now,
            seq,
            on_partial,
        );
        log::debug!(
            "starting stream for {target:?}: {} chars in chunks of {}",
            session.total_len(),
            self.settings.chunk_size()
        );
        self.sessions.insert(target, session);
        outcome
    }

    /// Stops the session for `target`. Returns false if none was active.
    ///
    /// Cancelling twice is harmless.
    pub fn cancel(&mut self, target: &K) -> bool {
        match self.sessions.remove(target) {
            Some(session) => {
                log::debug!(
                    "cancelled stream for {target:?} at {}/{} chars",
                    session.delivered_len(),
                    session.total_len()
                );
                true
            }
            None => false,
        }
    }

    /// Stops every active session, returning how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.sessions.len();
        if n > 0 {
            log::debug!("cancelled {n} active streams");
        }
        self.sessions.clear();
        n
    }

    pub fn is_active(&self, target: &K) -> bool {
        self.sessions.contains_key(target)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Characters delivered so far to `target`, if it is streaming.
    pub fn delivered_len(&self, target: &K) -> Option<usize> {
        self.sessions.get(target).map(StreamSession::delivered_len)
    }

    /// Virtual time of the earliest pending tick.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.sessions.values().map(StreamSession::next_due).min()
    }

    /// Moves the clock forward by `elapsed`, firing every tick that falls due.
    ///
    /// Ticks fire in deadline order; equal deadlines fire in start order.
    /// Returns the number of ticks fired. The clock saturates at
    /// `Duration::MAX`.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let deadline = self.now.saturating_add(elapsed);
        let mut fired = 0;
        while let Some(target) = self.due_by(deadline) {
            self.fire(&target);
            fired += 1;
        }
        self.now = deadline;
        fired
    }

    /// Advances virtual time until no session is left.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.next_deadline() {
            fired += self.advance(due.saturating_sub(self.now));
        }
        fired
    }

    /// Like [`run_until_idle`](Self::run_until_idle), but sleeps in real time
    /// until each deadline.
    pub fn run_blocking(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.next_deadline() {
            let wait = due.saturating_sub(self.now);
            std::thread::sleep(wait);
            fired += self.advance(wait);
        }
        fired
    }

    fn due_by(&self, deadline: Duration) -> Option<K> {
        self.sessions
            .iter()
            .filter(|(_, s)| s.next_due() <= deadline)
            .min_by_key(|(_, s)| (s.next_due(), s.seq()))
            .map(|(target, _)| target.clone())
    }

    /// Runs one tick for `target`.
    ///
    /// Session state is settled before the callback runs: a finished session
    /// is already out of the registry when it reports completion.
    fn fire(&mut self, target: &K) {
        let Some(session) = self.sessions.get_mut(target) else {
            return;
        };
        self.now = self.now.max(session.next_due());

        if session.step() {
            if let Some(mut session) = self.sessions.remove(target) {
                log::debug!(
                    "stream for {target:?} complete after {} chars",
                    session.total_len()
                );
                session.notify(true);
            }
        } else {
            log::trace!(
                "tick for {target:?}: {}/{} chars",
                session.delivered_len(),
                session.total_len()
            );
            session.notify(false);
        }
    }
}

impl<K> Default for StreamEngine<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new(StreamSettings::default())
    }
}

impl<K: fmt::Debug> fmt::Debug for StreamEngine<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamEngine")
            .field("settings", &self.settings)
            .field("now", &self.now)
            .field("sessions", &self.sessions.values().collect::<Vec<_>>())
            .finish()
    }
}
