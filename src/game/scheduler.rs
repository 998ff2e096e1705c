//! Frame scheduling: a cancellable "run me on the next frame" primitive.

use std::time::{Duration, Instant};

/// Handle for one requested frame. Pass it back to cancel the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Something that can call the game loop back on a later frame.
pub trait FrameScheduler {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Revoke a request. Cancelling a handle that already fired or was
    /// already cancelled does nothing.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Monotonic-clock scheduler for the terminal host.
///
/// Holds at most one pending frame. The host polls [`FrameClock::poll_due`]
/// and hands any returned handle to the game loop.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
    last_fired: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 1,
            pending: None,
            last_fired: None,
        }
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending.map(|(handle, _)| handle)
    }

    /// Request a frame relative to an explicit `now`.
    ///
    /// Frames are paced from the previous firing so a slow tick does not
    /// push every later frame back, but a deadline never lies in the past.
    pub fn request_frame_at(&mut self, now: Instant) -> FrameHandle {
        let handle = FrameHandle::new(self.next_id);
        self.next_id += 1;

        let deadline = match self.last_fired {
            Some(last) => (last + self.interval).max(now),
            None => now + self.interval,
        };
        self.pending = Some((handle, deadline));
        handle
    }

    /// Time left until the pending frame is due, if any frame is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Take the pending frame if its deadline has passed.
    pub fn poll_due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, deadline)) if deadline <= now => {
                self.pending = None;
                self.last_fired = Some(now);
                Some(handle)
            }
            _ => None,
        }
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.request_frame_at(Instant::now())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending() == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(16);

    #[test]
    fn test_nothing_pending_initially() {
        let mut clock = FrameClock::new(INTERVAL);
        let now = Instant::now();
        assert!(clock.pending().is_none());
        assert!(clock.time_until_due(now).is_none());
        assert!(clock.poll_due(now + INTERVAL).is_none());
    }

    #[test]
    fn test_frame_fires_after_interval() {
        let mut clock = FrameClock::new(INTERVAL);
        let now = Instant::now();
        let handle = clock.request_frame_at(now);

        assert_eq!(clock.time_until_due(now), Some(INTERVAL));
        assert!(clock.poll_due(now + Duration::from_millis(5)).is_none());
        assert_eq!(clock.poll_due(now + INTERVAL), Some(handle));
        assert!(clock.pending().is_none());
    }

    #[test]
    fn test_handles_are_unique() {
        let mut clock = FrameClock::new(INTERVAL);
        let now = Instant::now();
        let first = clock.request_frame_at(now);
        let second = clock.request_frame_at(now);
        assert_ne!(first, second);
        assert_eq!(clock.pending(), Some(second));
    }

    #[test]
    fn test_cancel_revokes_pending() {
        let mut clock = FrameClock::new(INTERVAL);
        let now = Instant::now();
        let handle = clock.request_frame_at(now);
        clock.cancel_frame(handle);
        assert!(clock.pending().is_none());
        assert!(clock.poll_due(now + INTERVAL * 2).is_none());
    }

    #[test]
    fn test_cancel_stale_handle_keeps_pending() {
        let mut clock = FrameClock::new(INTERVAL);
        let now = Instant::now();
        let stale = clock.request_frame_at(now);
        let current = clock.request_frame_at(now);
        clock.cancel_frame(stale);
        assert_eq!(clock.pending(), Some(current));
    }

    #[test]
    fn test_pacing_follows_last_firing() {
        let mut clock = FrameClock::new(INTERVAL);
        let start = Instant::now();
        clock.request_frame_at(start);
        let fired_at = start + INTERVAL;
        assert!(clock.poll_due(fired_at).is_some());

        // The tick took 4ms; the next frame is still due one interval after the last firing.
        let after_tick = fired_at + Duration::from_millis(4);
        clock.request_frame_at(after_tick);
        assert_eq!(
            clock.time_until_due(after_tick),
            Some(Duration::from_millis(12))
        );
    }

    #[test]
    fn test_late_frame_is_due_immediately() {
        let mut clock = FrameClock::new(INTERVAL);
        let start = Instant::now();
        clock.request_frame_at(start);
        let fired_at = start + INTERVAL;
        assert!(clock.poll_due(fired_at).is_some());

        let much_later = fired_at + Duration::from_millis(100);
        clock.request_frame_at(much_later);
        assert_eq!(clock.time_until_due(much_later), Some(Duration::ZERO));
        assert!(clock.poll_due(much_later).is_some());
    }
}
