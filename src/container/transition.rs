use std::time::{Duration, Instant};

/// Timing state of one in-flight cross-fade.
///
/// The fade is fire-and-forget: it is started with a deadline and the
/// event loop asks for progress each frame. There is no cancellation;
/// a started fade always reaches 1.0.
#[derive(Debug, Clone, Copy)]
pub struct CrossFade {
    started_at: Instant,
    duration: Duration,
}

impl CrossFade {
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Fade progress in `[0.0, 1.0]` at `now`. A zero duration is
    /// complete immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
