//! Maps continuous elapsed animation time to keyframe indices and a blend
//! fraction, wrapping for looping playback.

/// Frame indices and blend fraction for one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample {
    pub current: usize,
    pub next: usize,
    /// Normalized progress between `current` and `next`, in `[0, 1]`.
    pub blend: f32,
}

/// Frame timing derived from a validated skeleton's fixed frame length and
/// frame count. Indices and fractions are always recomputed from absolute
/// elapsed time, never accumulated incrementally, so no drift builds up over
/// long sessions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    frame_time: f32,
    frame_count: usize,
}

impl FrameClock {
    /// Callers construct this from a validated skeleton, so `frame_time > 0`
    /// and `frame_count >= 1` hold.
    pub fn new(frame_time: f32, frame_count: usize) -> Self {
        debug_assert!(frame_time.is_finite() && frame_time > 0.0);
        debug_assert!(frame_count >= 1);
        Self {
            frame_time,
            frame_count,
        }
    }

    #[inline]
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Duration of one full loop.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.frame_time * self.frame_count as f32
    }

    /// Negative and non-finite elapsed times are defined to sample frame 0
    /// rather than inheriting floor/mod behavior on negatives.
    #[inline]
    fn sanitize(elapsed: f32) -> f32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            elapsed
        } else {
            0.0
        }
    }

    /// `floor(elapsed / frame_time) mod frame_count`; wraps for looping
    /// playback and never goes out of bounds.
    pub fn frame_index(&self, elapsed: f32) -> usize {
        let elapsed = Self::sanitize(elapsed);
        (elapsed / self.frame_time) as usize % self.frame_count
    }

    /// The frame after `index`, wrapping to frame 0 at the loop boundary.
    /// With a single frame, next is frame 0 itself.
    #[inline]
    pub fn next_frame(&self, index: usize) -> usize {
        if index + 1 < self.frame_count {
            index + 1
        } else {
            0
        }
    }

    /// Progress within the current frame, clamped to `[0, 1]` to absorb
    /// floating-point edge effects at frame boundaries. Computed against the
    /// unwrapped frame number so looping playback keeps interpolating.
    pub fn blend_fraction(&self, elapsed: f32) -> f32 {
        let elapsed = Self::sanitize(elapsed);
        let frame = (elapsed / self.frame_time).floor();
        ((elapsed - frame * self.frame_time) / self.frame_time).clamp(0.0, 1.0)
    }

    /// Current frame, next frame, and blend fraction in one call.
    pub fn sample_at(&self, elapsed: f32) -> FrameSample {
        let current = self.frame_index(elapsed);
        FrameSample {
            current,
            next: self.next_frame(current),
            blend: self.blend_fraction(elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_loop_boundary() {
        let clock = FrameClock::new(0.5, 4);
        assert_eq!(clock.frame_index(1.75), 3);
        assert_eq!(clock.next_frame(3), 0);
        assert_eq!(clock.frame_index(2.25), 0);
    }

    #[test]
    fn single_frame_next_is_itself() {
        let clock = FrameClock::new(1.0, 1);
        let sample = clock.sample_at(123.4);
        assert_eq!(sample.current, 0);
        assert_eq!(sample.next, 0);
    }
}
