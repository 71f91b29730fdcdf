//! Playback session: the state machine that drives the solver.
//!
//! A session owns one validated skeleton for its whole playback lifetime and
//! keeps a single elapsed-time counter. Frame indices and the blend fraction
//! are recomputed from absolute elapsed time on every update.

use serde::{Deserialize, Serialize};

use crate::clock::FrameClock;
use crate::error::SkeletonError;
use crate::skeleton::Skeleton;
use crate::solver::{solve_pose, Pose, SampleMode};

/// Playback state of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

impl PlaybackState {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Configurable settings for a playback session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Playback speed multiplier applied to wall-clock deltas.
    pub speed: f32,
    pub mode: SampleMode,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            mode: SampleMode::Interpolated,
        }
    }
}

/// One playback session over one skeleton.
#[derive(Debug)]
pub struct PlaybackSession {
    skeleton: Skeleton,
    clock: FrameClock,
    settings: SessionSettings,
    state: PlaybackState,
    elapsed: f32,
    pose: Pose,
}

impl PlaybackSession {
    /// Bind a skeleton with default settings. Fails with a descriptive
    /// [`SkeletonError`] if the parsed data violates the input contract.
    pub fn new(skeleton: Skeleton) -> Result<Self, SkeletonError> {
        Self::with_settings(skeleton, SessionSettings::default())
    }

    /// Bind a skeleton, validating it first. The frame-0 pose is solved
    /// immediately so the pose is valid before any time advances.
    pub fn with_settings(
        skeleton: Skeleton,
        settings: SessionSettings,
    ) -> Result<Self, SkeletonError> {
        skeleton.validate()?;
        let clock = FrameClock::new(skeleton.frame_time, skeleton.frame_count());
        let mut session = Self {
            skeleton,
            clock,
            settings,
            state: PlaybackState::Stopped,
            elapsed: 0.0,
            pose: Pose::default(),
        };
        session.solve_current();
        Ok(session)
    }

    fn solve_current(&mut self) {
        let sample = self.clock.sample_at(self.elapsed);
        solve_pose(
            &self.skeleton,
            &self.skeleton.frames[sample.current],
            &self.skeleton.frames[sample.next],
            sample.blend,
            self.settings.mode,
            &mut self.pose,
        );
    }

    /// Stopped -> Playing. (Re)starting resets elapsed time to 0 and solves
    /// the frame-0 pose right away. A no-op while already playing.
    pub fn play(&mut self) {
        if self.state.is_playing() {
            return;
        }
        self.state = PlaybackState::Playing;
        self.elapsed = 0.0;
        self.solve_current();
    }

    /// Playing -> Stopped. Resets elapsed time to 0, reselects frame 0 as
    /// current with blend 0, and performs one solve pass so the held pose is
    /// the rest frame.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.elapsed = 0.0;
        self.solve_current();
    }

    /// Advance by a wall-clock delta scaled by the session speed and solve
    /// the pose for the new time. While stopped, the held pose is returned
    /// untouched.
    pub fn update(&mut self, dt: f32) -> &Pose {
        if self.state.is_playing() {
            let dt = if dt.is_finite() { dt } else { 0.0 };
            self.elapsed = (self.elapsed + dt * self.settings.speed).max(0.0);
            self.solve_current();
        }
        &self.pose
    }

    /// Jump to an absolute animation time and solve the pose there.
    /// Negative and non-finite times are clamped to 0.
    pub fn seek(&mut self, time: f32) {
        self.elapsed = if time.is_finite() { time.max(0.0) } else { 0.0 };
        self.solve_current();
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.settings.speed = speed;
    }

    /// Switch between stepped and interpolated sampling and re-solve so the
    /// held pose reflects the new mode.
    pub fn set_mode(&mut self, mode: SampleMode) {
        self.settings.mode = mode;
        self.solve_current();
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    #[inline]
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// The most recently solved pose.
    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }
}
