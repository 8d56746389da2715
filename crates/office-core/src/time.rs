//! Simulation time model and tuning constants.
//!
//! # Design
//!
//! The engine never reads the system clock.  The host (render loop, test
//! harness) feeds elapsed frame time into [`SimClock::advance`], and every
//! timeout in the engine is an integer-millisecond comparison against a
//! `last_active_ms` stamp.  Keeping the canonical clock as integer
//! milliseconds means idle/sleep threshold arithmetic is exact (no
//! floating-point drift across hours of uptime) and tests can drive time
//! deterministically without sleeping.

/// The simulation's wall clock, in integer milliseconds.
///
/// Advanced once per frame from the host's `dt`.  Sub-millisecond remainders
/// are carried across frames so long runs don't lose time to truncation.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now_ms:   u64,
    carry_us: u32,
}

impl SimClock {
    /// A clock starting at `now_ms` (e.g. a Unix timestamp, or 0 in tests).
    pub fn starting_at(now_ms: u64) -> Self {
        Self { now_ms, carry_us: 0 }
    }

    /// Current time in milliseconds.
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advance by `dt` seconds of frame time.
    pub fn advance(&mut self, dt: f32) {
        let total_us = self.carry_us as u64 + (dt.max(0.0) as f64 * 1_000_000.0) as u64;
        self.now_ms += total_us / 1_000;
        self.carry_us = (total_us % 1_000) as u32;
    }

    /// Milliseconds elapsed since `earlier_ms` (saturating).
    #[inline]
    pub fn since(&self, earlier_ms: u64) -> u64 {
        self.now_ms.saturating_sub(earlier_ms)
    }
}

// ── SimTuning ─────────────────────────────────────────────────────────────────

/// Behavioral constants for the simulation.
///
/// Defaults reproduce the hand-tuned values of the 320×256 office board.
/// Typically constructed once at startup and shared read-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTuning {
    /// Master RNG seed.  The same seed always produces identical wander
    /// timing and seat-tiebreak behavior.
    pub seed: u64,

    /// Walking speed in board units per second.
    pub walk_speed: f32,

    /// An idle agent is moved to the break room after this long without
    /// activity.
    pub idle_break_ms: u64,

    /// An idle agent falls asleep after this long without activity.
    /// Must be ≥ `idle_break_ms` for the idle → break → sleep progression
    /// to read sensibly.
    pub sleep_after_ms: u64,

    /// Distance from the seat target above which an agent starts walking.
    pub arrive_epsilon: f32,

    /// Target displacement below which a recomputed seat target counts as
    /// unchanged (suppresses path churn from float noise).
    pub target_epsilon: f32,

    /// Wander countdown is re-armed uniformly from this range (ms).
    pub wander_delay_ms: (u64, u64),

    /// A wander target closer than this is not worth walking to.
    pub wander_min_dist: f32,

    /// Sub-agent spawn fade-in rate, in alpha per second.
    pub spawn_fade_rate: f32,

    /// Seconds of accumulated time per cosmetic animation frame.
    pub anim_frame_secs: f32,
}

impl Default for SimTuning {
    fn default() -> Self {
        Self {
            seed:            0,
            walk_speed:      20.0,
            idle_break_ms:   30_000,
            sleep_after_ms:  30 * 60_000,
            arrive_epsilon:  2.0,
            target_epsilon:  0.5,
            wander_delay_ms: (6_000, 16_000),
            wander_min_dist: 12.0,
            spawn_fade_rate: 2.0,
            anim_frame_secs: 0.3,
        }
    }
}
