//! Fluent builder for constructing an [`OfficeSim`].

use office_core::{SimClock, SimTuning};
use office_grid::Planner;
use office_layout::OfficeLayout;
use office_session::SessionStateManager;
use office_zone::ZonePolicy;

use crate::{OfficeSim, SimError, SimResult};

/// Fluent builder for [`OfficeSim<P>`].
///
/// # Required inputs
///
/// - `P: Planner` — the path planner (e.g. [`office_grid::BfsPlanner`]).
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                      |
/// |-------------------------|------------------------------|
/// | `.layout(l)`            | `OfficeLayout::standard()`   |
/// | `.tuning(t)`            | `SimTuning::default()`       |
/// | `.configured_agents(v)` | none                         |
/// | `.start_ms(t)`          | 0                            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = OfficeSimBuilder::new(BfsPlanner)
///     .tuning(SimTuning { seed: 42, ..SimTuning::default() })
///     .configured_agents(["max", "researcher"])
///     .start_ms(unix_now_ms)
///     .build()?;
/// sim.run_frame(1.0 / 60.0, &mut NoopSink);
/// ```
pub struct OfficeSimBuilder<P: Planner> {
    planner:    P,
    layout:     Option<OfficeLayout>,
    tuning:     SimTuning,
    configured: Vec<String>,
    start_ms:   u64,
}

impl<P: Planner> OfficeSimBuilder<P> {
    pub fn new(planner: P) -> Self {
        Self {
            planner,
            layout:     None,
            tuning:     SimTuning::default(),
            configured: Vec::new(),
            start_ms:   0,
        }
    }

    /// Supply a board layout.  If not called, the standard board is used.
    pub fn layout(mut self, layout: OfficeLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Supply behavioral constants.
    pub fn tuning(mut self, tuning: SimTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Register permanent characters present from startup.
    pub fn configured_agents<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.configured.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Clock origin in milliseconds (e.g. a Unix timestamp).
    pub fn start_ms(mut self, start_ms: u64) -> Self {
        self.start_ms = start_ms;
        self
    }

    /// Validate the tuning, build the walk grid, and return a ready sim.
    pub fn build(self) -> SimResult<OfficeSim<P>> {
        if self.tuning.walk_speed <= 0.0 {
            return Err(SimError::Config(format!(
                "walk_speed must be positive, got {}",
                self.tuning.walk_speed
            )));
        }
        if self.tuning.sleep_after_ms < self.tuning.idle_break_ms {
            return Err(SimError::Config(
                "sleep_after_ms must be ≥ idle_break_ms (idle → break → sleep)".into(),
            ));
        }
        let (lo, hi) = self.tuning.wander_delay_ms;
        if lo > hi {
            return Err(SimError::Config(format!(
                "wander_delay_ms range is inverted: {lo} > {hi}"
            )));
        }

        let layout = self.layout.unwrap_or_else(OfficeLayout::standard);
        let grid = layout.build_grid();
        let clock = SimClock::starting_at(self.start_ms);

        let mut sessions = SessionStateManager::new(self.tuning.clone());
        for id in &self.configured {
            sessions.add_configured_agent(id, self.start_ms);
        }

        Ok(OfficeSim {
            policy: ZonePolicy::new(self.tuning.idle_break_ms),
            layout,
            grid,
            planner: self.planner,
            sessions,
            tuning: self.tuning,
            clock,
        })
    }
}
