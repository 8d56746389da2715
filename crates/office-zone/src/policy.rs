//! Zone assignment rules.

use office_agent::AgentRecord;
use office_core::{Activity, ZoneKind};

/// Substrings that mark an agent id as the designated lead.
const LEAD_HINTS: [&str; 2] = ["lead", "main"];

/// Maps an agent's state to the zone it belongs in.
///
/// Rules, in priority order:
///
/// 1. Sub-agents → [`ZoneKind::SubAgentZone`], unconditionally.
/// 2. Sleeping, or idle past `idle_break_ms` → [`ZoneKind::BreakRoom`].
/// 3. The lead agent → [`ZoneKind::LeadOffice`].
/// 4. Everyone else → [`ZoneKind::MainFloor`].
///
/// # Lead memoization
///
/// Lead identity is resolved once and held in an explicit field: prefer an
/// agent whose id contains a lead hint, else the first top-level agent
/// observed.  It is never silently recomputed mid-session — multiple
/// plausible candidates must not make the lead office flap between owners.
/// [`reset_lead`](Self::reset_lead) clears the memo (e.g. on reconnect).
#[derive(Debug)]
pub struct ZonePolicy {
    /// Memoized lead agent id.  `None` until first resolution.
    lead_id: Option<String>,

    /// Idle time after which an agent is sent to the break room.
    pub idle_break_ms: u64,
}

impl ZonePolicy {
    pub fn new(idle_break_ms: u64) -> Self {
        Self { lead_id: None, idle_break_ms }
    }

    /// Compute the zone for `agent`.
    ///
    /// `top_level` is the current tick's list of non-sub agents, used only
    /// for lead resolution; pass the same slice for every agent in a pass.
    pub fn assign_zone(
        &mut self,
        agent:     &AgentRecord,
        top_level: &[&AgentRecord],
        now_ms:    u64,
    ) -> ZoneKind {
        if agent.is_sub_agent() {
            return ZoneKind::SubAgentZone;
        }

        let idle_past_threshold = agent.activity == Activity::Idle
            && now_ms.saturating_sub(agent.last_active_ms) > self.idle_break_ms;
        if agent.activity == Activity::Sleeping || idle_past_threshold {
            return ZoneKind::BreakRoom;
        }

        if self.is_lead(agent, top_level) {
            return ZoneKind::LeadOffice;
        }
        ZoneKind::MainFloor
    }

    /// Clear the lead memo so the next pass re-resolves it.
    /// Call on reconnect, when the previous lead may be gone.
    pub fn reset_lead(&mut self) {
        self.lead_id = None;
    }

    /// The currently memoized lead id, if resolved.
    pub fn lead_id(&self) -> Option<&str> {
        self.lead_id.as_deref()
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn is_lead(&mut self, agent: &AgentRecord, top_level: &[&AgentRecord]) -> bool {
        if self.lead_id.is_none() {
            self.lead_id = top_level
                .iter()
                .find(|a| has_lead_hint(&a.agent_id))
                .or_else(|| top_level.first())
                .map(|a| a.agent_id.clone());
        }
        self.lead_id.as_deref() == Some(agent.agent_id.as_str())
    }
}

fn has_lead_hint(agent_id: &str) -> bool {
    let id = agent_id.to_lowercase();
    LEAD_HINTS.iter().any(|h| id.contains(h))
}
