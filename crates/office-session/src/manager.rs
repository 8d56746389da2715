//! The `SessionStateManager` — sole owner of the agent map.
//!
//! All mutations of agent records flow through the entry points here
//! (`handle_chat_event`, `update_from_sessions`, `tick`) plus the sim's
//! placement pipeline, all inside one cooperative turn — there is no locking
//! because there is no parallelism.

use office_agent::{keys, AgentRecord};
use office_core::{Activity, AgentSeq, SimTuning};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::classify::classify_tool;
use crate::events::{ChatEvent, ChatState, SessionSnapshot};

/// Ingests session/chat telemetry and maintains the live agent roster.
#[derive(Debug)]
pub struct SessionStateManager {
    agents: FxHashMap<String, AgentRecord>,

    /// Ids of configured agents — their records are permanent.
    configured: FxHashSet<String>,

    /// Next spawn-order sequence number.
    next_seq: u32,

    tuning: SimTuning,
}

impl SessionStateManager {
    pub fn new(tuning: SimTuning) -> Self {
        Self {
            agents: FxHashMap::default(),
            configured: FxHashSet::default(),
            next_seq: 0,
            tuning,
        }
    }

    // ── Roster access ─────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> impl Iterator<Item = &AgentRecord> {
        self.agents.values()
    }

    pub fn agents_mut(&mut self) -> impl Iterator<Item = &mut AgentRecord> {
        self.agents.values_mut()
    }

    pub fn agent(&self, record_key: &str) -> Option<&AgentRecord> {
        self.agents.get(record_key)
    }

    pub fn agent_mut(&mut self, record_key: &str) -> Option<&mut AgentRecord> {
        self.agents.get_mut(record_key)
    }

    /// Record keys in spawn order — the stable iteration order for the tick
    /// pipeline (hash-map order would make seat contention nondeterministic).
    pub fn keys_in_spawn_order(&self) -> Vec<String> {
        let mut keyed: Vec<(AgentSeq, &String)> =
            self.agents.iter().map(|(k, a)| (a.seq, k)).collect();
        keyed.sort_unstable_by_key(|(seq, _)| *seq);
        keyed.into_iter().map(|(_, k)| k.clone()).collect()
    }

    // ── Agent creation ────────────────────────────────────────────────────

    /// Register a configured agent as a permanent character, visible from
    /// startup even before its session produces telemetry.
    pub fn add_configured_agent(&mut self, agent_id: &str, now_ms: u64) {
        self.configured.insert(agent_id.to_owned());
        let key = keys::configured_key(agent_id);
        if !self.agents.contains_key(&key) {
            let seq = self.take_seq();
            self.agents
                .insert(key, AgentRecord::permanent(agent_id, seq, self.tuning.seed, now_ms));
        }
    }

    /// Fetch the record for `session_key`, creating an ephemeral one the
    /// first time the key is observed.
    pub fn get_or_create_agent(
        &mut self,
        session_key: &str,
        agent_id:    Option<&str>,
        parent_key:  Option<&str>,
        now_ms:      u64,
    ) -> &mut AgentRecord {
        let seed = self.tuning.seed;
        let next_seq = &mut self.next_seq;
        self.agents
            .entry(session_key.to_owned())
            .or_insert_with(|| {
                let seq = AgentSeq(*next_seq);
                *next_seq += 1;
                AgentRecord::new(session_key, agent_id, parent_key, seq, seed, now_ms)
            })
    }

    // ── Chat telemetry ────────────────────────────────────────────────────

    /// Apply one chat event to the roster.
    pub fn handle_chat_event(&mut self, event: &ChatEvent, now_ms: u64) {
        let agent = match self.resolve_record_key(&event.session_key) {
            Some(key) => match self.agents.get_mut(&key) {
                Some(agent) => agent,
                None => return,
            },
            // Unknown session — likely a sub-agent we have not polled yet.
            None => self.get_or_create_agent(&event.session_key, None, None, now_ms),
        };
        agent.touch(now_ms);

        match event.state {
            ChatState::Final | ChatState::Aborted => {
                agent.set_activity(Activity::Idle);
                return;
            }
            ChatState::Error => {
                agent.set_activity(Activity::Error);
                return;
            }
            ChatState::Delta => {}
        }

        let Some(message) = &event.message else {
            // No message at all is still a sign of life.
            agent.set_activity(Activity::Thinking);
            return;
        };
        if let Some(model) = &message.model {
            agent.model = Some(model.clone());
        }

        match &message.content {
            Value::Array(blocks) => {
                for block in blocks {
                    match block.get("type").and_then(Value::as_str) {
                        Some("tool_use") => {
                            let name =
                                block.get("name").and_then(Value::as_str).unwrap_or_default();
                            agent.set_activity(classify_tool(name));
                            agent.set_preview(&format!("Using {name}"));
                            return;
                        }
                        Some("tool_result") => return,
                        Some("text") => {
                            if let Some(text) = block.get("text").and_then(Value::as_str) {
                                agent.set_preview(text);
                            }
                        }
                        // Unknown block types pass through harmlessly.
                        _ => {}
                    }
                }
            }
            Value::String(text) => agent.set_preview(text),
            _ => {}
        }

        // A plain text delta only wakes dormant agents; it must not demote a
        // stronger classification from an earlier block.
        if agent.activity.is_dormant() {
            agent.set_activity(Activity::Thinking);
        }
    }

    // ── Session reconciliation ────────────────────────────────────────────

    /// Reconcile the latest polled session list against the roster.
    ///
    /// Configured agents get live telemetry remapped onto their permanent
    /// record; sub-agent sessions get ephemeral records; records for
    /// sub-agent sessions absent from the poll are deleted.  Permanent
    /// records are never deleted.
    pub fn update_from_sessions(&mut self, sessions: &[SessionSnapshot], now_ms: u64) {
        let mut active_keys: FxHashSet<&str> = FxHashSet::default();

        for s in sessions {
            let agent_id = s
                .agent_id
                .clone()
                .unwrap_or_else(|| keys::extract_agent_id(&s.key).to_owned());

            // Configured agent: map activity onto the permanent character.
            if self.configured.contains(&agent_id) {
                let key = keys::configured_key(&agent_id);
                if let Some(agent) = self.agents.get_mut(&key) {
                    agent.touch(now_ms);
                    if let Some(model) = &s.model {
                        agent.model = Some(model.clone());
                    }
                    if let Some(msg) = &s.last_message {
                        agent.set_preview(msg);
                    }
                    // Remap the live session key so chat events find it.
                    agent.session_key = s.key.clone();
                }
                continue;
            }

            // Otherwise only sub-agent sessions become characters.
            let parent = s
                .spawned_by
                .as_deref()
                .or_else(|| keys::parent_from_subagent_key(&s.key));
            if parent.is_none() {
                continue;
            }

            active_keys.insert(s.key.as_str());
            let agent = self.get_or_create_agent(&s.key, Some(&agent_id), parent, now_ms);
            if let Some(label) = s.label.as_ref().or(s.display_name.as_ref()) {
                agent.label = label.clone();
            }
            if let Some(model) = &s.model {
                agent.model = Some(model.clone());
            }
            if let Some(msg) = &s.last_message {
                agent.set_preview(msg);
            }
            agent.touch(now_ms);
        }

        // Drop ephemeral records whose session vanished from the poll.
        let stale: Vec<String> = self
            .agents
            .iter()
            .filter(|(key, a)| !a.permanent && !active_keys.contains(key.as_str()))
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            tracing::debug!(session = %key, "removing stale agent record");
            self.agents.remove(&key);
        }
    }

    // ── Aging ─────────────────────────────────────────────────────────────

    /// Advance time-based state: long-idle agents fall asleep and the
    /// cosmetic animation counters tick over.
    pub fn tick(&mut self, dt: f32, now_ms: u64) {
        let sleep_after = self.tuning.sleep_after_ms;
        let frame_secs = self.tuning.anim_frame_secs;
        for agent in self.agents.values_mut() {
            if agent.activity == Activity::Idle
                && now_ms.saturating_sub(agent.last_active_ms) > sleep_after
            {
                agent.set_activity(Activity::Sleeping);
            }

            agent.anim_timer += dt;
            if agent.anim_timer > frame_secs {
                agent.anim_timer = 0.0;
                agent.anim_frame = (agent.anim_frame + 1) % 4;
            }
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Resolve a raw session key to a record key: a direct map hit, a
    /// configured agent whose live key was remapped, or the permanent key
    /// for a configured agent id embedded in the session key.
    fn resolve_record_key(&self, session_key: &str) -> Option<String> {
        if self.agents.contains_key(session_key) {
            return Some(session_key.to_owned());
        }
        if let Some((key, _)) = self
            .agents
            .iter()
            .find(|(_, a)| a.session_key == session_key)
        {
            return Some(key.clone());
        }
        let agent_id = keys::extract_agent_id(session_key);
        if self.configured.contains(agent_id) {
            let key = keys::configured_key(agent_id);
            if self.agents.contains_key(&key) {
                return Some(key);
            }
        }
        None
    }

    fn take_seq(&mut self) -> AgentSeq {
        let seq = AgentSeq(self.next_seq);
        self.next_seq += 1;
        seq
    }
}
