//! Session-key conventions.
//!
//! Gateway session keys look like `agent:01-tech-lead:a1b2c3` for top-level
//! agents and contain a `:subagent:` segment for spawned workers.  Configured
//! (permanent) agents are keyed `configured:<agent_id>` internally so their
//! record survives session churn.

/// Extract the agent id from a session key of the form `agent:<id>:<rest>`.
/// Anything else is used verbatim.
pub fn extract_agent_id(session_key: &str) -> &str {
    let mut parts = session_key.split(':');
    if parts.next() == Some("agent") {
        if let Some(id) = parts.next() {
            if !id.is_empty() {
                return id;
            }
        }
    }
    session_key
}

/// The permanent-record key for a configured agent.
pub fn configured_key(agent_id: &str) -> String {
    format!("configured:{agent_id}")
}

/// `true` if a raw session key names a spawned sub-agent session.
pub fn is_subagent_key(session_key: &str) -> bool {
    session_key.contains(":subagent:")
}

/// Derive the parent session key from a `:subagent:` key.
///
/// Used when a polled sub-agent session carries no explicit `spawnedBy`
/// field; `agent:max:subagent:123` is parented to `agent:max`.
pub fn parent_from_subagent_key(session_key: &str) -> Option<&str> {
    session_key
        .find(":subagent:")
        .map(|idx| &session_key[..idx])
}
