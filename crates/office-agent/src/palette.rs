//! Deterministic character colors.

use office_core::stable_hash;

/// Curated palette — visually distinct, pleasant colors.
pub const PALETTE: [&str; 16] = [
    "#e94560", "#4ecca3", "#f0c040", "#60a0f0",
    "#c060e0", "#f08050", "#50d0d0", "#d0d050",
    "#a070f0", "#70f0a0", "#f070b0", "#70b0f0",
    "#e07070", "#70e0b0", "#b0a0f0", "#f0b070",
];

/// Deterministic color from an agent id — the same agent always gets the
/// same color across sessions and restarts.
pub fn color_for(agent_id: &str) -> &'static str {
    PALETTE[(stable_hash(agent_id) % PALETTE.len() as u64) as usize]
}
