//! Office zone enum shared across all simulation crates.

/// One of the four named regions of the virtual office.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ZoneKind {
    /// The lead agent's private office.
    LeadOffice,
    /// Open floor where working agents sit.
    MainFloor,
    /// Where idle and sleeping agents lounge.
    BreakRoom,
    /// Dedicated area for spawned sub-agents.
    SubAgentZone,
}

impl ZoneKind {
    /// All zones, in seat-table declaration order.
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::LeadOffice,
        ZoneKind::MainFloor,
        ZoneKind::BreakRoom,
        ZoneKind::SubAgentZone,
    ];

    /// Human-readable label, matching the layout file format.
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneKind::LeadOffice   => "lead-office",
            ZoneKind::MainFloor    => "main-floor",
            ZoneKind::BreakRoom    => "break-room",
            ZoneKind::SubAgentZone => "sub-agent-zone",
        }
    }

    /// Parse a layout-file label.  Returns `None` for unknown labels.
    pub fn parse(s: &str) -> Option<ZoneKind> {
        match s.trim() {
            "lead-office"    => Some(ZoneKind::LeadOffice),
            "main-floor"     => Some(ZoneKind::MainFloor),
            "break-room"     => Some(ZoneKind::BreakRoom),
            "sub-agent-zone" => Some(ZoneKind::SubAgentZone),
            _ => None,
        }
    }

    /// `true` for the zones where idle agents are allowed to wander to
    /// points of interest (low-priority zones with open floor space).
    #[inline]
    pub fn allows_wander(self) -> bool {
        matches!(self, ZoneKind::BreakRoom | ZoneKind::LeadOffice)
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
