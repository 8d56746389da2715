//! Agent activity enum shared across all simulation crates.
//!
//! `Walking` is a transient overlay state: the movement machinery saves the
//! business activity it replaces and restores it on arrival.  Everything else
//! describes what the underlying session is actually doing.

/// What an agent character is currently doing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum Activity {
    /// Session is connected but doing nothing.
    #[default]
    Idle,
    /// Producing plain text (or we have no stronger signal).
    Thinking,
    /// Writing or editing files.
    Coding,
    /// Reading files or searching memory.
    Reading,
    /// Fetching or browsing the web.
    Browsing,
    /// Running a shell command or external process.
    RunningCmd,
    /// Sending a message or speaking.
    Communicating,
    /// Idle long enough to doze off.
    Sleeping,
    /// The session reported an error.
    Error,
    /// In transit between seats (transient; see module docs).
    Walking,
}

impl Activity {
    /// Human-readable label, matching the renderer's sprite keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Idle          => "idle",
            Activity::Thinking      => "thinking",
            Activity::Coding        => "coding",
            Activity::Reading       => "reading",
            Activity::Browsing      => "browsing",
            Activity::RunningCmd    => "running-cmd",
            Activity::Communicating => "communicating",
            Activity::Sleeping      => "sleeping",
            Activity::Error         => "error",
            Activity::Walking       => "walking",
        }
    }

    /// `true` for states in which the agent is receptive to a "wake up"
    /// signal (a plain text block promotes these to `Thinking`).
    #[inline]
    pub fn is_dormant(self) -> bool {
        matches!(self, Activity::Idle | Activity::Sleeping)
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
