//! Tool-name → activity classification.
//!
//! The mapping is an explicit ordered rule table rather than scattered
//! string checks, so the match order — and therefore tie-breaking between
//! overlapping needles — is a single auditable artifact.  Rules are tried
//! top to bottom; the first hit wins.

use office_core::Activity;

/// How a rule's needles match a tool name.
#[derive(Copy, Clone, Debug)]
enum Match {
    /// Needle appears anywhere in the lowercased name.
    Contains,
    /// Lowercased name equals the needle exactly.
    Exact,
}

struct ToolRule {
    needles:  &'static [&'static str],
    mode:     Match,
    activity: Activity,
}

/// Ordered classification table.  `Contains` rules cast a wide net over tool
/// families (`read_file`, `memory_search_v2`); `Exact` rules avoid false
/// positives on short generic words (`edit` must not match `credits`).
const TOOL_RULES: [ToolRule; 5] = [
    ToolRule {
        needles:  &["read", "memory_search", "memory_get"],
        mode:     Match::Contains,
        activity: Activity::Reading,
    },
    ToolRule {
        needles:  &["write", "edit"],
        mode:     Match::Exact,
        activity: Activity::Coding,
    },
    ToolRule {
        needles:  &["exec", "process"],
        mode:     Match::Exact,
        activity: Activity::RunningCmd,
    },
    ToolRule {
        needles:  &["web_search", "web_fetch", "browser"],
        mode:     Match::Contains,
        activity: Activity::Browsing,
    },
    ToolRule {
        needles:  &["message", "tts"],
        mode:     Match::Exact,
        activity: Activity::Communicating,
    },
];

/// Classify a tool invocation into an activity.
///
/// An empty name is a weak signal (`Thinking`); an unrecognized tool is
/// assumed to be doing work (`Coding`).
pub fn classify_tool(name: &str) -> Activity {
    if name.is_empty() {
        return Activity::Thinking;
    }
    let lower = name.to_lowercase();
    for rule in &TOOL_RULES {
        let hit = match rule.mode {
            Match::Contains => rule.needles.iter().any(|n| lower.contains(n)),
            Match::Exact    => rule.needles.iter().any(|n| lower == *n),
        };
        if hit {
            return rule.activity;
        }
    }
    Activity::Coding
}
