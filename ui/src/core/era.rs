//! Era catalog: the fixed list of history tracks, their display metadata and
//! the priority order used when probing for a fallback era.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a content track (e.g. `"jewish"`, `"china"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EraCode(String);

impl EraCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Catalog entry for this code, if it is one of the known eras.
    pub fn option(&self) -> Option<&'static EraOption> {
        ERA_OPTIONS.iter().find(|opt| opt.code == self.0)
    }

    /// Display name, falling back to the raw code for unknown eras.
    pub fn display_name(&self) -> String {
        self.option()
            .map(|opt| opt.name.to_string())
            .unwrap_or_else(|| self.0.clone())
    }

    /// Next era in catalog order, wrapping around. Unknown codes start at the
    /// first entry.
    pub fn next(&self) -> EraCode {
        let len = ERA_OPTIONS.len();
        let next = match self.catalog_index() {
            Some(idx) => (idx + 1) % len,
            None => 0,
        };
        ERA_OPTIONS[next].code()
    }

    /// Previous era in catalog order, wrapping around.
    pub fn prev(&self) -> EraCode {
        let len = ERA_OPTIONS.len();
        let idx = self.catalog_index().unwrap_or(0);
        ERA_OPTIONS[(idx + len - 1) % len].code()
    }

    fn catalog_index(&self) -> Option<usize> {
        ERA_OPTIONS.iter().position(|opt| opt.code == self.0)
    }
}

impl fmt::Display for EraCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EraCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EraCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraOption {
    pub code: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// CSS modifier for the page backdrop gradient.
    pub backdrop: &'static str,
}

impl EraOption {
    pub fn code(&self) -> EraCode {
        EraCode::new(self.code)
    }
}

/// Known eras in fallback priority order.
pub const ERA_OPTIONS: [EraOption; 7] = [
    EraOption {
        code: "jewish",
        name: "Jewish History",
        emoji: "✡️",
        backdrop: "backdrop--gold-blue",
    },
    EraOption {
        code: "rome-greece",
        name: "Rome & Greece",
        emoji: "🏛️",
        backdrop: "backdrop--marble",
    },
    EraOption {
        code: "china",
        name: "Chinese History",
        emoji: "🐲",
        backdrop: "backdrop--jade",
    },
    EraOption {
        code: "islamic",
        name: "Islamic History",
        emoji: "☪️",
        backdrop: "backdrop--sand",
    },
    EraOption {
        code: "christian",
        name: "Christian History",
        emoji: "✝️",
        backdrop: "backdrop--violet",
    },
    EraOption {
        code: "russian",
        name: "Russian History",
        emoji: "🇷🇺",
        backdrop: "backdrop--frost",
    },
    EraOption {
        code: "america",
        name: "American History",
        emoji: "🗽",
        backdrop: "backdrop--liberty",
    },
];

const DEFAULT_BACKDROP: &str = "backdrop--neutral";

/// Candidate list handed to the fallback selector.
pub fn candidate_eras() -> Vec<EraCode> {
    ERA_OPTIONS.iter().map(EraOption::code).collect()
}

/// Era to show on first render: the stored preference, else the first entry.
pub fn initial_era(preferred: Option<&EraCode>) -> EraCode {
    preferred.cloned().unwrap_or_else(|| ERA_OPTIONS[0].code())
}

pub fn era_backdrop_class(era: Option<&EraCode>) -> &'static str {
    era.and_then(EraCode::option)
        .map(|opt| opt.backdrop)
        .unwrap_or(DEFAULT_BACKDROP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_both_ways() {
        let first = EraCode::from("jewish");
        let last = EraCode::from("america");
        assert_eq!(first.prev(), last);
        assert_eq!(last.next(), first);
        assert_eq!(first.next(), EraCode::from("rome-greece"));
    }

    #[test]
    fn unknown_era_cycles_from_start() {
        let unknown = EraCode::from("atlantis");
        assert_eq!(unknown.next(), EraCode::from("jewish"));
        assert_eq!(unknown.prev(), EraCode::from("america"));
        assert_eq!(unknown.display_name(), "atlantis");
    }

    #[test]
    fn candidates_follow_catalog_order() {
        let codes: Vec<String> = candidate_eras()
            .into_iter()
            .map(|c| c.as_str().to_string())
            .collect();
        assert_eq!(
            codes,
            ["jewish", "rome-greece", "china", "islamic", "christian", "russian", "america"]
        );
    }

    #[test]
    fn initial_era_prefers_stored_choice() {
        let stored = EraCode::from("china");
        assert_eq!(initial_era(Some(&stored)), stored);
        assert_eq!(initial_era(None), EraCode::from("jewish"));
    }

    #[test]
    fn backdrop_defaults_for_unknown_or_missing() {
        assert_eq!(era_backdrop_class(None), "backdrop--neutral");
        assert_eq!(
            era_backdrop_class(Some(&EraCode::from("atlantis"))),
            "backdrop--neutral"
        );
        assert_eq!(
            era_backdrop_class(Some(&EraCode::from("china"))),
            "backdrop--jade"
        );
    }
}
