//! Shared types used across SeatGrid crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Threshold applied when a run does not name one and the strategy's
/// preset calls for a minimum chunk.
pub const DEFAULT_MIN_CHUNK: u32 = 10;

/// Identity of a student group: a category and a subcategory label,
/// e.g. a department and a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId {
    pub category: String,
    pub subcategory: String,
}

impl GroupId {
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.subcategory)
    }
}

/// A group as entered by the user, before validation.
///
/// `size` is signed so that bad input survives parsing and can be
/// rejected (or filtered) explicitly by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInput {
    pub category: String,
    pub subcategory: String,
    pub size: i64,
}

impl GroupInput {
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>, size: i64) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            size,
        }
    }

    pub fn id(&self) -> GroupId {
        GroupId::new(self.category.clone(), self.subcategory.clone())
    }
}

/// Selectable allocation heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Largest group first into the largest room with space.
    Simple,
    /// Same scan as `Simple`, preset with a real minimum chunk.
    MinChunk,
    /// Room-major filling with a perfect-fit fast path.
    Lookahead,
    /// Tightest room first, falling back to first fit, block by block.
    BestFit,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Simple,
        Strategy::MinChunk,
        Strategy::Lookahead,
        Strategy::BestFit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Simple => "simple",
            Strategy::MinChunk => "min-chunk",
            Strategy::Lookahead => "lookahead",
            Strategy::BestFit => "best-fit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Simple => "Simple Greedy",
            Strategy::MinChunk => "Greedy with Min-Chunk",
            Strategy::Lookahead => "Greedy Lookahead",
            Strategy::BestFit => "Best-Fit / FFD",
        }
    }

    /// Threshold used when the caller does not supply one.
    pub fn preset_min_chunk(&self) -> u32 {
        match self {
            Strategy::Simple => 1,
            _ => DEFAULT_MIN_CHUNK,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "simple" | "greedy" => Ok(Strategy::Simple),
            "min-chunk" | "minchunk" => Ok(Strategy::MinChunk),
            "lookahead" => Ok(Strategy::Lookahead),
            "best-fit" | "bestfit" | "ffd" => Ok(Strategy::BestFit),
            other => Err(format!(
                "unknown strategy '{other}' (expected simple, min-chunk, lookahead or best-fit)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_aliases() {
        assert_eq!("simple".parse::<Strategy>().unwrap(), Strategy::Simple);
        assert_eq!("MIN_CHUNK".parse::<Strategy>().unwrap(), Strategy::MinChunk);
        assert_eq!("ffd".parse::<Strategy>().unwrap(), Strategy::BestFit);
        assert!("random".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategy_name_round_trips_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn only_simple_defaults_to_no_threshold() {
        assert_eq!(Strategy::Simple.preset_min_chunk(), 1);
        assert_eq!(Strategy::MinChunk.preset_min_chunk(), DEFAULT_MIN_CHUNK);
        assert_eq!(Strategy::BestFit.preset_min_chunk(), DEFAULT_MIN_CHUNK);
    }

    #[test]
    fn group_id_display_joins_labels() {
        assert_eq!(GroupId::new("CSE", "A").to_string(), "CSE-A");
    }

    #[test]
    fn strategy_serializes_kebab_case() {
        let json = serde_json::to_string(&Strategy::BestFit).unwrap();
        assert_eq!(json, "\"best-fit\"");
    }
}
