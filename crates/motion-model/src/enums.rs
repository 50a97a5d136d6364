//! Enumerations used in segment and analysis payloads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Handedness of the athlete whose movements form a segment.
///
/// The API encodes it as a three-letter code: `RHA` for right-handed
/// and `LHA` for left-handed athletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DominantHand {
    #[default]
    #[serde(rename = "RHA")]
    Right,
    #[serde(rename = "LHA")]
    Left,
}

impl DominantHand {
    /// Returns the wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            DominantHand::Right => "RHA",
            DominantHand::Left => "LHA",
        }
    }
}

impl fmt::Display for DominantHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for DominantHand {
    type Err = ModelError;

    /// Accepts the wire codes as well as `right`/`left` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RHA" | "RIGHT" | "R" => Ok(DominantHand::Right),
            "LHA" | "LEFT" | "L" => Ok(DominantHand::Left),
            _ => Err(ModelError::UnknownDominantHand(s.to_string())),
        }
    }
}

/// Lifecycle status of a requested analysis.
///
/// Clients only ever create analyses as [`AnalysisStatus::Requested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    Requested,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Requested => "requested",
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a comparison a segment sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRole {
    Primary,
    Comparison,
}

impl GroupRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupRole::Primary => "primary",
            GroupRole::Comparison => "comparison",
        }
    }
}

impl fmt::Display for GroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_hand_wire_codes() {
        assert_eq!(
            serde_json::to_string(&DominantHand::Right).unwrap(),
            "\"RHA\""
        );
        assert_eq!(serde_json::to_string(&DominantHand::Left).unwrap(), "\"LHA\"");
        let parsed: DominantHand = serde_json::from_str("\"LHA\"").unwrap();
        assert_eq!(parsed, DominantHand::Left);
    }

    #[test]
    fn dominant_hand_from_str() {
        assert_eq!("rha".parse::<DominantHand>(), Ok(DominantHand::Right));
        assert_eq!(" Left ".parse::<DominantHand>(), Ok(DominantHand::Left));
        assert_eq!(
            "ambi".parse::<DominantHand>(),
            Err(ModelError::UnknownDominantHand("ambi".to_string()))
        );
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AnalysisStatus::Requested).unwrap(),
            "\"requested\""
        );
        assert_eq!(AnalysisStatus::default(), AnalysisStatus::Requested);
    }
}
