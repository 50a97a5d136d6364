//! Player group segment payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DominantHand, SegmentId};

/// Movement type id for `baseball-pitching`.
pub const BASEBALL_PITCHING: u32 = 2;

/// Mocap type id for Hawk-Eye High Frame Rate data.
pub const HAWKEYE_HFR: u32 = 104;

/// Fields shared by both segments of a comparison.
///
/// The API cannot compare across movement types, mocap types or
/// handedness, so one template produces both criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentTemplate {
    pub movement_type_id: u32,
    pub mocap_type_id: u32,
    pub dom_hand: DominantHand,
}

impl Default for SegmentTemplate {
    fn default() -> Self {
        Self {
            movement_type_id: BASEBALL_PITCHING,
            mocap_type_id: HAWKEYE_HFR,
            dom_hand: DominantHand::Right,
        }
    }
}

impl SegmentTemplate {
    /// Builds criteria for the given external context ids.
    pub fn criteria(&self, external_context_ids: Vec<String>) -> SegmentCriteria {
        SegmentCriteria {
            external_context_ids,
            movement_type_id: self.movement_type_id,
            mocap_type_id: self.mocap_type_id,
            dom_hand: self.dom_hand,
        }
    }
}

/// Body of `POST /player_group_segments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentCriteria {
    /// Third-party movement ids (MLB Play IDs for Hawk-Eye data).
    pub external_context_ids: Vec<String>,
    pub movement_type_id: u32,
    pub mocap_type_id: u32,
    pub dom_hand: DominantHand,
}

/// A field that must agree between the two criteria of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
    MovementType,
    MocapType,
    DominantHand,
}

impl CriteriaField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CriteriaField::MovementType => "movement_type_id",
            CriteriaField::MocapType => "mocap_type_id",
            CriteriaField::DominantHand => "dom_hand",
        }
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SegmentCriteria {
    /// Returns the shared fields of these criteria.
    pub fn template(&self) -> SegmentTemplate {
        SegmentTemplate {
            movement_type_id: self.movement_type_id,
            mocap_type_id: self.mocap_type_id,
            dom_hand: self.dom_hand,
        }
    }

    /// Returns the first shared field that differs from `other`, if any.
    pub fn mismatch(&self, other: &SegmentCriteria) -> Option<CriteriaField> {
        if self.movement_type_id != other.movement_type_id {
            Some(CriteriaField::MovementType)
        } else if self.mocap_type_id != other.mocap_type_id {
            Some(CriteriaField::MocapType)
        } else if self.dom_hand != other.dom_hand {
            Some(CriteriaField::DominantHand)
        } else {
            None
        }
    }
}

/// The part of a segment-creation response the client keeps.
///
/// Unknown fields in the response are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SegmentCreated {
    pub analysis_segment_id: SegmentId,
}
