//! Data model for the motion-analysis API.
//!
//! These records mirror the JSON bodies exchanged with the vendor API:
//!
//! - [`SegmentCriteria`] is the body of `POST /player_group_segments`
//! - [`SegmentCreated`] is the part of its response the client keeps
//! - [`RequestedAnalysis`] is the body of `POST /requested_analyses`
//!
//! Shared segment fields live in a [`SegmentTemplate`] so that the primary
//! and comparison criteria of one analysis are built from the same values.

pub mod analysis;
pub mod enums;
pub mod error;
pub mod ids;
pub mod segment;

pub use analysis::RequestedAnalysis;
pub use enums::{AnalysisStatus, DominantHand, GroupRole};
pub use error::{ModelError, Result};
pub use ids::SegmentId;
pub use segment::{CriteriaField, SegmentCreated, SegmentCriteria, SegmentTemplate};
