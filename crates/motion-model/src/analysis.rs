use serde::Serialize;

use crate::{AnalysisStatus, SegmentId};

/// Body of `POST /requested_analyses`.
///
/// The name should be unique; it is how the analysis is found later in
/// the vendor dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestedAnalysis {
    pub name: String,
    pub primary_analysis_segment_id: SegmentId,
    pub comparison_analysis_segment_id: SegmentId,
    pub status: AnalysisStatus,
}

impl RequestedAnalysis {
    /// Creates a new analysis request in the `requested` state.
    pub fn new(name: impl Into<String>, primary: SegmentId, comparison: SegmentId) -> Self {
        Self {
            name: name.into(),
            primary_analysis_segment_id: primary,
            comparison_analysis_segment_id: comparison,
            status: AnalysisStatus::Requested,
        }
    }
}
