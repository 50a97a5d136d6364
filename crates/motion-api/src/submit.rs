//! Segment-and-analysis submission flow.

use motion_model::{
    CriteriaField, GroupRole, RequestedAnalysis, SegmentCriteria, SegmentId, SegmentTemplate,
};
use serde_json::Value;
use tracing::{error, info, info_span};

use crate::client::MotionApi;
use crate::error::SubmitError;

/// Everything needed to request one comparison analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    /// Analysis name shown in the vendor dashboard.
    pub name: String,
    pub primary: SegmentCriteria,
    pub comparison: SegmentCriteria,
}

impl ComparisonRequest {
    /// Builds both criteria from one template.
    pub fn from_template(
        name: impl Into<String>,
        template: &SegmentTemplate,
        primary_ids: Vec<String>,
        comparison_ids: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: template.criteria(primary_ids),
            comparison: template.criteria(comparison_ids),
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub primary_segment_id: SegmentId,
    pub comparison_segment_id: SegmentId,
    /// Response body of the requested-analysis call, unmodified.
    pub analysis: Value,
}

/// Fails when the two criteria differ in a field that must match.
pub fn check_comparable(
    primary: &SegmentCriteria,
    comparison: &SegmentCriteria,
) -> Result<(), SubmitError> {
    let Some(field) = primary.mismatch(comparison) else {
        return Ok(());
    };
    let (left, right) = (primary.template(), comparison.template());
    let (primary_value, comparison_value) = match field {
        CriteriaField::MovementType => (
            left.movement_type_id.to_string(),
            right.movement_type_id.to_string(),
        ),
        CriteriaField::MocapType => (
            left.mocap_type_id.to_string(),
            right.mocap_type_id.to_string(),
        ),
        CriteriaField::DominantHand => {
            (left.dom_hand.to_string(), right.dom_hand.to_string())
        }
    };
    Err(SubmitError::IncomparableSegments {
        field,
        primary: primary_value,
        comparison: comparison_value,
    })
}

/// Creates two segments and the requested analysis linking them.
///
/// Calls run strictly in order (primary segment, comparison segment,
/// analysis) and the first failure aborts the rest. A primary segment that
/// was created before a later failure is left in place on the server.
#[derive(Debug, Clone)]
pub struct AnalysisSubmitter<A> {
    api: A,
}

impl<A: MotionApi> AnalysisSubmitter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Creates one segment.
    pub fn create_segment(
        &self,
        role: GroupRole,
        criteria: &SegmentCriteria,
    ) -> Result<SegmentId, SubmitError> {
        let span = info_span!("segment", role = %role);
        let _guard = span.enter();

        info!(
            ids = criteria.external_context_ids.len(),
            movement_type_id = criteria.movement_type_id,
            mocap_type_id = criteria.mocap_type_id,
            dom_hand = %criteria.dom_hand,
            "creating segment"
        );
        let id = self
            .api
            .create_segment(criteria)
            .map_err(|source| SubmitError::SegmentCreation { role, source })?;
        info!(analysis_segment_id = %id, "segment created");
        Ok(id)
    }

    /// Creates the requested analysis with status `requested`.
    pub fn create_requested_analysis(
        &self,
        name: &str,
        primary: SegmentId,
        comparison: SegmentId,
    ) -> Result<Value, SubmitError> {
        let span = info_span!("analysis", name = %name);
        let _guard = span.enter();

        let analysis = RequestedAnalysis::new(name, primary, comparison);
        info!(
            primary_analysis_segment_id = %primary,
            comparison_analysis_segment_id = %comparison,
            "creating requested analysis"
        );
        let response = self
            .api
            .create_requested_analysis(&analysis)
            .map_err(|source| SubmitError::AnalysisCreation { source })?;
        info!("requested analysis created");
        Ok(response)
    }

    /// Runs the full submission for two independently built criteria.
    pub fn submit_criteria(
        &self,
        name: impl Into<String>,
        primary: SegmentCriteria,
        comparison: SegmentCriteria,
    ) -> Result<Submission, SubmitError> {
        self.submit(&ComparisonRequest {
            name: name.into(),
            primary,
            comparison,
        })
    }

    /// Runs the full submission for a comparison.
    pub fn submit(&self, request: &ComparisonRequest) -> Result<Submission, SubmitError> {
        let span = info_span!("submit", name = %request.name);
        let _guard = span.enter();

        check_comparable(&request.primary, &request.comparison)?;

        let primary_segment_id = self.create_segment(GroupRole::Primary, &request.primary)?;
        let comparison_segment_id =
            match self.create_segment(GroupRole::Comparison, &request.comparison) {
                Ok(id) => id,
                Err(err) => {
                    error!(
                        orphaned_segment_id = %primary_segment_id,
                        "comparison segment failed; primary segment was already created"
                    );
                    return Err(err);
                }
            };

        let analysis = self.create_requested_analysis(
            &request.name,
            primary_segment_id,
            comparison_segment_id,
        )?;

        Ok(Submission {
            primary_segment_id,
            comparison_segment_id,
            analysis,
        })
    }
}
