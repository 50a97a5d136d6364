//! Pipeline stages for the requested-analysis submitter.
//!
//! - **Ingest**: read the input table and partition ids by label
//! - **Build**: derive both segment criteria from one template
//! - **Submit**: create the segments and the requested analysis

use anyhow::{Context, Result};
use motion_api::{AnalysisSubmitter, ComparisonRequest, Endpoint, MotionApi, Submission};
use motion_ingest::{GroupSelector, InputSource, Partition, load_and_partition};
use motion_model::{RequestedAnalysis, SegmentId, SegmentTemplate};
use serde_json::{Value, json};
use tracing::{debug, info, info_span, trace};

use crate::logging::redact_value;

/// Placeholder shown in dry-run payloads for ids the server would assign.
pub const SEGMENT_ID_PLACEHOLDER: &str = "<analysis_segment_id>";

/// Everything the pipeline needs besides the API client.
#[derive(Debug, Clone)]
pub struct PipelineInput<'a> {
    pub source: InputSource<'a>,
    pub groups: GroupSelector,
    pub name: String,
    pub template: SegmentTemplate,
}

/// Partition and request produced by the ingest and build stages.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub partition: Partition,
    pub request: ComparisonRequest,
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub partition: Partition,
    pub submission: Submission,
}

/// Ingest stage: load the input table and split it into groups.
pub fn ingest(input: &PipelineInput<'_>) -> Result<Partition> {
    let span = info_span!("ingest", path = %input.source.path.display());
    let _guard = span.enter();

    let partition = load_and_partition(&input.source, &input.groups)
        .with_context(|| format!("load input {}", input.source.path.display()))?;
    for id in &partition.primary {
        trace!(group = "primary", id = redact_value(id), "grouped id");
    }
    for id in &partition.comparison {
        trace!(group = "comparison", id = redact_value(id), "grouped id");
    }
    Ok(partition)
}

/// Ingest and build stages.
pub fn build_request(input: &PipelineInput<'_>) -> Result<PreparedRequest> {
    let partition = ingest(input)?;
    let request = ComparisonRequest::from_template(
        input.name.clone(),
        &input.template,
        partition.primary.clone(),
        partition.comparison.clone(),
    );
    debug!(
        movement_type_id = input.template.movement_type_id,
        mocap_type_id = input.template.mocap_type_id,
        dom_hand = %input.template.dom_hand,
        "built segment criteria"
    );
    Ok(PreparedRequest { partition, request })
}

/// Runs all stages against `api`.
pub fn run_pipeline<A: MotionApi>(api: A, input: &PipelineInput<'_>) -> Result<PipelineResult> {
    let PreparedRequest { partition, request } = build_request(input)?;
    let submitter = AnalysisSubmitter::new(api);
    let submission = submitter
        .submit(&request)
        .with_context(|| format!("request analysis {:?}", request.name))?;
    info!(
        primary_analysis_segment_id = %submission.primary_segment_id,
        comparison_analysis_segment_id = %submission.comparison_segment_id,
        "analysis requested"
    );
    Ok(PipelineResult {
        partition,
        submission,
    })
}

/// The three request bodies a submission would send, in order.
///
/// Segment ids are unknown before the server assigns them and appear as
/// [`SEGMENT_ID_PLACEHOLDER`].
pub fn dry_run_payloads(request: &ComparisonRequest) -> Result<Value> {
    let mut analysis = serde_json::to_value(RequestedAnalysis::new(
        request.name.clone(),
        SegmentId::new(0),
        SegmentId::new(0),
    ))
    .context("serialize requested analysis")?;
    if let Some(body) = analysis.as_object_mut() {
        body.insert(
            "primary_analysis_segment_id".to_string(),
            Value::from(SEGMENT_ID_PLACEHOLDER),
        );
        body.insert(
            "comparison_analysis_segment_id".to_string(),
            Value::from(SEGMENT_ID_PLACEHOLDER),
        );
    }
    Ok(json!([
        {
            "endpoint": Endpoint::Segments.path(),
            "body": serde_json::to_value(&request.primary).context("serialize primary segment")?,
        },
        {
            "endpoint": Endpoint::Segments.path(),
            "body": serde_json::to_value(&request.comparison)
                .context("serialize comparison segment")?,
        },
        {
            "endpoint": Endpoint::RequestedAnalyses.path(),
            "body": analysis,
        },
    ]))
}
