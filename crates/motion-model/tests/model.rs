//! Tests for motion-model payload serialization.

use motion_model::{
    AnalysisStatus, DominantHand, RequestedAnalysis, SegmentCreated, SegmentId, SegmentTemplate,
};
use serde_json::json;

#[test]
fn criteria_serializes_wire_fields() {
    let criteria = SegmentTemplate::default().criteria(vec!["001".to_string(), "003".to_string()]);
    let value = serde_json::to_value(&criteria).expect("serialize criteria");
    assert_eq!(
        value,
        json!({
            "external_context_ids": ["001", "003"],
            "movement_type_id": 2,
            "mocap_type_id": 104,
            "dom_hand": "RHA"
        })
    );
}

#[test]
fn empty_criteria_keeps_empty_id_list() {
    let template = SegmentTemplate {
        movement_type_id: 1,
        mocap_type_id: 2,
        dom_hand: DominantHand::Left,
    };
    let value = serde_json::to_value(template.criteria(vec![])).expect("serialize criteria");
    assert_eq!(value["external_context_ids"], json!([]));
    assert_eq!(value["dom_hand"], json!("LHA"));
}

#[test]
fn requested_analysis_body() {
    let analysis = RequestedAnalysis::new(
        "Fastballs vs Curveballs",
        SegmentId::new(10),
        SegmentId::new(20),
    );
    assert_eq!(analysis.status, AnalysisStatus::Requested);
    let value = serde_json::to_value(&analysis).expect("serialize analysis");
    assert_eq!(
        value,
        json!({
            "name": "Fastballs vs Curveballs",
            "primary_analysis_segment_id": 10,
            "comparison_analysis_segment_id": 20,
            "status": "requested"
        })
    );
}

#[test]
fn segment_created_requires_id() {
    let missing: Result<SegmentCreated, _> = serde_json::from_str(r#"{"status": "ok"}"#);
    assert!(missing.is_err());

    let stringly: SegmentCreated =
        serde_json::from_str(r#"{"analysis_segment_id": "314"}"#).expect("string id");
    assert_eq!(stringly.analysis_segment_id.get(), 314);
}
