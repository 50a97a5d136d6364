//! Integration tests for loading and partitioning input files.

use std::collections::BTreeSet;
use std::io::Write;

use motion_ingest::{
    DEFAULT_DELIMITER, GroupSelector, IngestError, InputRow, InputSource, Partition,
    load_and_partition,
};
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

fn source(file: &NamedTempFile) -> InputSource<'_> {
    InputSource {
        path: file.path(),
        id_column: "MLBPlayId",
        label_column: "PitchType",
        delimiter: DEFAULT_DELIMITER,
    }
}

fn pitches() -> GroupSelector {
    GroupSelector::new("Fastball", "Curveball")
}

#[test]
fn fastball_curveball_scenario() {
    let file = write_csv("MLBPlayId,PitchType\n001,Fastball\n002,Curveball\n003,Fastball\n");
    let partition = load_and_partition(&source(&file), &pitches()).expect("partition");

    assert_eq!(partition.primary, vec!["001", "003"]);
    assert_eq!(partition.comparison, vec!["002"]);
}

#[test]
fn other_labels_are_excluded() {
    let file = write_csv(
        "MLBPlayId,PitchType\n001,Slider\n002,Curveball\n003,Changeup\n004,Fastball\n",
    );
    let partition = load_and_partition(&source(&file), &pitches()).expect("partition");

    assert_eq!(partition.primary, vec!["004"]);
    assert_eq!(partition.comparison, vec!["002"]);
    assert_eq!(partition.unmatched, 2);
}

#[test]
fn empty_primary_group_is_not_an_error() {
    let file = write_csv("MLBPlayId,PitchType\n002,Curveball\n");
    let partition = load_and_partition(&source(&file), &pitches()).expect("partition");

    assert!(partition.primary.is_empty());
    assert_eq!(partition.comparison, vec!["002"]);
}

#[test]
fn header_only_file_yields_empty_groups() {
    let file = write_csv("MLBPlayId,PitchType\n");
    let partition = load_and_partition(&source(&file), &pitches()).expect("partition");
    assert_eq!(partition, Partition::default());
}

#[test]
fn quoted_identifiers_are_unquoted() {
    let file = write_csv("MLBPlayId,PitchType\n\"a,b\",Fastball\n");
    let partition = load_and_partition(&source(&file), &pitches()).expect("partition");
    assert_eq!(partition.primary, vec!["a,b"]);
}

#[test]
fn missing_label_column_is_input_error() {
    let file = write_csv("MLBPlayId,Type\n001,Fastball\n");
    let err = load_and_partition(&source(&file), &pitches()).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { .. }));
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Fastball".to_string()),
        Just("Curveball".to_string()),
        Just("Slider".to_string()),
        Just("fastball".to_string()),
    ]
}

proptest! {
    #[test]
    fn partition_matches_labels_in_row_order(
        labels in proptest::collection::vec(label_strategy(), 0..40)
    ) {
        let rows: Vec<InputRow> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| InputRow::new(format!("id-{i:03}"), label.clone()))
            .collect();
        let groups = pitches();
        let partition = Partition::from_rows(&rows, &groups);

        let expected_primary: Vec<String> = rows
            .iter()
            .filter(|r| r.label == groups.primary)
            .map(|r| r.identifier.clone())
            .collect();
        let expected_comparison: Vec<String> = rows
            .iter()
            .filter(|r| r.label == groups.comparison)
            .map(|r| r.identifier.clone())
            .collect();
        prop_assert_eq!(&partition.primary, &expected_primary);
        prop_assert_eq!(&partition.comparison, &expected_comparison);

        let union: BTreeSet<&String> = partition
            .primary
            .iter()
            .chain(partition.comparison.iter())
            .collect();
        let selected: BTreeSet<&String> = rows
            .iter()
            .filter(|r| r.label == groups.primary || r.label == groups.comparison)
            .map(|r| &r.identifier)
            .collect();
        prop_assert_eq!(union, selected);
        prop_assert_eq!(partition.matched() + partition.unmatched, rows.len());
    }
}
