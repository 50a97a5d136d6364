use std::time::Duration;

use anyhow::{Context, Result};
use motion_api::{ApiConfig, HttpMotionApi};
use motion_cli::pipeline::{PipelineInput, build_request, dry_run_payloads, ingest, run_pipeline};
use motion_ingest::{GroupSelector, InputSource};
use motion_model::SegmentTemplate;
use tracing::info_span;

use crate::cli::{InputArgs, SubmitArgs};
use crate::summary::{print_preview, print_submission};

pub fn run_preview(args: &InputArgs) -> Result<()> {
    let span = info_span!("preview");
    let _guard = span.enter();

    let input = pipeline_input(args, String::new(), SegmentTemplate::default());
    let partition = ingest(&input)?;
    print_preview(&partition, &input.groups);
    Ok(())
}

pub fn run_submit(args: &SubmitArgs) -> Result<()> {
    let template = SegmentTemplate {
        movement_type_id: args.movement_type_id,
        mocap_type_id: args.mocap_type_id,
        dom_hand: args.dom_hand.into(),
    };
    let input = pipeline_input(&args.input, args.name.clone(), template);

    if args.dry_run {
        let prepared = build_request(&input)?;
        let payloads = dry_run_payloads(&prepared.request)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&payloads).context("format payloads")?
        );
        return Ok(());
    }

    let api = HttpMotionApi::new(api_config(args)).context("build API client")?;
    let result = run_pipeline(&api, &input)?;
    print_submission(&result.partition, &input.groups, &result.submission);
    println!(
        "{}",
        serde_json::to_string_pretty(&result.submission.analysis).context("format response")?
    );
    Ok(())
}

fn pipeline_input<'a>(
    args: &'a InputArgs,
    name: String,
    template: SegmentTemplate,
) -> PipelineInput<'a> {
    PipelineInput {
        source: InputSource {
            path: &args.input,
            id_column: &args.id_column,
            label_column: &args.label_column,
            delimiter: args.delimiter,
        },
        groups: GroupSelector::new(args.primary.clone(), args.comparison.clone()),
        name,
        template,
    }
}

fn api_config(args: &SubmitArgs) -> ApiConfig {
    let timeout = (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs));
    ApiConfig::new(args.api_key.clone())
        .with_base_url(args.base_url.clone())
        .with_timeout(timeout)
}
