//! Client for the motion-analysis vendor API.
//!
//! This crate creates the two resources behind a comparison report:
//!
//! - `POST /player_group_segments` once per group, returning an
//!   `analysis_segment_id`
//! - `POST /requested_analyses` linking the two segment ids
//!
//! [`HttpMotionApi`] performs the calls with a blocking `reqwest` client
//! authenticated by the `x-api-key` header. [`AnalysisSubmitter`] sequences
//! them and works with any [`MotionApi`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use motion_api::{AnalysisSubmitter, ApiConfig, ComparisonRequest, HttpMotionApi};
//! use motion_model::SegmentTemplate;
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpMotionApi::new(ApiConfig::from_env())?;
//!     let submitter = AnalysisSubmitter::new(api);
//!     let request = ComparisonRequest::from_template(
//!         "Example Pitcher Fastballs vs Curveballs",
//!         &SegmentTemplate::default(),
//!         vec!["play-1".to_string()],
//!         vec!["play-2".to_string()],
//!     );
//!     let submission = submitter.submit(&request)?;
//!     println!("{}", submission.analysis);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod submit;

pub use client::{API_KEY_HEADER, Endpoint, HttpMotionApi, MotionApi, parse_segment_created};
pub use config::{API_KEY_ENV, ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result, SubmitError};
pub use submit::{AnalysisSubmitter, ComparisonRequest, Submission, check_comparable};
