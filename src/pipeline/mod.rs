//! End-to-end validation of a point file against a plane-definition file.
//!
//! [`run`] loads both files, builds the two half-spaces, classifies the points, and saves
//! the accepted and rejected points next to the input file (see [`OutputPaths`]).
//!
//! [`OutputPaths`]: crate::io::OutputPaths

pub use self::pipeline::{run, PipelineOptions, PipelineReport};
pub use self::pipeline_error::PipelineError;
pub use self::stage_timings::StageTimings;

mod pipeline;
mod pipeline_error;
mod stage_timings;
