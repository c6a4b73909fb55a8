//! Server-side pipeline
//!
//! This module sequences the two upstream calls for each uploaded artifact:
//! - `Transcriber`: audio → text (fixed language/temperature/prompt options)
//! - `Responder`: text prompt → generated text
//! - `PipelineService`: strict ordering, typed opaque failures
//!
//! Both collaborators sit behind narrow traits so the pipeline is testable
//! with deterministic substitutes; the HTTP-backed implementations live here
//! as well.

mod responder;
mod service;
mod transcriber;

pub use responder::{HttpResponder, Responder};
pub use service::{PipelineError, PipelineRequest, PipelineService};
pub use transcriber::{HttpTranscriber, Transcriber, TranscriptionOptions};
