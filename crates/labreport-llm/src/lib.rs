//! LLM enrichment wrapper for lab-report interpretation.
//!
//! The extraction core treats the language model as an opaque enrichment
//! collaborator. This crate owns that collaborator's edges: prompt
//! construction, tolerant parsing of model output, and an optional HTTP
//! client (feature `remote`) for a completion endpoint.

pub mod enrichment;
pub mod prompts;

#[cfg(feature = "remote")]
pub mod client;

pub use enrichment::*;
pub use prompts::*;

#[cfg(feature = "remote")]
pub use client::EnrichmentClient;
