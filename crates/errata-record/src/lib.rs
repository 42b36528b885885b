//! Data model for captured application failures.
//!
//! A [`Failure`] is one error occurrence with a stable type identifier, an
//! optional causal chain, an ad-hoc diagnostic data bag and dynamically
//! readable attributes. An [`ErrorRecord`] owns the root failure of a capture
//! together with the [`Command`]s (structured diagnostic payloads) that
//! enrichment handlers attach to it before the record reaches the logging
//! pipeline.
//!
//! The enrichment engine itself (handler registry, chain dispatch, built-in
//! handlers) lives in the `errata-enrichment` crate; this crate has no opinion
//! on when or how records are enriched, persisted or rendered.

mod command;
mod error;
mod failure;
mod record;

pub use command::Command;
pub use error::Error;
pub use failure::{read_attribute, CapturedFailure, Chain, Failure, FailureData};
pub use record::ErrorRecord;
