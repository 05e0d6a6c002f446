//! Gateway module - Document loading, failure classification, and health checking

pub mod classify;
pub mod health_check;
pub mod source;

pub use source::{DocumentSource, FileDocumentSource, LoadOutcome};
