//! Scoring and classification engine for a pediatric developmental screening
//! questionnaire.
//!
//! The [`assessment`] module holds the decision logic: a static question
//! catalog, the answer normalizer, per-domain scoring, risk classification,
//! and narrative composition, along with the service facade and collaborator
//! traits the surrounding plumbing implements. [`config`], [`telemetry`], and
//! [`error`] carry the shared runtime concerns for the service binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
