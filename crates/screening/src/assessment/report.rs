use serde::Serialize;

use super::catalog::{Domain, MAX_DOMAIN_SCORE};
use super::AssessmentResult;

/// Flagged/ok marker for one domain row in the presentation breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStatus {
    Flagged,
    Ok,
}

impl DomainStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DomainStatus::Flagged => "flagged",
            DomainStatus::Ok => "ok",
        }
    }
}

/// One row of the per-domain breakdown consumed by the rendering and CRM
/// collaborators. Derived from the already-computed result so those paths
/// never re-run the scoring logic.
#[derive(Debug, Clone, Serialize)]
pub struct DomainBreakdownEntry {
    pub domain: Domain,
    pub domain_label: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub percentage: u8,
    pub status: DomainStatus,
    pub status_label: &'static str,
}

fn percentage_of_max(score: u8) -> u8 {
    (f32::from(score) / f32::from(MAX_DOMAIN_SCORE) * 100.0).round() as u8
}

impl AssessmentResult {
    /// Per-domain rows in canonical order, with each score expressed as a
    /// rounded percentage of the fixed 24-point maximum.
    pub fn domain_breakdown(&self) -> Vec<DomainBreakdownEntry> {
        self.domain_scores
            .entries()
            .map(|(domain, score)| {
                let status = if self.flagged_domains.contains(&domain) {
                    DomainStatus::Flagged
                } else {
                    DomainStatus::Ok
                };
                DomainBreakdownEntry {
                    domain,
                    domain_label: domain.label(),
                    score,
                    max_score: MAX_DOMAIN_SCORE,
                    percentage: percentage_of_max(score),
                    status,
                    status_label: status.label(),
                }
            })
            .collect()
    }
}
