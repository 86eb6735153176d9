use serde::{Deserialize, Serialize};

use super::catalog::Domain;
use super::scoring::DomainScores;

/// Overall classification derived from the number of flagged domains.
/// Ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

/// Score cutoff at or above which a domain is flagged. Conceptual screening
/// thresholds, not clinically validated.
pub const fn threshold(domain: Domain) -> u8 {
    match domain {
        Domain::Behavioral => 14,
        Domain::CognitiveAttention => 16,
        Domain::MotorSkills => 14,
        Domain::LanguageAcademic => 16,
    }
}

/// Outcome of threshold comparison: which domains exceeded their cutoff and
/// the tier implied by how many did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskClassification {
    pub flagged: Vec<Domain>,
    pub tier: RiskTier,
}

/// Compare every domain score against its threshold. The flagged list keeps
/// canonical domain order; downstream narrative text depends on that order.
pub fn classify(scores: &DomainScores) -> RiskClassification {
    let flagged: Vec<Domain> = Domain::ordered()
        .into_iter()
        .filter(|domain| scores.get(*domain) >= threshold(*domain))
        .collect();

    let tier = match flagged.len() {
        0 => RiskTier::Low,
        1 => RiskTier::Moderate,
        _ => RiskTier::High,
    };

    RiskClassification { flagged, tier }
}
