use super::catalog::Domain;
use super::risk::RiskClassification;

/// Human-readable portion of an assessment: a one-line summary, an expanded
/// narrative, and a recommendation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub message: String,
    pub detailed_message: String,
    pub recommendations: Vec<String>,
}

const LOW_MESSAGE: &str = "Your responses suggest typical developmental patterns.";

const LOW_DETAIL: &str = "Based on your screening responses, your child appears to be developing \
within typical ranges across all assessed areas. Continue monitoring their development and \
providing supportive learning opportunities.";

const LOW_RECOMMENDATIONS: [&str; 4] = [
    "Continue regular well-child check-ups",
    "Provide age-appropriate learning opportunities",
    "Monitor developmental milestones",
    "Consult your pediatrician if you have any concerns",
];

const MODERATE_DETAIL: &str = "Your screening indicates some areas that may benefit from further \
evaluation. This does not necessarily indicate a developmental disorder, but early intervention \
can be very helpful.";

const HIGH_DETAIL: &str = "Your screening suggests multiple areas that may warrant professional \
evaluation. While this tool is not diagnostic, these results indicate that consultation with \
developmental specialists would be beneficial.";

const HIGH_RECOMMENDATIONS: [&str; 4] = [
    "Schedule comprehensive developmental evaluation",
    "Consult with pediatrician and developmental specialists",
    "Consider speech therapy, occupational therapy, or behavioral interventions",
    "Contact early intervention services or school district for support",
];

/// Informational block appended to a moderate-risk narrative, keyed by the
/// single flagged domain.
const fn domain_guidance(domain: Domain) -> &'static str {
    match domain {
        Domain::Behavioral => {
            "\n\n**Informative Content: Behavioral Domain**\nChallenges in social communication \
and interaction, alongside restricted and repetitive behaviors, are core features of Autism \
Spectrum Disorder (ASD). These are not simply preferences but represent neurological differences \
in how the brain processes social information and environmental stimuli. An elevated score here \
suggests a child may find social situations confusing or overwhelming and may rely on routines \
and repetitive behaviors to create predictability. Early intervention, such as speech and \
occupational therapy, can be profoundly beneficial."
        }
        Domain::CognitiveAttention => {
            "\n\n**Informative Content: Cognitive/Attention Domain**\nADHD is a \
neurodevelopmental disorder of executive function\u{2014}the cognitive skills that help us plan, \
focus, and execute tasks. A child with ADHD isn't simply 'being difficult'; their brain is \
managing a constant stream of stimuli and impulses differently. An elevated score may indicate \
challenges with self-regulation, working memory, and cognitive flexibility. Strategies like \
behavioral therapy, environmental modifications, and professional guidance can be effective \
parts of a management plan."
        }
        Domain::MotorSkills => {
            "\n\n**Informative Content: Motor Skills Domain**\nMotor challenges can stem from \
differences in muscle tone, coordination (dyspraxia), or neurological conditions. These are not \
due to a lack of practice but to differences in how the brain sends messages to the muscles. An \
elevated score suggests a child may struggle with the physical coordination required for \
everyday tasks and playground activities. An evaluation by an occupational or physical therapist \
is essential to identify the root cause and develop a targeted therapy plan."
        }
        Domain::LanguageAcademic => {
            "\n\n**Informative Content: Language/Academic Domain**\nDifficulties here often point \
to a Specific Learning Disorder like Dyslexia (reading) or a Language Disorder. Dyslexia is not \
a problem with intelligence; it is a difficulty with phonological processing\u{2014}the ability \
to identify and manipulate the sounds in language. This makes connecting letters to their sounds \
challenging. An elevated score suggests a child may be struggling to crack the linguistic code. \
A formal psychoeducational assessment is key to identifying the specific profile and securing \
effective interventions and accommodations."
        }
    }
}

/// Compose the narrative for a classification. Total over every reachable
/// classification: the flagged-list shape alone selects the template set, so
/// the text can never disagree with the tier derived from the same list.
pub fn compose(classification: &RiskClassification) -> Narrative {
    match classification.flagged.as_slice() {
        [] => Narrative {
            message: LOW_MESSAGE.to_string(),
            detailed_message: LOW_DETAIL.to_string(),
            recommendations: LOW_RECOMMENDATIONS.map(String::from).to_vec(),
        },
        [flagged] => Narrative {
            message: format!(
                "Potential concerns identified in the {} domain.",
                flagged.label()
            ),
            detailed_message: format!("{}{}", MODERATE_DETAIL, domain_guidance(*flagged)),
            recommendations: vec![
                "Discuss results with your child's pediatrician".to_string(),
                "Consider developmental screening with a specialist".to_string(),
                format!(
                    "Monitor the {} area closely",
                    flagged.label().to_lowercase()
                ),
                "Seek early intervention services if available in your area".to_string(),
            ],
        },
        flagged => Narrative {
            message: format!(
                "Potential concerns identified in {} developmental domains.",
                flagged.len()
            ),
            detailed_message: HIGH_DETAIL.to_string(),
            recommendations: HIGH_RECOMMENDATIONS.map(String::from).to_vec(),
        },
    }
}
