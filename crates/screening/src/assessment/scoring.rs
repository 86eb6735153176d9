use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::catalog::{Direction, Domain, QuestionCatalog, DOMAIN_COUNT};
use super::responses::ResponseValue;

/// Per-domain score table indexed by [`Domain`]. Always holds all four
/// domains; each value stays inside [0, `MAX_DOMAIN_SCORE`] under the
/// standard catalog shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainScores {
    scores: [u8; DOMAIN_COUNT],
}

impl DomainScores {
    pub fn get(&self, domain: Domain) -> u8 {
        self.scores[domain.index()]
    }

    fn add(&mut self, domain: Domain, points: u8) {
        self.scores[domain.index()] += points;
    }

    /// Entries in canonical domain order.
    pub fn entries(&self) -> impl Iterator<Item = (Domain, u8)> + '_ {
        Domain::ordered()
            .into_iter()
            .map(move |domain| (domain, self.get(domain)))
    }
}

// Wire format is a label-keyed map ({"Behavioral": 9, ...}) so stored and
// emitted payloads match what the questionnaire frontend already consumes.
impl Serialize for DomainScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DOMAIN_COUNT))?;
        for (domain, score) in self.entries() {
            map.serialize_entry(domain.label(), &score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DomainScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoresVisitor;

        impl<'de> Visitor<'de> for ScoresVisitor {
            type Value = DomainScores;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of domain labels to scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut scores = DomainScores::default();
                while let Some((label, score)) = access.next_entry::<String, u8>()? {
                    // Unknown labels are skipped, mirroring the scorer's
                    // treatment of unknown question keys.
                    if let Some(domain) = Domain::from_label(&label) {
                        scores.scores[domain.index()] = score;
                    }
                }
                Ok(scores)
            }
        }

        deserializer.deserialize_map(ScoresVisitor)
    }
}

/// Points contributed by one answered question. Reverse scoring flips the
/// ordinal (`5 - v`) so "never" answers carry the maximum risk signal while
/// each question still contributes between 1 and 4 points.
fn question_points(direction: Direction, ordinal: u8) -> u8 {
    match direction {
        Direction::Forward => ordinal,
        Direction::Reverse => 5 - ordinal,
    }
}

/// Accumulate normalized responses into per-domain scores. Unanswered values
/// and keys missing from the catalog contribute nothing; summation is
/// commutative, so submission order never changes the result.
pub fn score_responses(
    catalog: &QuestionCatalog,
    responses: &BTreeMap<String, ResponseValue>,
) -> DomainScores {
    let mut scores = DomainScores::default();

    for (key, value) in responses {
        let Some(question) = catalog.lookup(key) else {
            continue;
        };
        let ResponseValue::Ordinal(ordinal) = value else {
            continue;
        };
        scores.add(question.domain, question_points(question.direction, *ordinal));
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::MAX_DOMAIN_SCORE;
    use crate::assessment::responses::normalize_answers;

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn score(pairs: &[(&str, &str)]) -> DomainScores {
        let catalog = QuestionCatalog::standard();
        score_responses(&catalog, &normalize_answers(&answers(pairs)))
    }

    #[test]
    fn forward_questions_contribute_their_ordinal() {
        let scores = score(&[("forgetful", "3")]);
        assert_eq!(scores.get(Domain::CognitiveAttention), 3);
        assert_eq!(scores.get(Domain::Behavioral), 0);
    }

    #[test]
    fn reverse_question_flips_the_ordinal() {
        assert_eq!(score(&[("eye_contact", "1")]).get(Domain::Behavioral), 4);
        assert_eq!(score(&[("eye_contact", "4")]).get(Domain::Behavioral), 1);
    }

    #[test]
    fn unknown_keys_and_invalid_values_contribute_nothing() {
        let scores = score(&[
            ("unknown_question", "4"),
            ("clumsy", "often"),
            ("muscle_tone", ""),
        ]);
        for (_, value) in scores.entries() {
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn scores_stay_within_the_domain_bound() {
        let catalog = QuestionCatalog::standard();
        let maxed: BTreeMap<String, String> = catalog
            .questions()
            .map(|question| (question.key.to_string(), "4".to_string()))
            .collect();
        let scores = score_responses(&catalog, &normalize_answers(&maxed));

        // The reverse-scored eye-contact question turns "4" into 1 point.
        assert_eq!(scores.get(Domain::Behavioral), 21);
        assert_eq!(scores.get(Domain::CognitiveAttention), MAX_DOMAIN_SCORE);
        assert_eq!(scores.get(Domain::MotorSkills), MAX_DOMAIN_SCORE);
        assert_eq!(scores.get(Domain::LanguageAcademic), MAX_DOMAIN_SCORE);
    }

    #[test]
    fn serializes_as_label_keyed_map() {
        let scores = score(&[("eye_contact", "1"), ("clumsy", "2")]);
        let json = serde_json::to_value(scores).expect("serialize scores");
        assert_eq!(json["Behavioral"], 4);
        assert_eq!(json["Motor Skills"], 2);
        assert_eq!(json["Cognitive/Attention"], 0);

        let back: DomainScores = serde_json::from_value(json).expect("deserialize scores");
        assert_eq!(back, scores);
    }
}
