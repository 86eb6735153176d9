use std::collections::BTreeMap;

/// Normalized form of one submitted answer. Anything that is not exactly one
/// of the four ordinal strings degrades to `Unanswered` so a partial or
/// malformed submission still evaluates instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseValue {
    Ordinal(u8),
    Unanswered,
}

impl ResponseValue {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "1" => ResponseValue::Ordinal(1),
            "2" => ResponseValue::Ordinal(2),
            "3" => ResponseValue::Ordinal(3),
            "4" => ResponseValue::Ordinal(4),
            _ => ResponseValue::Unanswered,
        }
    }
}

/// Map every submitted answer to a [`ResponseValue`]. Keys are carried through
/// untouched; unknown question keys are resolved (and skipped) later by the
/// scorer.
pub fn normalize_answers(raw: &BTreeMap<String, String>) -> BTreeMap<String, ResponseValue> {
    raw.iter()
        .map(|(key, value)| (key.clone(), ResponseValue::from_raw(value)))
        .collect()
}
