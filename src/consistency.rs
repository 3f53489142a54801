//! Cross-document fact consistency
//!
//! Given triples from the document under audit and a caller-supplied
//! snapshot of corpus triples, finds contradicting claims about the same
//! entity and attribute. Comparison is lexical after normalization, with a
//! relative tolerance for numeric values to absorb unit and rounding
//! differences. No fuzzy entity resolution is performed - aliases and
//! synonyms are the fact-extraction step's problem.

use crate::models::{Contradiction, FactTriple};
use crate::text::normalize;
use regex::Regex;
use std::collections::HashSet;

/// Tunables for value compatibility. The defaults are planning heuristics,
/// not contract: confirm against real corpora before depending on them.
#[derive(Debug, Clone)]
pub struct ConsistencyConfig {
    /// Relative tolerance for numeric values, as a fraction of the larger
    /// magnitude
    pub numeric_tolerance: f64,
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            numeric_tolerance: 0.05,
        }
    }
}

/// Find corpus claims contradicting the current document's claims.
/// O(current x corpus); callers pre-filter the corpus to the same topical
/// collection to keep entity-name collisions out.
pub fn find_contradictions(
    current: &[FactTriple],
    corpus: &[FactTriple],
    config: &ConsistencyConfig,
) -> Vec<Contradiction> {
    let mut contradictions = Vec::new();
    let mut seen: HashSet<(String, String, String, String)> = HashSet::new();

    for fact in current.iter().filter(|f| f.is_well_formed()) {
        let entity = normalize(&fact.entity);
        let attribute = normalize(&fact.attribute);

        for other in corpus.iter().filter(|f| f.is_well_formed()) {
            if other.source_document_id == fact.source_document_id {
                continue;
            }
            if normalize(&other.entity) != entity || normalize(&other.attribute) != attribute {
                continue;
            }
            if values_compatible(&fact.value, &other.value, config.numeric_tolerance) {
                continue;
            }

            let key = (
                entity.clone(),
                attribute.clone(),
                normalize(&other.value),
                other.source_document_id.clone(),
            );
            if seen.insert(key) {
                contradictions.push(Contradiction {
                    entity: fact.entity.clone(),
                    attribute: fact.attribute.clone(),
                    current_value: fact.value.clone(),
                    conflicting_value: other.value.clone(),
                    conflicting_document_id: other.source_document_id.clone(),
                });
            }
        }
    }

    contradictions
}

/// Two values are compatible when they normalize to the same string, or
/// when both parse as numbers within the relative tolerance.
fn values_compatible(a: &str, b: &str, tolerance: f64) -> bool {
    if normalize(a) == normalize(b) {
        return true;
    }
    match (parse_numeric(a), parse_numeric(b)) {
        (Some(x), Some(y)) => {
            let larger = x.abs().max(y.abs());
            if larger == 0.0 {
                return true;
            }
            (x - y).abs() <= tolerance * larger
        }
        _ => false,
    }
}

/// Extract the first numeric token from a value, accepting comma decimals
/// ("1,5 kg") alongside dot decimals
fn parse_numeric(value: &str) -> Option<f64> {
    let number = match Regex::new(r"-?\d+(?:[.,]\d+)?") {
        Ok(r) => r,
        Err(_) => return None,
    };
    let m = number.find(value)?;
    m.as_str().replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(entity: &str, attribute: &str, value: &str, doc: &str) -> FactTriple {
        FactTriple::new(entity, attribute, value, doc)
    }

    #[test]
    fn test_differing_values_contradict() {
        let current = vec![triple("iPhone 15", "weight", "171 grams", "doc-a")];
        let corpus = vec![triple("iPhone 15", "weight", "185 grams", "doc-b")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].conflicting_document_id, "doc-b");
        assert_eq!(found[0].current_value, "171 grams");
    }

    #[test]
    fn test_equal_values_do_not_contradict() {
        let current = vec![triple("iPhone 15", "weight", "171 grams", "doc-a")];
        let corpus = vec![triple("iPhone 15", "weight", "171 grams", "doc-b")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_numeric_tolerance_absorbs_rounding() {
        let current = vec![triple("iPhone 15", "weight", "171 grams", "doc-a")];
        let corpus = vec![triple("iPhone 15", "weight", "172 grams", "doc-b")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        let current = vec![triple("IPHONE  15", "Weight", "Titanium frame", "doc-a")];
        let corpus = vec![triple("iphone 15", "weight", "titanium  frame", "doc-b")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_same_document_claims_are_skipped() {
        let current = vec![triple("iPhone 15", "weight", "171 grams", "doc-a")];
        let corpus = vec![triple("iPhone 15", "weight", "185 grams", "doc-a")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_malformed_triples_ignored() {
        let current = vec![triple("", "weight", "171 grams", "doc-a")];
        let corpus = vec![triple("", "weight", "185 grams", "doc-b")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_corpus_claims_deduplicated() {
        let current = vec![triple("iPhone 15", "weight", "171 grams", "doc-a")];
        let corpus = vec![
            triple("iPhone 15", "weight", "185 grams", "doc-b"),
            triple("iPhone 15", "weight", "185 grams", "doc-b"),
        ];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_comma_decimal_parses() {
        assert!(values_compatible("1,5 kg", "1.5 kg", 0.05));
        assert!(!values_compatible("1,5 kg", "2.5 kg", 0.05));
    }

    #[test]
    fn test_textual_values_contradict_without_numbers() {
        let current = vec![triple("iPhone 15", "color", "blue", "doc-a")];
        let corpus = vec![triple("iPhone 15", "color", "black", "doc-b")];
        let found = find_contradictions(&current, &corpus, &ConsistencyConfig::default());
        assert_eq!(found.len(), 1);
    }
}
