//! Lexical hygiene rules: stop-word density and banned filler phrases.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document};
use crate::text::{normalize, words};
use std::collections::HashMap;

/// Fails when stop words make up too large a share of the document
pub struct StopwordDensityRule {
    /// Maximum tolerated stop-word share of all words
    pub max_density: f64,
}

impl StopwordDensityRule {
    pub const ID: &'static str = "lexical.stopword-density";

    pub fn new() -> Self {
        Self { max_density: 0.45 }
    }
}

impl Default for StopwordDensityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for StopwordDensityRule {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let tokens = words(&document.text());
        if tokens.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document contains no words",
            )];
        }

        let stop_words = ctx.language.stop_words();
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut hits = 0usize;
        for token in &tokens {
            if stop_words.contains(&token.as_str()) {
                hits += 1;
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let density = hits as f64 / tokens.len() as f64;
        if density > self.max_density {
            let mut frequent: Vec<(String, usize)> = counts.into_iter().collect();
            frequent.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
            let evidence = frequent
                .iter()
                .take(5)
                .map(|(w, n)| format!("{w} ({n}x)"))
                .collect::<Vec<_>>()
                .join(", ");
            vec![AuditFinding::fail(
                Self::ID,
                format!(
                    "stop words make up {:.0}% of the text (limit {:.0}%)",
                    density * 100.0,
                    self.max_density * 100.0
                ),
            )
            .with_evidence(evidence)
            .with_remediation("Tighten sentences by cutting filler function words")]
        } else {
            vec![AuditFinding::pass(
                Self::ID,
                format!("stop-word density {:.0}% is within bounds", density * 100.0),
            )]
        }
    }
}

/// Filler and LLM-signature phrases that mark low-effort prose
const BANNED_PHRASES: &[&str] = &[
    "in today's fast-paced world",
    "in today's digital age",
    "in the ever-evolving landscape",
    "delve into",
    "dive deep into",
    "it's important to note",
    "it is worth noting",
    "unlock the potential",
    "unleash the power",
    "look no further",
    "game-changer",
    "elevate your",
    "a rich tapestry",
    "at the end of the day",
    "needless to say",
];

/// Fails when banned filler phrases occur too often
pub struct BannedPhrasesRule {
    /// Occurrences at or above this count fail the rule
    pub max_occurrences: usize,
}

impl BannedPhrasesRule {
    pub const ID: &'static str = "lexical.banned-phrases";

    /// Most matched phrases reported as evidence
    const MAX_EVIDENCE: usize = 5;

    pub fn new() -> Self {
        Self { max_occurrences: 2 }
    }
}

impl Default for BannedPhrasesRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for BannedPhrasesRule {
    fn evaluate(&self, document: &Document, _ctx: &RuleContext) -> Vec<AuditFinding> {
        let text = normalize(&document.text());
        if text.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document contains no text",
            )];
        }

        let mut matched = Vec::new();
        let mut total = 0usize;
        for phrase in BANNED_PHRASES {
            let count = text.matches(phrase).count();
            if count > 0 {
                total += count;
                matched.push(format!("\"{phrase}\" ({count}x)"));
            }
        }

        if total >= self.max_occurrences {
            matched.truncate(Self::MAX_EVIDENCE);
            vec![AuditFinding::fail(
                Self::ID,
                format!("{total} banned filler phrases found"),
            )
            .with_evidence(matched.join(", "))
            .with_remediation("Replace stock phrases with concrete, specific wording")]
        } else {
            vec![AuditFinding::pass(
                Self::ID,
                format!("{total} banned phrases found, below the limit"),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use crate::rules::RuleContext;

    #[test]
    fn test_banned_phrases_fail_on_repetition() {
        let doc = Document::new(
            "d1",
            "In today's fast-paced world you must delve into the details. \
             It's important to note the results.",
        );
        let findings = BannedPhrasesRule::new().evaluate(&doc, &RuleContext::default());
        assert_eq!(findings.len(), 1);
        assert!(!findings[0].passed);
        assert!(findings[0].evidence_snippet.is_some());
    }

    #[test]
    fn test_banned_phrases_pass_on_clean_text() {
        let doc = Document::new("d1", "The measurement ran for three weeks and held steady.");
        let findings = BannedPhrasesRule::new().evaluate(&doc, &RuleContext::default());
        assert!(findings[0].passed);
    }

    #[test]
    fn test_stopword_density_flags_filler_text() {
        let doc = Document::new(
            "d1",
            "it is the of the and the to the in the that the was the for the on the",
        );
        let findings = StopwordDensityRule::new().evaluate(&doc, &RuleContext::default());
        assert!(!findings[0].passed);
    }

    #[test]
    fn test_stopword_density_empty_document_not_applicable() {
        let doc = Document::new("d1", "");
        let findings = StopwordDensityRule::new().evaluate(&doc, &RuleContext::default());
        assert!(findings[0].passed);
    }
}
