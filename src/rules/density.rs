//! Information density. With extracted fact triples the score is the share
//! of triples whose terms actually appear in the text; without triples a
//! pattern heuristic over sentences stands in.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document};
use crate::text::{normalize, split_sentences, Language};

/// Scalar rule scoring how much verifiable substance the text carries
pub struct InformationDensityRule {
    /// Term-density share earning a passing verdict
    pub pass_threshold: f64,
    /// Share of signal-carrying sentences earning full credit in the
    /// fallback heuristic
    pub full_credit_signal_share: f64,
}

impl InformationDensityRule {
    pub const ID: &'static str = "density.information-density";

    pub fn new() -> Self {
        Self {
            pass_threshold: 0.4,
            full_credit_signal_share: 0.5,
        }
    }

    fn quantifier_words(language: Language) -> &'static [&'static str] {
        match language {
            Language::En => &[
                "percent", "million", "billion", "thousand", "half", "quarter", "double",
                "average",
            ],
            Language::Nl => &[
                "procent", "miljoen", "miljard", "duizend", "helft", "kwart", "gemiddeld",
            ],
            Language::De => &[
                "prozent", "million", "millionen", "milliarde", "tausend", "hälfte", "viertel",
                "durchschnitt",
            ],
        }
    }

    /// True when a sentence carries a number, a quantifier word, or a
    /// mid-sentence capitalized token (a cheap named-entity signal)
    fn carries_signal(sentence: &str, language: Language) -> bool {
        if sentence.chars().any(|c| c.is_ascii_digit()) {
            return true;
        }
        let lower = normalize(sentence);
        if Self::quantifier_words(language)
            .iter()
            .any(|q| lower.contains(q))
        {
            return true;
        }
        sentence
            .split_whitespace()
            .skip(1)
            .any(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
    }
}

impl Default for InformationDensityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for InformationDensityRule {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let text = normalize(&document.text());
        if text.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document contains no text",
            )];
        }

        let usable: Vec<_> = ctx.facts.iter().filter(|f| f.is_well_formed()).collect();
        if !usable.is_empty() {
            let hits = usable
                .iter()
                .filter(|f| {
                    text.contains(&normalize(&f.entity)) && text.contains(&normalize(&f.value))
                })
                .count();
            let density = hits as f64 / usable.len() as f64;
            let score = density * 100.0;
            return vec![AuditFinding::scalar(
                Self::ID,
                score,
                density >= self.pass_threshold,
                format!(
                    "{hits} of {} extracted facts are grounded in the text",
                    usable.len()
                ),
            )];
        }

        // No triples supplied: fall back to a per-sentence signal heuristic
        let sentences = split_sentences(&document.text(), ctx.language);
        if sentences.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document contains no sentences",
            )];
        }
        let signal = sentences
            .iter()
            .filter(|s| Self::carries_signal(s, ctx.language))
            .count();
        let share = signal as f64 / sentences.len() as f64;
        let score = (share / self.full_credit_signal_share * 100.0).clamp(0.0, 100.0);
        vec![AuditFinding::scalar(
            Self::ID,
            score,
            share >= self.pass_threshold * self.full_credit_signal_share,
            format!(
                "{signal} of {} sentences carry numbers, quantifiers or named entities",
                sentences.len()
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, FactTriple};
    use crate::rules::RuleContext;

    #[test]
    fn test_grounded_facts_score_high() {
        let doc = Document::new("d1", "The iPhone 15 weighs 171 grams and ships in blue.");
        let facts = vec![
            FactTriple::new("iPhone 15", "weight", "171 grams", "d1"),
            FactTriple::new("iPhone 15", "color", "blue", "d1"),
        ];
        let ctx = RuleContext {
            facts: &facts,
            ..RuleContext::default()
        };
        let findings = InformationDensityRule::new().evaluate(&doc, &ctx);
        assert!(findings[0].passed);
        assert_eq!(findings[0].score, 100.0);
    }

    #[test]
    fn test_ungrounded_facts_score_low() {
        let doc = Document::new("d1", "A vague paragraph saying nothing specific at all.");
        let facts = vec![FactTriple::new("iPhone 15", "weight", "171 grams", "d1")];
        let ctx = RuleContext {
            facts: &facts,
            ..RuleContext::default()
        };
        let findings = InformationDensityRule::new().evaluate(&doc, &ctx);
        assert!(!findings[0].passed);
        assert_eq!(findings[0].score, 0.0);
    }

    #[test]
    fn test_malformed_triples_are_ignored() {
        let doc = Document::new("d1", "The iPhone 15 weighs 171 grams.");
        let facts = vec![
            FactTriple::new("iPhone 15", "weight", "171 grams", "d1"),
            FactTriple::new("", "weight", "185 grams", "d1"),
        ];
        let ctx = RuleContext {
            facts: &facts,
            ..RuleContext::default()
        };
        let findings = InformationDensityRule::new().evaluate(&doc, &ctx);
        assert_eq!(findings[0].score, 100.0);
    }

    #[test]
    fn test_fallback_heuristic_without_facts() {
        let dense = Document::new(
            "d1",
            "Revenue rose 14 percent. Berlin led the growth. Costs fell by 3 million.",
        );
        let findings = InformationDensityRule::new().evaluate(&dense, &RuleContext::default());
        assert!(findings[0].passed);

        let vague = Document::new(
            "d2",
            "Things went well overall. People seemed happy. Everyone agreed broadly.",
        );
        let findings = InformationDensityRule::new().evaluate(&vague, &RuleContext::default());
        assert!(findings[0].score < 50.0);
    }
}
