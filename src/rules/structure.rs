//! Sentence-level structure rules: length ceilings, claim modality and
//! repetitive sentence openers. All operate on the tokenizer's output with
//! per-language thresholds.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document};
use crate::text::{count_words, split_sentences, words, Language};

/// Fails when too many sentences exceed the per-language word ceiling
pub struct SentenceLengthRule {
    /// Violating sentences tolerated before the rule fails
    pub tolerance: usize,
}

impl SentenceLengthRule {
    pub const ID: &'static str = "structure.sentence-length";

    pub fn new() -> Self {
        Self { tolerance: 2 }
    }
}

impl Default for SentenceLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for SentenceLengthRule {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let sentences = split_sentences(&document.text(), ctx.language);
        if sentences.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document contains no sentences",
            )];
        }

        let ceiling = ctx.language.sentence_word_ceiling();
        let violations: Vec<&String> = sentences
            .iter()
            .filter(|s| count_words(s) > ceiling)
            .collect();

        if violations.len() > self.tolerance {
            let evidence = violations
                .first()
                .map(|s| truncate(s, 120))
                .unwrap_or_default();
            vec![AuditFinding::fail(
                Self::ID,
                format!(
                    "{} sentences exceed the {}-word ceiling (tolerance {})",
                    violations.len(),
                    ceiling,
                    self.tolerance
                ),
            )
            .with_evidence(evidence)
            .with_remediation("Split long sentences at clause boundaries")]
        } else {
            vec![AuditFinding::pass(
                Self::ID,
                format!(
                    "{} of {} sentences exceed the {}-word ceiling",
                    violations.len(),
                    sentences.len(),
                    ceiling
                ),
            )]
        }
    }
}

/// Fails when too many sentences hedge their claims with uncertainty markers
pub struct ClaimModalityRule {
    /// Maximum tolerated share of hedged sentences
    pub max_hedged_share: f64,
}

impl ClaimModalityRule {
    pub const ID: &'static str = "structure.claim-modality";

    pub fn new() -> Self {
        Self {
            max_hedged_share: 0.30,
        }
    }

    fn hedge_words(language: Language) -> &'static [&'static str] {
        match language {
            Language::En => &[
                "might", "could", "perhaps", "possibly", "maybe", "arguably", "somewhat",
                "presumably", "seemingly",
            ],
            Language::Nl => &[
                "misschien",
                "mogelijk",
                "wellicht",
                "vermoedelijk",
                "waarschijnlijk",
                "eventueel",
            ],
            Language::De => &[
                "vielleicht",
                "möglicherweise",
                "eventuell",
                "vermutlich",
                "womöglich",
                "wohl",
            ],
        }
    }
}

impl Default for ClaimModalityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for ClaimModalityRule {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let sentences = split_sentences(&document.text(), ctx.language);
        if sentences.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document contains no sentences",
            )];
        }

        let hedges = Self::hedge_words(ctx.language);
        let hedged = sentences
            .iter()
            .filter(|s| {
                words(s)
                    .iter()
                    .any(|w| hedges.contains(&w.as_str()))
            })
            .count();

        let share = hedged as f64 / sentences.len() as f64;
        if share > self.max_hedged_share {
            vec![AuditFinding::fail(
                Self::ID,
                format!(
                    "{:.0}% of sentences hedge their claims (limit {:.0}%)",
                    share * 100.0,
                    self.max_hedged_share * 100.0
                ),
            )
            .with_remediation("State verifiable claims directly; reserve hedging for genuine uncertainty")]
        } else {
            vec![AuditFinding::pass(
                Self::ID,
                format!("{:.0}% of sentences are hedged", share * 100.0),
            )]
        }
    }
}

/// Fails when several consecutive sentences open with the same word
pub struct RepeatedOpenersRule {
    /// Run length at which the rule fails
    pub max_run: usize,
}

impl RepeatedOpenersRule {
    pub const ID: &'static str = "structure.repeated-openers";

    pub fn new() -> Self {
        Self { max_run: 3 }
    }
}

impl Default for RepeatedOpenersRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for RepeatedOpenersRule {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let sentences = split_sentences(&document.text(), ctx.language);
        if sentences.len() < self.max_run {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "too few sentences to evaluate opener variety",
            )];
        }

        let openers: Vec<String> = sentences
            .iter()
            .map(|s| words(s).first().cloned().unwrap_or_default())
            .collect();

        let mut run = 1usize;
        let mut worst: Option<(String, usize)> = None;
        for pair in openers.windows(2) {
            if !pair[0].is_empty() && pair[0] == pair[1] {
                run += 1;
                if worst.as_ref().map_or(true, |(_, n)| run > *n) {
                    worst = Some((pair[0].clone(), run));
                }
            } else {
                run = 1;
            }
        }

        match worst {
            Some((word, n)) if n >= self.max_run => vec![AuditFinding::fail(
                Self::ID,
                format!("{n} consecutive sentences open with \"{word}\""),
            )
            .with_remediation("Vary sentence openings to keep the rhythm from flattening")],
            _ => vec![AuditFinding::pass(Self::ID, "sentence openers vary")],
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Document;
    use crate::rules::RuleContext;

    fn ctx() -> RuleContext<'static> {
        RuleContext::default()
    }

    #[test]
    fn test_sentence_length_tolerates_outliers() {
        // Two long sentences are within the tolerance of 2
        let long = "word ".repeat(40);
        let text = format!("{long}. {long}. Short one here.");
        let doc = Document::new("d1", text);
        let findings = SentenceLengthRule::new().evaluate(&doc, &ctx());
        assert!(findings[0].passed);
    }

    #[test]
    fn test_sentence_length_fails_past_tolerance() {
        let long = "word ".repeat(40);
        let text = format!("{long}. {long}. {long}. Short one here.");
        let doc = Document::new("d1", text);
        let findings = SentenceLengthRule::new().evaluate(&doc, &ctx());
        assert!(!findings[0].passed);
        assert!(findings[0].evidence_snippet.is_some());
    }

    #[test]
    fn test_claim_modality_flags_hedging() {
        let doc = Document::new(
            "d1",
            "This might work. It could possibly help. Perhaps it matters. Maybe not.",
        );
        let findings = ClaimModalityRule::new().evaluate(&doc, &ctx());
        assert!(!findings[0].passed);
    }

    #[test]
    fn test_claim_modality_passes_direct_prose() {
        let doc = Document::new(
            "d1",
            "The update shipped on Monday. Throughput rose by twelve percent. Costs fell.",
        );
        let findings = ClaimModalityRule::new().evaluate(&doc, &ctx());
        assert!(findings[0].passed);
    }

    #[test]
    fn test_repeated_openers() {
        let doc = Document::new(
            "d1",
            "We built the index. We shipped it early. We measured the gains. Results followed.",
        );
        let findings = RepeatedOpenersRule::new().evaluate(&doc, &ctx());
        assert!(!findings[0].passed);

        let varied = Document::new(
            "d2",
            "We built the index. The team shipped it early. Gains were measured. Results followed.",
        );
        let findings = RepeatedOpenersRule::new().evaluate(&varied, &ctx());
        assert!(findings[0].passed);
    }
}
