//! Cross-section transition quality: a section's opening should pick up
//! the thread laid down by the previous section's heading.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document, Zone};
use crate::text::words;
use std::collections::HashSet;

/// Per-section rule flagging weak transitions. For each non-supplementary
/// section after the first, the content words of the previous heading are
/// expected to reappear in the current opening paragraph.
pub struct SectionTransitionRule {
    /// Minimum share of the previous heading's content words that must
    /// recur in the opening paragraph
    pub min_overlap: f64,
    /// Words of the section body considered "opening" when no blank line
    /// delimits the first paragraph
    pub opening_word_window: usize,
}

impl SectionTransitionRule {
    pub const ID: &'static str = "transitions.section-transition";

    pub fn new() -> Self {
        Self {
            min_overlap: 0.2,
            opening_word_window: 50,
        }
    }

    fn opening_paragraph(&self, body: &str) -> String {
        let first_block = body
            .split("\n\n")
            .map(str::trim)
            .find(|b| !b.is_empty())
            .unwrap_or("");
        first_block
            .split_whitespace()
            .take(self.opening_word_window)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for SectionTransitionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for SectionTransitionRule {
    fn evaluate(&self, _document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let (section, previous) = match (ctx.section, ctx.previous_section) {
            (Some(s), Some(p)) => (s, p),
            // First section, or a document audited without section context
            _ => {
                return vec![AuditFinding::not_applicable(
                    Self::ID,
                    "no preceding section to transition from",
                )]
            }
        };
        if section.zone == Zone::Supplementary || previous.zone == Zone::Supplementary {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "supplementary sections are exempt from transition checks",
            )];
        }

        let stop_words = ctx.language.stop_words();
        let content_words: Vec<String> = words(&previous.heading)
            .into_iter()
            .filter(|w| !stop_words.contains(&w.as_str()))
            .collect();
        if content_words.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "previous heading has no content words",
            )];
        }

        let opening: HashSet<String> = words(&self.opening_paragraph(&section.body))
            .into_iter()
            .collect();
        let recurring = content_words
            .iter()
            .filter(|w| opening.contains(*w))
            .count();
        let overlap = recurring as f64 / content_words.len() as f64;

        let finding = if overlap < self.min_overlap {
            AuditFinding::fail(
                Self::ID,
                format!(
                    "weak transition: {recurring} of {} content words from the previous heading recur in the opening",
                    content_words.len()
                ),
            )
            .with_remediation("Open the section by referencing what the previous one established")
        } else {
            AuditFinding::pass(
                Self::ID,
                format!("{:.0}% of the previous heading's content words recur", overlap * 100.0),
            )
        };

        vec![match ctx.section_key {
            Some(key) => finding.with_section_key(key),
            None => finding,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, Section};
    use crate::rules::RuleContext;

    fn eval(previous: &Section, current: &Section) -> AuditFinding {
        let doc = Document::new("d1", "");
        let ctx = RuleContext {
            section: Some(current),
            previous_section: Some(previous),
            section_key: Some(current.heading.as_str()),
            ..RuleContext::default()
        };
        let mut findings = SectionTransitionRule::new().evaluate(&doc, &ctx);
        findings.remove(0)
    }

    #[test]
    fn test_strong_transition_passes() {
        let prev = Section::new("Battery performance", 2, "…");
        let current = Section::new(
            "Charging",
            2,
            "Battery performance shapes charging strategy, so the same test rig applies here.",
        );
        let finding = eval(&prev, &current);
        assert!(finding.passed);
        assert_eq!(finding.section_key.as_deref(), Some("Charging"));
    }

    #[test]
    fn test_weak_transition_fails() {
        let prev = Section::new("Battery performance", 2, "…");
        let current = Section::new(
            "Pricing",
            2,
            "Regional pricing varies by carrier and by contract length across markets.",
        );
        let finding = eval(&prev, &current);
        assert!(!finding.passed);
    }

    #[test]
    fn test_supplementary_sections_exempt() {
        let prev = Section::new("Battery performance", 2, "…");
        let current =
            Section::new("FAQ", 2, "Unrelated questions.").with_zone(Zone::Supplementary);
        let finding = eval(&prev, &current);
        assert!(finding.passed);
    }

    #[test]
    fn test_missing_context_not_applicable() {
        let doc = Document::new("d1", "flat text");
        let findings =
            SectionTransitionRule::new().evaluate(&doc, &RuleContext::default());
        assert!(findings[0].passed);
    }
}
