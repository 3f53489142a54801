//! Coverage balance: no single content section may dominate the document.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document, Zone};
use crate::text::normalize;

/// Headings exempt from the balance check. Introductions and conclusions
/// are expected to be short and are skipped, not scored.
const BOILERPLATE_HEADINGS: &[&str] = &[
    "introduction",
    "conclusion",
    "summary",
    "inleiding",
    "conclusie",
    "samenvatting",
    "einleitung",
    "fazit",
    "zusammenfassung",
];

/// Fails when a non-boilerplate main-zone section exceeds a share threshold
/// of the document's total word count
pub struct SectionBalanceRule {
    /// Maximum share of total words one section may hold
    pub max_share: f64,
}

impl SectionBalanceRule {
    pub const ID: &'static str = "coverage.section-balance";

    pub fn new() -> Self {
        Self { max_share: 0.50 }
    }

    fn is_boilerplate(heading: &str) -> bool {
        let normalized = normalize(heading);
        BOILERPLATE_HEADINGS
            .iter()
            .any(|b| normalized.contains(b))
    }
}

impl Default for SectionBalanceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for SectionBalanceRule {
    fn evaluate(&self, document: &Document, _ctx: &RuleContext) -> Vec<AuditFinding> {
        if document.sections.len() < 2 {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document has fewer than two sections",
            )];
        }

        let total: usize = document.sections.iter().map(|s| s.word_count()).sum();
        if total == 0 {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "sections contain no words",
            )];
        }

        let mut offenders = Vec::new();
        for section in &document.sections {
            if section.zone == Zone::Supplementary || Self::is_boilerplate(&section.heading) {
                continue;
            }
            let share = section.word_count() as f64 / total as f64;
            if share > self.max_share {
                offenders.push((section.heading.clone(), share));
            }
        }

        if let Some((heading, share)) = offenders.first() {
            vec![AuditFinding::fail(
                Self::ID,
                format!(
                    "section \"{heading}\" holds {:.0}% of the document (limit {:.0}%)",
                    share * 100.0,
                    self.max_share * 100.0
                ),
            )
            .with_evidence(heading.clone())
            .with_remediation("Split the dominant section or expand the others")]
        } else {
            vec![AuditFinding::pass(
                Self::ID,
                "no section dominates the document",
            )]
        }
    }
}
