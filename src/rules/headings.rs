//! Heading/predicate consistency: the lexical framing of subheadings should
//! not fight the framing of the title.

use super::{RuleContext, RuleValidator};
use crate::models::{AuditFinding, Document};
use crate::text::words;

/// Lexical framing of a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Positive,
    Negative,
    Instructional,
    Neutral,
}

const POSITIVE: &[&str] = &[
    "benefits", "advantages", "improvements", "gains", "pros", "opportunities", "strengths",
    "voordelen", "kansen", "vorteile", "chancen",
];

const NEGATIVE: &[&str] = &[
    "risks", "dangers", "problems", "drawbacks", "cons", "pitfalls", "mistakes", "weaknesses",
    "nadelen", "risico", "fouten", "nachteile", "risiken", "fehler",
];

const INSTRUCTIONAL: &[&str] = &[
    "how", "guide", "steps", "tutorial", "tips", "checklist", "handleiding", "stappen",
    "anleitung", "schritte",
];

fn classify(heading: &str) -> Frame {
    for word in words(heading) {
        let w = word.as_str();
        if INSTRUCTIONAL.contains(&w) {
            return Frame::Instructional;
        }
        if POSITIVE.contains(&w) {
            return Frame::Positive;
        }
        if NEGATIVE.contains(&w) {
            return Frame::Negative;
        }
    }
    Frame::Neutral
}

fn opposite(frame: Frame) -> Option<Frame> {
    match frame {
        Frame::Positive => Some(Frame::Negative),
        Frame::Negative => Some(Frame::Positive),
        _ => None,
    }
}

/// Flags documents whose title framing conflicts with two or more
/// subheadings. One conflict is treated as natural variation, and an
/// instructional subheading bridges the tension.
pub struct PredicateConsistencyRule {
    /// Conflicting subheadings required before the rule fails
    pub min_conflicts: usize,
}

impl PredicateConsistencyRule {
    pub const ID: &'static str = "headings.predicate-consistency";

    pub fn new() -> Self {
        Self { min_conflicts: 2 }
    }
}

impl Default for PredicateConsistencyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator for PredicateConsistencyRule {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding> {
        let title = match ctx.title.or(document.title.as_deref()) {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return vec![AuditFinding::not_applicable(
                    Self::ID,
                    "no title supplied",
                )]
            }
        };
        if document.sections.is_empty() {
            return vec![AuditFinding::not_applicable(
                Self::ID,
                "document has no sections",
            )];
        }

        let title_frame = classify(title);
        let conflicting_frame = match opposite(title_frame) {
            Some(f) => f,
            // Instructional or neutral titles accept any subheading framing
            None => {
                return vec![AuditFinding::pass(
                    Self::ID,
                    "title framing is neutral or instructional",
                )]
            }
        };

        let mut conflicts: Vec<&str> = Vec::new();
        let mut has_bridge = false;
        for section in &document.sections {
            match classify(&section.heading) {
                f if f == conflicting_frame => conflicts.push(section.heading.as_str()),
                Frame::Instructional => has_bridge = true,
                _ => {}
            }
        }

        if conflicts.len() >= self.min_conflicts && !has_bridge {
            vec![AuditFinding::fail(
                Self::ID,
                format!(
                    "{} subheadings conflict with the title's framing",
                    conflicts.len()
                ),
            )
            .with_evidence(conflicts.join("; "))
            .with_remediation(
                "Align subheadings with the title's framing or add an instructional bridge section",
            )]
        } else {
            vec![AuditFinding::pass(
                Self::ID,
                format!("{} conflicting subheadings", conflicts.len()),
            )]
        }
    }
}
