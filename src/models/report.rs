use serde::{Deserialize, Serialize};

use super::facts::Contradiction;
use super::finding::AuditFinding;

/// Aggregate score of one phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseScore {
    pub phase: String,
    /// Mean of the phase's finding scores, in [0, 100]
    pub raw_score: f64,
    pub findings_count: usize,
    pub passing_count: usize,
}

/// Top-level output of one audit run. Fully immutable; ownership transfers
/// to the caller, the engine retains nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Weighted composite in [0, 100]
    pub composite_score: f64,
    pub phase_scores: Vec<PhaseScore>,
    pub findings: Vec<AuditFinding>,
    pub cross_document_contradictions: Vec<Contradiction>,
}

impl AuditReport {
    /// All findings that failed
    pub fn failures(&self) -> Vec<&AuditFinding> {
        self.findings.iter().filter(|f| !f.passed).collect()
    }

    /// Score for a single phase, if it was evaluated
    pub fn phase_score(&self, phase: &str) -> Option<&PhaseScore> {
        self.phase_scores.iter().find(|p| p.phase == phase)
    }

    /// Findings produced by one rule
    pub fn findings_for(&self, rule_id: &str) -> Vec<&AuditFinding> {
        self.findings.iter().filter(|f| f.rule_id == rule_id).collect()
    }
}
