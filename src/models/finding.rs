use serde::{Deserialize, Serialize};

/// Severity level attached to a rule definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - nice to fix
    Info,
    /// Should be fixed
    Warning,
    /// Must be fixed before publication
    Critical,
    /// Blocks publication entirely
    Blocker,
}

impl Severity {
    /// Get display name for severity
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        }
    }
}

/// What a rule is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliesTo {
    /// Evaluated once per document
    Document,
    /// Evaluated once per section, with the previous section in context
    Section,
    /// Evaluated against the corpus fact snapshot
    Corpus,
}

/// Immutable metadata describing one rule. Created at registry build time
/// and looked up by id throughout a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Stable identifier, e.g. `lexical.banned-phrases`
    pub id: String,
    pub display_name: String,
    /// Phase (category) key the rule is scored under
    pub phase: String,
    pub severity: Severity,
    pub applies_to: AppliesTo,
}

impl RuleDefinition {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        phase: impl Into<String>,
        severity: Severity,
        applies_to: AppliesTo,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            phase: phase.into(),
            severity,
            applies_to,
        }
    }
}

/// Result of one rule evaluation against one document or section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditFinding {
    /// Id of the rule that produced this finding
    pub rule_id: String,
    pub passed: bool,
    /// Effective score in [0, 100]. Boolean rules contribute 100 or 0;
    /// scalar rules supply their own value.
    pub score: f64,
    /// Human-readable explanation of the outcome
    pub details: String,
    /// Snippet of the offending text, when one exists
    pub evidence_snippet: Option<String>,
    /// Suggested fix, when the rule can propose one
    pub remediation: Option<String>,
    /// Heading of the section this finding belongs to, for section rules
    pub section_key: Option<String>,
    /// Severity copied from the owning rule definition by the orchestrator.
    /// Synthetic "rule errored" findings are always `Info`.
    pub severity: Severity,
}

impl AuditFinding {
    /// A passing boolean finding (score 100)
    pub fn pass(rule_id: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed: true,
            score: 100.0,
            details: details.into(),
            evidence_snippet: None,
            remediation: None,
            section_key: None,
            severity: Severity::Info,
        }
    }

    /// A failing boolean finding (score 0)
    pub fn fail(rule_id: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            passed: false,
            score: 0.0,
            ..Self::pass(rule_id, details)
        }
    }

    /// A scalar finding carrying its own 0-100 score
    pub fn scalar(
        rule_id: impl Into<String>,
        score: f64,
        passed: bool,
        details: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            score: score.clamp(0.0, 100.0),
            ..Self::pass(rule_id, details)
        }
    }

    /// A rule that could not be applied to this input. Counts as passing so
    /// a misconfigured rule never drags down the audit.
    pub fn not_applicable(rule_id: impl Into<String>, details: impl Into<String>) -> Self {
        Self::pass(rule_id, details)
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence_snippet = Some(evidence.into());
        self
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }

    pub fn with_section_key(mut self, section_key: impl Into<String>) -> Self {
        self.section_key = Some(section_key.into());
        self
    }
}
