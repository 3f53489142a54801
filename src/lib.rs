// Prose-audit - rule-based content audit engine
// Evaluates long-form text against a taxonomy of structural and semantic
// writing rules, producing per-rule findings, phase sub-scores and a single
// weighted composite score, with cross-document fact-consistency checking.

pub mod consistency;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod registry;
pub mod rules;
pub mod text;
pub mod weights;

pub use error::ConfigError;

// Re-export commonly used types
pub use consistency::{find_contradictions, ConsistencyConfig};
pub use models::{
    AppliesTo, AuditFinding, AuditReport, Contradiction, Document, FactTriple, PhaseScore,
    RuleDefinition, Section, Severity, Zone,
};
pub use orchestrator::{AuditOptions, AuditOrchestrator, ContradictionPenalty};
pub use registry::{RuleEntry, RuleRegistry};
pub use rules::{RuleContext, RuleValidator};
pub use text::{count_words, split_sentences, Language};
pub use weights::{WeightConfig, DEFAULT_WEIGHTS};
