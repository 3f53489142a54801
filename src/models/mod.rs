pub mod document;
pub mod facts;
pub mod finding;
pub mod report;

pub use document::{Document, Section, Zone};
pub use facts::{Contradiction, FactTriple};
pub use finding::{AppliesTo, AuditFinding, RuleDefinition, Severity};
pub use report::{AuditReport, PhaseScore};
