//! Rule validators
//!
//! Each rule implements [`RuleValidator`]: one pure method taking the
//! document plus a context and returning findings. Validators are total -
//! when required context is missing they report a not-applicable pass
//! instead of erroring, so one misconfigured rule never blocks an audit.

pub mod coverage;
pub mod density;
pub mod headings;
pub mod lexical;
pub mod structure;
pub mod transition;
pub mod vocabulary;

pub use coverage::SectionBalanceRule;
pub use density::InformationDensityRule;
pub use headings::PredicateConsistencyRule;
pub use lexical::{BannedPhrasesRule, StopwordDensityRule};
pub use structure::{ClaimModalityRule, RepeatedOpenersRule, SentenceLengthRule};
pub use transition::SectionTransitionRule;
pub use vocabulary::VocabularyRichnessRule;

use crate::models::{AuditFinding, Document, FactTriple, Section};
use crate::text::Language;

/// Everything a rule may need beyond the raw document text. Section-level
/// rules receive the current and previous sections; document-level rules
/// see `None` for both.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContext<'a> {
    pub language: Language,
    /// Document title, for predicate/heading rules
    pub title: Option<&'a str>,
    /// Fact triples extracted from the document under audit
    pub facts: &'a [FactTriple],
    /// Section currently being evaluated, for section-level rules
    pub section: Option<&'a Section>,
    /// The section preceding the current one, for transition rules
    pub previous_section: Option<&'a Section>,
    /// Stable key identifying the current section in findings
    pub section_key: Option<&'a str>,
}

/// One rule (or small rule family) evaluated over a document or section.
/// Implementations must be side-effect-free and must never panic on
/// malformed input - degrade to a not-applicable finding instead.
pub trait RuleValidator: Send + Sync {
    fn evaluate(&self, document: &Document, ctx: &RuleContext) -> Vec<AuditFinding>;
}
