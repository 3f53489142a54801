//! Rule registry: maps rule ids to validator instances and groups them into
//! scoring phases. Built once at startup, read-only afterwards, safe to
//! share across concurrent audits.

use crate::error::ConfigError;
use crate::models::{AppliesTo, RuleDefinition, Severity};
use crate::rules::{
    BannedPhrasesRule, ClaimModalityRule, InformationDensityRule, PredicateConsistencyRule,
    RepeatedOpenersRule, RuleValidator, SectionBalanceRule, SectionTransitionRule,
    SentenceLengthRule, StopwordDensityRule, VocabularyRichnessRule,
};
use std::collections::HashSet;

/// One registered rule: immutable metadata plus its validator
pub struct RuleEntry {
    pub definition: RuleDefinition,
    pub validator: Box<dyn RuleValidator>,
}

/// Registry of all enabled rules in insertion order
#[derive(Default)]
pub struct RuleRegistry {
    entries: Vec<RuleEntry>,
    phases: Vec<String>,
    ids: HashSet<String>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule. Duplicate ids are a fatal configuration error,
    /// raised here at build time rather than during an audit.
    pub fn register(
        &mut self,
        definition: RuleDefinition,
        validator: Box<dyn RuleValidator>,
    ) -> Result<(), ConfigError> {
        if !self.ids.insert(definition.id.clone()) {
            return Err(ConfigError::DuplicateRule {
                id: definition.id.clone(),
            });
        }
        if !self.phases.iter().any(|p| *p == definition.phase) {
            self.phases.push(definition.phase.clone());
        }
        self.entries.push(RuleEntry {
            definition,
            validator,
        });
        Ok(())
    }

    /// Phase keys in first-registration order
    pub fn phases(&self) -> &[String] {
        &self.phases
    }

    /// Entries belonging to a phase, in registration order
    pub fn by_phase(&self, phase: &str) -> Vec<&RuleEntry> {
        self.entries
            .iter()
            .filter(|e| e.definition.phase == phase)
            .collect()
    }

    /// Look up a rule definition by id
    pub fn definition(&self, id: &str) -> Option<&RuleDefinition> {
        self.entries
            .iter()
            .map(|e| &e.definition)
            .find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The standard rule taxonomy. New rules are added here (or by callers
    /// via `register`); the orchestrator never changes.
    pub fn standard() -> Result<Self, ConfigError> {
        let mut registry = Self::new();

        registry.register(
            RuleDefinition::new(
                StopwordDensityRule::ID,
                "Stop-word density",
                "lexical",
                Severity::Warning,
                AppliesTo::Document,
            ),
            Box::new(StopwordDensityRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                BannedPhrasesRule::ID,
                "Banned filler phrases",
                "lexical",
                Severity::Critical,
                AppliesTo::Document,
            ),
            Box::new(BannedPhrasesRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                SentenceLengthRule::ID,
                "Sentence length ceiling",
                "structure",
                Severity::Warning,
                AppliesTo::Document,
            ),
            Box::new(SentenceLengthRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                ClaimModalityRule::ID,
                "Claim modality",
                "structure",
                Severity::Warning,
                AppliesTo::Document,
            ),
            Box::new(ClaimModalityRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                RepeatedOpenersRule::ID,
                "Repeated sentence openers",
                "structure",
                Severity::Info,
                AppliesTo::Document,
            ),
            Box::new(RepeatedOpenersRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                PredicateConsistencyRule::ID,
                "Heading predicate consistency",
                "headings",
                Severity::Critical,
                AppliesTo::Document,
            ),
            Box::new(PredicateConsistencyRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                SectionBalanceRule::ID,
                "Section coverage balance",
                "coverage",
                Severity::Critical,
                AppliesTo::Document,
            ),
            Box::new(SectionBalanceRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                VocabularyRichnessRule::ID,
                "Vocabulary richness",
                "vocabulary",
                Severity::Warning,
                AppliesTo::Document,
            ),
            Box::new(VocabularyRichnessRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                InformationDensityRule::ID,
                "Information density",
                "density",
                Severity::Warning,
                AppliesTo::Document,
            ),
            Box::new(InformationDensityRule::new()),
        )?;
        registry.register(
            RuleDefinition::new(
                SectionTransitionRule::ID,
                "Section transition quality",
                "transitions",
                Severity::Info,
                AppliesTo::Section,
            ),
            Box::new(SectionTransitionRule::new()),
        )?;

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuditFinding, Document};
    use crate::rules::RuleContext;

    struct AlwaysPass;
    impl RuleValidator for AlwaysPass {
        fn evaluate(&self, _d: &Document, _c: &RuleContext) -> Vec<AuditFinding> {
            vec![AuditFinding::pass("test.rule", "ok")]
        }
    }

    fn definition(id: &str, phase: &str) -> RuleDefinition {
        RuleDefinition::new(id, "Test rule", phase, Severity::Info, AppliesTo::Document)
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut registry = RuleRegistry::new();
        registry
            .register(definition("test.rule", "lexical"), Box::new(AlwaysPass))
            .unwrap();
        let err = registry
            .register(definition("test.rule", "structure"), Box::new(AlwaysPass))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRule { .. }));
    }

    #[test]
    fn test_phases_in_first_seen_order() {
        let mut registry = RuleRegistry::new();
        registry
            .register(definition("a", "lexical"), Box::new(AlwaysPass))
            .unwrap();
        registry
            .register(definition("b", "structure"), Box::new(AlwaysPass))
            .unwrap();
        registry
            .register(definition("c", "lexical"), Box::new(AlwaysPass))
            .unwrap();
        assert_eq!(registry.phases(), ["lexical", "structure"]);
        assert_eq!(registry.by_phase("lexical").len(), 2);
    }

    #[test]
    fn test_standard_registry_builds() {
        let registry = RuleRegistry::standard().unwrap();
        assert_eq!(registry.len(), 10);
        assert!(registry.definition("lexical.banned-phrases").is_some());
        assert_eq!(registry.phases().len(), 7);
    }
}
