//! Audit orchestration
//!
//! Runs every registered validator against a document, isolates
//! per-validator failures, aggregates findings into phase scores, applies
//! the weight configuration and assembles the final report. Stateless
//! between calls: each `audit()` is an independent unit of work, safe to
//! fan out across threads as long as the shared registry is not mutated.

use crate::consistency::{find_contradictions, ConsistencyConfig};
use crate::models::{
    AppliesTo, AuditFinding, AuditReport, Document, FactTriple, PhaseScore, Severity,
};
use crate::registry::{RuleEntry, RuleRegistry};
use crate::rules::RuleContext;
use crate::text::Language;
use crate::weights::WeightConfig;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Penalty applied to the composite score per contradiction. Contradictions
/// inform but never zero out an otherwise good document, so the total is
/// capped. Tunable: the defaults are planning heuristics.
#[derive(Debug, Clone)]
pub struct ContradictionPenalty {
    pub points_per_contradiction: f64,
    pub cap: f64,
}

impl Default for ContradictionPenalty {
    fn default() -> Self {
        Self {
            points_per_contradiction: 2.0,
            cap: 10.0,
        }
    }
}

impl ContradictionPenalty {
    fn points(&self, contradictions: usize) -> f64 {
        (self.points_per_contradiction * contradictions as f64).min(self.cap)
    }
}

/// Per-call options for an audit
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    pub language: Language,
    /// Fact triples extracted from the document under audit
    pub current_facts: Vec<FactTriple>,
    /// Snapshot of corpus triples for cross-document consistency. `None`
    /// skips the consistency check entirely.
    pub corpus_facts: Option<Vec<FactTriple>>,
    /// Per-call phase weight overrides, applied on top of the defaults
    pub weight_overrides: Option<BTreeMap<String, f64>>,
}

/// Runs audits against a fixed registry and weight configuration
pub struct AuditOrchestrator {
    registry: RuleRegistry,
    weights: WeightConfig,
    penalty: ContradictionPenalty,
    consistency: ConsistencyConfig,
}

impl AuditOrchestrator {
    pub fn new(registry: RuleRegistry, weights: WeightConfig) -> Self {
        Self {
            registry,
            weights,
            penalty: ContradictionPenalty::default(),
            consistency: ConsistencyConfig::default(),
        }
    }

    pub fn with_penalty(mut self, penalty: ContradictionPenalty) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_consistency_config(mut self, config: ConsistencyConfig) -> Self {
        self.consistency = config;
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run a full audit. Never errors: defective validators degrade to
    /// synthetic findings, invalid single overrides are dropped, and the
    /// returned report is always complete and well-formed.
    pub fn audit(&self, document: &Document, options: &AuditOptions) -> AuditReport {
        let mut findings = Vec::new();

        for phase in self.registry.phases() {
            let entries = self.registry.by_phase(phase);
            debug!(phase = %phase, rules = entries.len(), "evaluating phase");
            for entry in entries {
                findings.extend(self.run_entry(entry, document, options));
            }
        }

        let phase_scores = self.score_phases(&findings);
        let weights = self.resolve_weights(options);
        let mut composite = composite_score(&phase_scores, &weights);

        let contradictions = match &options.corpus_facts {
            Some(corpus) => {
                let found =
                    find_contradictions(&options.current_facts, corpus, &self.consistency);
                if !found.is_empty() {
                    let penalty = self.penalty.points(found.len());
                    debug!(
                        contradictions = found.len(),
                        penalty, "applying contradiction penalty"
                    );
                    composite -= penalty;
                }
                found
            }
            None => Vec::new(),
        };

        AuditReport {
            composite_score: composite.clamp(0.0, 100.0),
            phase_scores,
            findings,
            cross_document_contradictions: contradictions,
        }
    }

    /// Evaluate one registry entry, stamping severity and absorbing panics
    /// so a defective rule never sinks the audit.
    fn run_entry(
        &self,
        entry: &RuleEntry,
        document: &Document,
        options: &AuditOptions,
    ) -> Vec<AuditFinding> {
        let mut results = Vec::new();

        match entry.definition.applies_to {
            AppliesTo::Document | AppliesTo::Corpus => {
                let ctx = RuleContext {
                    language: options.language,
                    title: document.title.as_deref(),
                    facts: &options.current_facts,
                    ..RuleContext::default()
                };
                results.extend(self.invoke(entry, document, &ctx));
            }
            AppliesTo::Section => {
                if document.sections.is_empty() {
                    let ctx = RuleContext {
                        language: options.language,
                        title: document.title.as_deref(),
                        facts: &options.current_facts,
                        ..RuleContext::default()
                    };
                    results.extend(self.invoke(entry, document, &ctx));
                } else {
                    for (index, section) in document.sections.iter().enumerate() {
                        let ctx = RuleContext {
                            language: options.language,
                            title: document.title.as_deref(),
                            facts: &options.current_facts,
                            section: Some(section),
                            previous_section: index
                                .checked_sub(1)
                                .and_then(|i| document.sections.get(i)),
                            section_key: Some(section.heading.as_str()),
                        };
                        results.extend(self.invoke(entry, document, &ctx));
                    }
                }
            }
        }

        results
    }

    fn invoke(
        &self,
        entry: &RuleEntry,
        document: &Document,
        ctx: &RuleContext,
    ) -> Vec<AuditFinding> {
        let outcome = catch_unwind(AssertUnwindSafe(|| entry.validator.evaluate(document, ctx)));
        match outcome {
            Ok(mut findings) => {
                for finding in &mut findings {
                    finding.severity = entry.definition.severity;
                }
                findings
            }
            Err(_) => {
                warn!(rule = %entry.definition.id, "validator panicked; recording synthetic finding");
                vec![AuditFinding {
                    severity: Severity::Info,
                    ..AuditFinding::fail(
                        entry.definition.id.clone(),
                        "rule could not be evaluated",
                    )
                }]
            }
        }
    }

    /// Mean finding score per phase, in registry phase order
    fn score_phases(&self, findings: &[AuditFinding]) -> Vec<PhaseScore> {
        let mut scores = Vec::new();
        for phase in self.registry.phases() {
            let rule_ids: Vec<&str> = self
                .registry
                .by_phase(phase)
                .iter()
                .map(|e| e.definition.id.as_str())
                .collect();
            let phase_findings: Vec<&AuditFinding> = findings
                .iter()
                .filter(|f| rule_ids.contains(&f.rule_id.as_str()))
                .collect();
            if phase_findings.is_empty() {
                continue;
            }
            let total: f64 = phase_findings.iter().map(|f| f.score).sum();
            scores.push(PhaseScore {
                phase: phase.clone(),
                raw_score: total / phase_findings.len() as f64,
                findings_count: phase_findings.len(),
                passing_count: phase_findings.iter().filter(|f| f.passed).count(),
            });
        }
        scores
    }

    /// Resolve weights for this call. Negative single overrides are dropped
    /// with a warning (smallest-scope recovery) so `audit` stays
    /// infallible; callers wanting fail-fast validation use
    /// `WeightConfig::resolve` directly.
    fn resolve_weights(&self, options: &AuditOptions) -> BTreeMap<String, f64> {
        let sanitized = options.weight_overrides.as_ref().map(|overrides| {
            overrides
                .iter()
                .filter(|(phase, weight)| {
                    if **weight < 0.0 {
                        warn!(phase = %phase, weight = **weight, "ignoring negative weight override");
                        false
                    } else {
                        true
                    }
                })
                .map(|(phase, weight)| (phase.clone(), *weight))
                .collect::<BTreeMap<String, f64>>()
        });

        match self.weights.resolve(sanitized.as_ref()) {
            Ok(weights) => weights,
            Err(err) => {
                warn!(error = %err, "weight resolution failed; falling back to defaults");
                self.weights.resolve(None).unwrap_or_default()
            }
        }
    }
}

/// Weighted mean of phase scores, renormalized over the phases that
/// actually produced findings. Phases carrying weight 0 are evaluated for
/// diagnostics but not scored.
fn composite_score(phase_scores: &[PhaseScore], weights: &BTreeMap<String, f64>) -> f64 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for score in phase_scores {
        let weight = weights.get(&score.phase).copied().unwrap_or(0.0);
        weighted_sum += score.raw_score * weight;
        weight_total += weight;
    }
    if weight_total <= f64::EPSILON {
        return 0.0;
    }
    (weighted_sum / weight_total).clamp(0.0, 100.0)
}
