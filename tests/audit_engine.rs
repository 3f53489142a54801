//! End-to-end audit tests
//!
//! Exercises the orchestrator against the standard registry: score
//! boundedness, validator isolation, the coverage and predicate scenarios,
//! weight overrides and report serialization.

use prose_audit::{
    AppliesTo, AuditFinding, AuditOptions, AuditOrchestrator, Document, RuleContext,
    RuleDefinition, RuleRegistry, RuleValidator, Section, Severity, WeightConfig,
};
use std::collections::BTreeMap;

fn orchestrator() -> AuditOrchestrator {
    AuditOrchestrator::new(RuleRegistry::standard().unwrap(), WeightConfig::default())
}

fn section(heading: &str, words: usize) -> Section {
    Section::new(heading, 2, "word ".repeat(words).trim().to_string())
}

fn article() -> Document {
    Document::new(
        "article-1",
        "The rollout finished in March. Throughput rose 14 percent across all regions. \
         Latency fell below 20 milliseconds. The team documented every migration step.",
    )
    .with_title("Benefits of the rollout")
    .with_sections(vec![
        Section::new("Benefits overview", 2, "The rollout finished in March."),
        Section::new(
            "Advantages in numbers",
            2,
            "Benefits overview aside, throughput rose 14 percent across all regions.",
        ),
    ])
}

#[test]
fn test_composite_score_is_bounded() {
    let orchestrator = orchestrator();
    let inputs = [
        Document::new("empty", ""),
        Document::new("flat", "One short sentence."),
        article(),
        Document::new("junk", "?!?! . . , , ; ;"),
    ];
    for doc in &inputs {
        let report = orchestrator.audit(doc, &AuditOptions::default());
        assert!(
            (0.0..=100.0).contains(&report.composite_score),
            "composite {} out of bounds for {}",
            report.composite_score,
            doc.id
        );
    }
}

#[test]
fn test_every_finding_references_a_registered_rule() {
    let orchestrator = orchestrator();
    let report = orchestrator.audit(&article(), &AuditOptions::default());
    assert!(!report.findings.is_empty());
    for finding in &report.findings {
        assert!(
            orchestrator.registry().definition(&finding.rule_id).is_some(),
            "orphaned finding for rule {}",
            finding.rule_id
        );
    }
}

struct AlwaysPanics;
impl RuleValidator for AlwaysPanics {
    fn evaluate(&self, _d: &Document, _c: &RuleContext) -> Vec<AuditFinding> {
        panic!("defective validator")
    }
}

#[test]
fn test_defective_validator_is_isolated() {
    let mut registry = RuleRegistry::standard().unwrap();
    registry
        .register(
            RuleDefinition::new(
                "test.broken",
                "Broken rule",
                "structure",
                Severity::Warning,
                AppliesTo::Document,
            ),
            Box::new(AlwaysPanics),
        )
        .unwrap();
    let rule_count = registry.len();
    let orchestrator = AuditOrchestrator::new(registry, WeightConfig::default());

    let report = orchestrator.audit(&article(), &AuditOptions::default());

    let synthetic: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.rule_id == "test.broken")
        .collect();
    assert_eq!(synthetic.len(), 1);
    assert!(!synthetic[0].passed);
    assert_eq!(synthetic[0].severity, Severity::Info);
    assert_eq!(synthetic[0].details, "rule could not be evaluated");

    // Every other rule still reported
    let distinct_rules: std::collections::HashSet<_> =
        report.findings.iter().map(|f| f.rule_id.as_str()).collect();
    assert_eq!(distinct_rules.len(), rule_count);
}

#[test]
fn test_coverage_scenario_dominant_appendix_fails() {
    let doc = Document::new("cov-1", "").with_sections(vec![
        section("Introduction", 50),
        section("Main", 40),
        section("Appendix", 400),
    ]);
    let report = orchestrator().audit(&doc, &AuditOptions::default());
    let coverage = report
        .findings_for("coverage.section-balance")
        .into_iter()
        .next()
        .expect("coverage finding");
    assert!(!coverage.passed);
    assert!(coverage.details.contains("Appendix"));
}

#[test]
fn test_coverage_scenario_balanced_sections_pass() {
    let doc = Document::new("cov-2", "").with_sections(vec![
        section("Part One", 100),
        section("Part Two", 98),
        section("Part Three", 103),
        section("Part Four", 99),
    ]);
    let report = orchestrator().audit(&doc, &AuditOptions::default());
    let coverage = report
        .findings_for("coverage.section-balance")
        .into_iter()
        .next()
        .expect("coverage finding");
    assert!(coverage.passed);
}

#[test]
fn test_predicate_scenario() {
    let conflicted = Document::new("pred-1", "body text")
        .with_title("Risks of X")
        .with_sections(vec![
            Section::new("Risks to watch", 2, "text"),
            Section::new("Benefits of adoption", 2, "text"),
            Section::new("Advantages in practice", 2, "text"),
        ]);
    let report = orchestrator().audit(&conflicted, &AuditOptions::default());
    assert!(!report
        .findings_for("headings.predicate-consistency")[0]
        .passed);

    let aligned = Document::new("pred-2", "body text")
        .with_title("Benefits of X")
        .with_sections(vec![
            Section::new("Benefits overview", 2, "text"),
            Section::new("Advantages in practice", 2, "text"),
            Section::new("Improvements delivered", 2, "text"),
        ]);
    let report = orchestrator().audit(&aligned, &AuditOptions::default());
    assert!(report
        .findings_for("headings.predicate-consistency")[0]
        .passed);
}

#[test]
fn test_vocabulary_exemption_below_minimum() {
    let doc = Document::new("short", "same same same same same same same same");
    let report = orchestrator().audit(&doc, &AuditOptions::default());
    let richness = report.findings_for("vocabulary.type-token-ratio");
    assert!(richness[0].passed);
    assert_eq!(richness[0].score, 100.0);
}

#[test]
fn test_weight_overrides_shift_composite() {
    // One failing phase (coverage), everything else near-perfect
    let doc = Document::new("w-1", "").with_sections(vec![
        section("Main part", 400),
        section("Side note", 30),
    ]);
    let orchestrator = orchestrator();

    let baseline = orchestrator.audit(&doc, &AuditOptions::default());

    let mut boosted_coverage = BTreeMap::new();
    boosted_coverage.insert("coverage".to_string(), 90.0);
    let boosted = orchestrator.audit(
        &doc,
        &AuditOptions {
            weight_overrides: Some(boosted_coverage),
            ..AuditOptions::default()
        },
    );

    assert!(
        boosted.composite_score < baseline.composite_score,
        "boosting the weight of a failing phase must lower the composite"
    );
}

#[test]
fn test_negative_override_is_ignored_not_fatal() {
    let mut overrides = BTreeMap::new();
    overrides.insert("structure".to_string(), -5.0);
    let report = orchestrator().audit(
        &article(),
        &AuditOptions {
            weight_overrides: Some(overrides),
            ..AuditOptions::default()
        },
    );
    assert!((0.0..=100.0).contains(&report.composite_score));
}

#[test]
fn test_report_serializes_to_json() {
    let report = orchestrator().audit(&article(), &AuditOptions::default());
    let json = serde_json::to_string(&report).expect("report serializes");
    assert!(json.contains("composite_score"));
    assert!(json.contains("phase_scores"));
}

#[test]
fn test_phase_scores_cover_all_evaluated_phases() {
    let report = orchestrator().audit(&article(), &AuditOptions::default());
    for phase in ["lexical", "structure", "headings", "coverage", "vocabulary", "density"] {
        assert!(
            report.phase_score(phase).is_some(),
            "missing phase score for {phase}"
        );
    }
    for score in &report.phase_scores {
        assert!((0.0..=100.0).contains(&score.raw_score));
        assert!(score.passing_count <= score.findings_count);
    }
}
