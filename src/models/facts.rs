use serde::{Deserialize, Serialize};

/// One (entity, attribute, value) claim extracted from a document.
/// Extraction happens upstream; the engine only consumes triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactTriple {
    pub entity: String,
    pub attribute: String,
    pub value: String,
    /// Id of the document the triple was extracted from
    pub source_document_id: String,
}

impl FactTriple {
    pub fn new(
        entity: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
        source_document_id: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            attribute: attribute.into(),
            value: value.into(),
            source_document_id: source_document_id.into(),
        }
    }

    /// Triples with an empty entity, attribute or value are ignored rather
    /// than treated as errors.
    pub fn is_well_formed(&self) -> bool {
        !self.entity.trim().is_empty()
            && !self.attribute.trim().is_empty()
            && !self.value.trim().is_empty()
    }
}

/// Two documents asserting incompatible values for the same entity and
/// attribute. Informational: it is reported and may penalize the composite
/// score, but it carries no pass/fail of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contradiction {
    pub entity: String,
    pub attribute: String,
    /// Value claimed by the document under audit, as originally written
    pub current_value: String,
    /// Conflicting value from the corpus, as originally written
    pub conflicting_value: String,
    pub conflicting_document_id: String,
}
