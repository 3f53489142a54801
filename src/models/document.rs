use serde::{Deserialize, Serialize};

/// Placement of a section within the document layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Body content that counts toward coverage and transition checks
    #[default]
    Main,
    /// Sidebars, FAQs, footers and other supporting material
    Supplementary,
}

/// One ordered segment of a pre-segmented document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading text, markup already stripped by the caller
    pub heading: String,
    /// Heading depth (1 = top level)
    pub level: u8,
    /// Plain-text body of the section
    pub body: String,
    /// Layout zone, defaults to `Main`
    #[serde(default)]
    pub zone: Zone,
}

impl Section {
    pub fn new(heading: impl Into<String>, level: u8, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            level,
            body: body.into(),
            zone: Zone::Main,
        }
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Word count of the section body
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// The unit under audit. Immutable input owned by the caller; the engine
/// never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned identifier, echoed into contradictions
    pub id: String,
    /// Document title, used by heading/predicate rules when present
    pub title: Option<String>,
    /// Full plain text of the document
    pub body: String,
    /// Optional pre-segmented sections in reading order. When empty,
    /// section-level rules report themselves as not applicable.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            body: body.into(),
            sections: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Full text for document-level rules: the section bodies when the
    /// document is segmented, otherwise the raw body.
    pub fn text(&self) -> String {
        if self.sections.is_empty() {
            self.body.clone()
        } else {
            self.sections
                .iter()
                .map(|s| s.body.as_str())
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }
}
