//! Sentence tokenization and lexical helpers
//!
//! Everything here is a pure function: no state is retained between calls,
//! and the same input always yields the same output.

pub mod stopwords;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Private-use character standing in for protected abbreviation periods
/// while sentence boundaries are located.
const SENTINEL: char = '\u{F8FF}';

/// Target language of the content under audit. Affects stop-word lists,
/// abbreviation protection and sentence-length ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
    De,
}

impl Language {
    /// Parse an ISO-style language code; unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        if code.starts_with("nl") {
            Language::Nl
        } else if code.starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }

    pub fn stop_words(&self) -> &'static [&'static str] {
        match self {
            Language::En => stopwords::ENGLISH,
            Language::Nl => stopwords::DUTCH,
            Language::De => stopwords::GERMAN,
        }
    }

    /// Maximum comfortable sentence length in words. German compounds and
    /// clause nesting push the ceiling up.
    pub fn sentence_word_ceiling(&self) -> usize {
        match self {
            Language::En => 28,
            Language::Nl => 30,
            Language::De => 35,
        }
    }

    /// Multi-character abbreviations whose trailing period must not end a
    /// sentence. Single-letter dotted sequences ("U.S.") are handled by
    /// pattern, not by list.
    pub fn abbreviations(&self) -> &'static [&'static str] {
        const COMMON: &[&str] = &[
            "Dr", "Mr", "Mrs", "Ms", "Prof", "St", "Jr", "Sr", "vs", "etc", "Fig", "No", "ca",
            "approx", "resp", "incl",
        ];
        const DUTCH: &[&str] = &[
            "Dr", "Mr", "Mrs", "Ms", "Prof", "St", "Jr", "Sr", "vs", "etc", "Fig", "No", "ca",
            "approx", "resp", "incl", "bijv", "blz", "nr", "evt", "mln",
        ];
        const GERMAN: &[&str] = &[
            "Dr", "Mr", "Mrs", "Ms", "Prof", "St", "Jr", "Sr", "vs", "etc", "Fig", "No", "ca",
            "approx", "resp", "incl", "Abb", "bzw", "ggf", "Nr", "usw",
        ];
        match self {
            Language::En => COMMON,
            Language::Nl => DUTCH,
            Language::De => GERMAN,
        }
    }
}

/// Split raw text into sentences, protecting abbreviations from false
/// splits. Terminators stay attached to their sentence. Empty input yields
/// an empty vector; text without terminal punctuation comes back as one
/// sentence.
pub fn split_sentences(text: &str, language: Language) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let protected = protect_abbreviations(text, language);

    let terminator = match Regex::new("[.!?\u{3002}]+") {
        Ok(r) => r,
        // Unreachable for a literal pattern; degrade to one sentence
        Err(_) => return vec![text.trim().to_string()],
    };

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in terminator.find_iter(&protected) {
        let follows_whitespace = protected[m.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace());
        if follows_whitespace {
            push_sentence(&mut sentences, &protected[start..m.end()]);
            start = m.end();
        }
    }
    if start < protected.len() {
        push_sentence(&mut sentences, &protected[start..]);
    }

    sentences
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let restored: String = raw
        .chars()
        .map(|c| if c == SENTINEL { '.' } else { c })
        .collect();
    let trimmed = restored.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// Replace periods inside abbreviations with a sentinel so the boundary
/// scan skips them.
fn protect_abbreviations(text: &str, language: Language) -> String {
    let mut protected = text.to_string();

    // Single-letter dotted sequences: "U.S.", "e.g.", "i.e.", "z.B."
    if let Ok(acronym) = Regex::new(r"(?:\p{L}\.){2,}") {
        protected = acronym
            .replace_all(&protected, |caps: &regex::Captures| {
                caps[0].replace('.', &SENTINEL.to_string())
            })
            .into_owned();
    }

    // Known multi-character abbreviations with a trailing period
    let alternation = language.abbreviations().join("|");
    if let Ok(abbrev) = Regex::new(&format!(r"\b({alternation})\.")) {
        protected = abbrev
            .replace_all(&protected, |caps: &regex::Captures| {
                format!("{}{}", &caps[1], SENTINEL)
            })
            .into_owned();
    }

    protected
}

/// Count whitespace-separated words, ignoring zero-length tokens
pub fn count_words(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Lowercased alphabetic tokens of the text, in order. Digits and
/// punctuation are treated as separators.
pub fn words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_alphabetic() {
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Lowercase and collapse runs of whitespace to single spaces. Used for
/// phrase matching and fact-key comparison; originals are kept for display.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
