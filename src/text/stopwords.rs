//! Per-language stop-word lists used by lexical density and transition rules.
//! Deliberately small: these are function words, not a full NLP lexicon.

pub const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "had", "has",
    "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its", "not", "of", "on",
    "or", "our", "she", "so", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "to", "was", "we", "were", "what", "which", "who", "will", "with", "you", "your",
];

pub const DUTCH: &[&str] = &[
    "aan", "als", "bij", "dan", "dat", "de", "der", "des", "deze", "die", "dit", "dus", "een",
    "en", "er", "had", "heeft", "het", "hij", "hoe", "ik", "in", "is", "je", "kan", "maar",
    "met", "naar", "niet", "nog", "of", "om", "onder", "ook", "op", "over", "te", "tot", "uit",
    "van", "voor", "waar", "wat", "we", "wel", "wij", "worden", "wordt", "zijn", "zij", "zo",
];

pub const GERMAN: &[&str] = &[
    "aber", "als", "auch", "auf", "aus", "bei", "das", "dass", "dem", "den", "der", "des", "die",
    "ein", "eine", "einen", "einer", "er", "es", "für", "hat", "ich", "im", "in", "ist", "mit",
    "nach", "nicht", "noch", "nur", "oder", "sich", "sie", "sind", "so", "über", "um", "und",
    "von", "vor", "war", "was", "wenn", "werden", "wie", "wird", "zu", "zum", "zur",
];
