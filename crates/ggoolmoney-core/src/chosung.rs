//! Chosung search — Hangul leading-consonant classification and query matching.
//!
//! Korean users commonly search by typing only the leading consonant
//! (초성, *chosung*) of each syllable: `ㅅㅂ` finds `식비`, `ㅅㅌㅂㅅ` finds
//! `스타벅스`. This module provides the two pieces that make that work:
//!
//! - [`classify`] maps one glyph to its search key: the leading consonant of a
//!   precomposed syllable, a bare consonant unchanged, or anything else
//!   lowercased.
//! - [`matches`] decides whether a haystack matches a query, trying a
//!   case-folded substring match first and falling back to comparing derived
//!   chosung strings when the query contains no completed syllable.
//!
//! [`Query`] is the pre-compiled form of [`matches`] for callers that test one
//! query against many haystacks (the transaction list filter).
//!
//! Everything here is pure: no state survives a call, no error is possible.
//! Case folding uses `char::to_lowercase` / `str::to_lowercase`, which follow
//! the Unicode default mapping and ignore the process locale.

use std::fmt;

// ---------------------------------------------------------------------------
// Hangul syllable block layout
// ---------------------------------------------------------------------------

/// First precomposed Hangul syllable, `가` (U+AC00).
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Syllables sharing one leading consonant: 21 vowels × 28 trailing slots.
pub const SYLLABLES_PER_CHOSUNG: u32 = 21 * 28;

/// Size of the precomposed syllable block: 19 × 21 × 28.
pub const SYLLABLE_COUNT: u32 = 19 * SYLLABLES_PER_CHOSUNG;

/// The 19 leading consonants in syllable-block order, as the Hangul
/// compatibility jamo a keyboard produces for a bare consonant.
pub static CHOSUNG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// `true` if `c` is a precomposed Hangul syllable (`가`..=`힣`).
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&(c as u32))
}

/// `true` if `c` is one of the 19 bare leading consonants in [`CHOSUNG`].
pub fn is_chosung(c: char) -> bool {
    CHOSUNG.contains(&c)
}

// ---------------------------------------------------------------------------
// Glyph classifier
// ---------------------------------------------------------------------------

/// Search key of a single glyph, as produced by [`classify`].
///
/// Iterating yields the key's chars: exactly one for a leading consonant, one
/// or more for a lowercase fold (`'İ'` folds to two chars).
#[derive(Debug, Clone)]
pub enum Classified {
    /// The glyph was a syllable or a bare consonant; this is its leading consonant.
    Chosung(Option<char>),
    /// The glyph is not decomposable and was case-folded.
    Folded(std::char::ToLowercase),
}

impl Classified {
    /// The leading consonant, if the glyph classified as one.
    pub fn chosung(&self) -> Option<char> {
        match self {
            Classified::Chosung(c) => *c,
            Classified::Folded(_) => None,
        }
    }
}

impl Iterator for Classified {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Classified::Chosung(c) => c.take(),
            Classified::Folded(lower) => lower.next(),
        }
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.clone() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Map one glyph to its search key.
///
/// A precomposed syllable yields its leading consonant
/// (`CHOSUNG[(cp - 0xAC00) / 588]`), a bare consonant is returned unchanged,
/// and every other glyph is lowercased. Total over `char`.
pub fn classify(c: char) -> Classified {
    if is_syllable(c) {
        let index = (c as u32 - SYLLABLE_BASE) / SYLLABLES_PER_CHOSUNG;
        return Classified::Chosung(Some(CHOSUNG[index as usize]));
    }
    if is_chosung(c) {
        return Classified::Chosung(Some(c));
    }
    Classified::Folded(c.to_lowercase())
}

/// Classify every glyph of `text` and concatenate the keys.
///
/// `chosung_string("스타벅스 Coffee") == "ㅅㅌㅂㅅ coffee"`.
pub fn chosung_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        out.extend(classify(c));
    }
    out
}

// ---------------------------------------------------------------------------
// Query matcher
// ---------------------------------------------------------------------------

/// A query may take the chosung path only if it holds no completed syllable.
fn is_chosung_eligible(query: &str) -> bool {
    query.chars().all(|c| is_chosung(c) || !is_syllable(c))
}

/// Decide whether `text` matches the user-supplied `query`.
///
/// 1. An empty query matches everything.
/// 2. Case-folded substring containment matches.
/// 3. Otherwise, if the query contains no completed syllable, the chosung
///    strings of both sides are compared by substring containment.
///
/// ```
/// use ggoolmoney_core::chosung::matches;
///
/// assert!(matches("스타벅스 커피", "벅스"));
/// assert!(matches("식비", "ㅅㅂ"));
/// assert!(!matches("식비", "식ㅂ"));
/// ```
pub fn matches(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if text.to_lowercase().contains(&query.to_lowercase()) {
        return true;
    }
    if is_chosung_eligible(query) {
        return chosung_string(text).contains(&chosung_string(query));
    }
    false
}

/// A query compiled once and tested against many haystacks.
///
/// `Query::new(q).matches(t)` always agrees with [`matches`]`(t, q)`; the
/// folded query and its chosung string are computed up front instead of per
/// haystack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    raw: String,
    folded: String,
    /// Derived chosung string, present only when the query is eligible.
    chosung: Option<String>,
}

impl Query {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let folded = raw.to_lowercase();
        let chosung = is_chosung_eligible(&raw).then(|| chosung_string(&raw));
        Self { raw, folded, chosung }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the chosung fallback can apply to this query.
    pub fn is_chosung_eligible(&self) -> bool {
        self.chosung.is_some()
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.raw.is_empty() {
            return true;
        }
        if text.to_lowercase().contains(&self.folded) {
            return true;
        }
        match &self.chosung {
            Some(key) => chosung_string(text).contains(key.as_str()),
            None => false,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
