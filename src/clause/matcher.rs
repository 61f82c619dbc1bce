use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::{ClauseDefinition, ClauseHit};

/// Fragments of this many characters or fewer are not treated as sentences.
const MIN_SENTENCE_CHARS: usize = 10;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid whitespace pattern");
    static ref TERMINATORS: Regex = Regex::new(r"[.!?]+").expect("valid terminator pattern");
}

/// Split text into sentences.
///
/// Whitespace runs are collapsed to a single space, the text is cut on runs of
/// `.`, `!` and `?`, and each fragment is trimmed. Fragments of ten characters
/// or fewer are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let normalized = WHITESPACE.replace_all(text, " ");
    TERMINATORS
        .split(&normalized)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(String::from)
        .collect()
}

/// Find at most one clause hit per catalogue entry.
///
/// For each definition, keywords are tried in declared order against the
/// lower-cased full text. The first keyword present closes the category: the
/// hit records the first sentence containing it. When the keyword occurs only
/// across a sentence boundary (or in a dropped fragment) the category yields
/// no hit, and later keywords are not consulted.
///
/// Hits are returned in catalogue order.
pub fn match_clauses<'a, I>(text: &str, catalogue: I) -> Vec<ClauseHit>
where
    I: IntoIterator<Item = &'a ClauseDefinition>,
{
    let text_lower = text.to_lowercase();
    let sentences = split_sentences(text);
    let sentences_lower: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();

    let mut hits = Vec::new();

    for def in catalogue {
        for keyword in def.keywords {
            let needle = keyword.to_lowercase();
            if !text_lower.contains(&needle) {
                continue;
            }

            let mut matched: Option<&str> = None;
            for (sentence, lower) in sentences.iter().zip(&sentences_lower) {
                if lower.contains(&needle) {
                    matched = Some(sentence.as_str());
                    break;
                }
            }

            match matched {
                Some(sentence) => {
                    debug!(category = %def.category, keyword, "clause matched");
                    hits.push(ClauseHit::new(def, keyword, sentence));
                }
                None => {
                    debug!(
                        category = %def.category,
                        keyword,
                        "keyword found in text but not inside any sentence; dropped"
                    );
                }
            }
            break;
        }
    }

    hits
}
