use tracing::{debug, trace};

use crate::tokenize::tokenize;
use crate::types::{LengthIndex, Letter, LetterIndex};

/// Group the distinct words of `text` by their length in characters.
pub fn group_by_length(text: &str) -> LengthIndex {
    let words = tokenize(text);
    let mut index = LengthIndex::default();
    for word in &words {
        index.bucket_mut(word.chars().count()).insert(word);
    }
    debug!(tokens = words.len(), lengths = index.len(), "grouped words by length");
    index
}

/// Group the words of `text` under every letter they contain.
///
/// Matching ignores ASCII case and counts a letter at any position,
/// including the first character. Letters no word contains get no entry.
pub fn group_by_letter(text: &str) -> LetterIndex {
    let words = tokenize(text);
    let mut index = LetterIndex::default();
    for letter in Letter::all() {
        let mut matches = words.iter().filter(|word| letter.occurs_in(word)).peekable();
        if matches.peek().is_none() {
            continue;
        }
        let bucket = index.bucket_mut(letter);
        for word in matches {
            bucket.insert(word);
        }
        trace!(%letter, words = bucket.len(), "letter bucket filled");
    }
    debug!(tokens = words.len(), letters = index.len(), "grouped words by letter");
    index
}
