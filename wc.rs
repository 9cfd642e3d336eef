use tracing::debug;

use crate::tokenize::tokenize;
use crate::types::FrequencyTable;

/// Count how often each exact word text occurs in `text`.
pub fn count_words(text: &str) -> FrequencyTable {
    let words = tokenize(text);
    let mut counts = FrequencyTable::default();
    for word in &words {
        counts.bump(word);
    }
    debug!(tokens = words.len(), distinct = counts.len(), "counted words");
    counts
}
