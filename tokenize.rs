/// Split text into words on runs of whitespace, keeping case and order.
/// Empty or blank input gives an empty list.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
