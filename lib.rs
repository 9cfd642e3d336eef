pub mod demo;
pub mod error;
pub mod group;
pub mod print;
pub mod tokenize;
pub mod types;
pub mod wc;

pub use error::{Error, Result};
pub use group::{group_by_length, group_by_letter};
pub use print::{print_table, write_table};
pub use tokenize::{token_count, tokenize};
pub use types::{Bucket, FrequencyTable, LengthIndex, Letter, LetterIndex};
pub use wc::count_words;
