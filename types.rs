use std::collections::{btree_map, hash_map, BTreeMap, BTreeSet, HashMap};
use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};

/// A lowercase ASCII letter, `a` through `z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// All 26 letters in alphabetical order
    pub fn all() -> impl Iterator<Item = Letter> {
        ('a'..='z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// True if `word` contains this letter anywhere, ignoring ASCII case
    pub fn occurs_in(self, word: &str) -> bool {
        word.chars().any(|c| c.to_ascii_lowercase() == self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c))
        } else {
            Err(Error::NotALetter(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of distinct words sharing a key, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket(BTreeSet<String>);

impl Bucket {
    pub fn insert(&mut self, word: &str) -> bool {
        if self.0.contains(word) {
            return false;
        }
        self.0.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

/// Word text -> number of occurrences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable(HashMap<String, usize>);

impl FrequencyTable {
    pub(crate) fn bump(&mut self, word: &str) {
        *self.0.entry(word.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens counted
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Entries by count descending, ties broken alphabetically
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        self.0
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            .collect()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, usize> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a String, &'a usize);
    type IntoIter = hash_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Word length in characters -> words of that length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthIndex(BTreeMap<usize, Bucket>);

impl LengthIndex {
    pub(crate) fn bucket_mut(&mut self, length: usize) -> &mut Bucket {
        self.0.entry(length).or_default()
    }

    pub fn get(&self, length: usize) -> Option<&Bucket> {
        self.0.get(&length)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, usize, Bucket> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a LengthIndex {
    type Item = (&'a usize, &'a Bucket);
    type IntoIter = btree_map::Iter<'a, usize, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Letter -> words containing it, letters in alphabetical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterIndex(BTreeMap<Letter, Bucket>);

impl LetterIndex {
    pub(crate) fn bucket_mut(&mut self, letter: Letter) -> &mut Bucket {
        self.0.entry(letter).or_default()
    }

    pub fn get(&self, letter: Letter) -> Option<&Bucket> {
        self.0.get(&letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Letter, Bucket> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a LetterIndex {
    type Item = (&'a Letter, &'a Bucket);
    type IntoIter = btree_map::Iter<'a, Letter, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
