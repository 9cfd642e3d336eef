//! Table-driven scenarios for the three tabulations and the printer

use rstest::rstest;
use word_index::{count_words, group_by_length, group_by_letter, write_table, Letter};

fn render<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: std::fmt::Display,
    V: std::fmt::Display,
{
    let mut buf = Vec::new();
    write_table(&mut buf, entries).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("table output is UTF-8")
}

#[rstest]
#[case("a a b", "a: 2\nb: 1\n")]
#[case("b a b a b", "b: 3\na: 2\n")]
#[case("Go go GO go", "go: 2\nGO: 1\nGo: 1\n")]
#[case("", "")]
fn ranked_frequencies(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(render(count_words(text).ranked()), expected);
}

#[rstest]
#[case("cat dog owl", "3: [cat, dog, owl]\n")]
#[case("I am here", "1: [I]\n2: [am]\n4: [here]\n")]
#[case("tree Tree tree", "4: [Tree, tree]\n")]
#[case("   ", "")]
fn length_index(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(render(&group_by_length(text)), expected);
}

#[rstest]
#[case("peace", "a: [peace]\nc: [peace]\ne: [peace]\np: [peace]\n")]
#[case("Ox", "o: [Ox]\nx: [Ox]\n")]
#[case("zz aa", "a: [aa]\nz: [zz]\n")]
#[case("42", "")]
fn letter_index(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(render(&group_by_letter(text)), expected);
}

#[rstest]
#[case('a', true)]
#[case('z', true)]
#[case('A', false)]
#[case('-', false)]
fn letter_validation(#[case] c: char, #[case] ok: bool) {
    assert_eq!(Letter::try_from(c).is_ok(), ok);
}

#[test]
fn peace_includes_first_letter() {
    let index = group_by_letter("peace");
    let p = Letter::try_from('p').unwrap();
    assert!(index.get(p).is_some_and(|bucket| bucket.contains("peace")));
}
