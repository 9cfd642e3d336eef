use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::group::{group_by_length, group_by_letter};
use crate::print::write_table;
use crate::wc::count_words;

pub const SEPARATOR: &str = "--------------------------";

pub const FREQUENCY_SAMPLE: &str = concat!(
    "my name is george and i was a",
    " president and my dad was a president too and his name is also george",
    " are you a president too",
);
pub const LENGTH_SAMPLE: &str = concat!(
    "For Nebraska and the scarlet ",
    "For Nebraska and the cream ",
    "Tho' they go thru many a battle ",
    "Our colors still are seen ",
    "So in contest and in vict'ry ",
    "We will wave them for the team ",
    "And 'twill always stir a Cornhusker ",
    "The old scarlet and the cream",
);
pub const LETTER_SAMPLE: &str = concat!(
    "One day, a zebra found a xylophone on the sidewalk. He quickly ran over, ",
    "picked it up, and gave it to his pet mule. Just then, he found another ",
    "xylophone. He kept that one for himself.",
);

/// Run the three demo sections, separated by a dashed line.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    info!("word frequencies");
    let counts = count_words(FREQUENCY_SAMPLE);
    write_table(out, counts.ranked())?;
    writeln!(out, "\n{}\n", SEPARATOR)?;

    info!("words by length");
    write_table(out, &group_by_length(LENGTH_SAMPLE))?;
    writeln!(out, "\n{}\n", SEPARATOR)?;

    info!("words by letter");
    write_table(out, &group_by_letter(LETTER_SAMPLE))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn three_sections_two_separators() {
        let out = output();
        let sections: Vec<&str> = out.split(&format!("\n{}\n\n", SEPARATOR)).collect();
        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| !s.trim().is_empty()));
    }

    #[test]
    fn frequency_section_is_ranked() {
        let out = output();
        let lines: Vec<&str> = out.lines().take(4).collect();
        assert_eq!(lines, ["a: 3", "and: 3", "president: 3", "george: 2"]);
    }

    #[test]
    fn length_section_keeps_case_variants() {
        let out = output();
        assert!(out.contains("\n3: [And, For, Our, The, and, are, for, old, the]\n"));
        assert!(out.contains("\n8: [Nebraska]\n"));
    }

    #[test]
    fn letter_section_includes_leading_letters() {
        let out = output();
        assert!(out.contains("\nx: [xylophone, xylophone.]\n"));
        assert!(out.contains("\nj: [Just]\n"));
        assert!(out.ends_with("z: [zebra]\n"));
    }

    #[test]
    fn output_is_stable() {
        assert_eq!(output(), output());
    }
}
