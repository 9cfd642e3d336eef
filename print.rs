use std::fmt::Display;
use std::io::{self, Write};

use crate::error::Result;

/// Write one `key: value` line per entry, in iteration order.
pub fn write_table<W, I, K, V>(out: &mut W, entries: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    for (key, value) in entries {
        writeln!(out, "{}: {}", key, value)?;
    }
    Ok(())
}

/// Same as [`write_table`], to standard output.
pub fn print_table<I, K, V>(entries: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, entries)?;
    out.flush()?;
    Ok(())
}
