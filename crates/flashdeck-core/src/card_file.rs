//! Flat card file format.
//!
//! A card file is a sequence of three-line records:
//!
//! ```text
//! <term>
//! <definition>
//! <mistake count>
//! ```
//!
//! There is no header and no escaping, so terms and definitions cannot
//! contain newlines. A count that is not a non-negative integer reads as 0.

use std::io::{self, BufRead, Write};

/// One record of a card file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl CardRecord {
    pub fn new(term: impl Into<String>, definition: impl Into<String>, mistakes: u32) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }
}

/// Write records in the order given. Returns the number written.
pub fn write_records<'a, W, I>(writer: &mut W, records: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a str, u32)>,
{
    let mut count = 0;
    for (term, definition, mistakes) in records {
        writeln!(writer, "{}", term)?;
        writeln!(writer, "{}", definition)?;
        writeln!(writer, "{}", mistakes)?;
        count += 1;
    }
    Ok(count)
}

/// Read every record until the input is exhausted.
///
/// A trailing partial record is still returned: a missing definition
/// becomes the empty string and a missing count becomes 0.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<CardRecord>> {
    let mut records = Vec::new();
    let mut lines = reader.lines();

    while let Some(term) = lines.next() {
        let term = term?;
        let definition = lines.next().transpose()?.unwrap_or_default();
        let mistakes = match lines.next().transpose()? {
            Some(text) => parse_mistakes(&term, &text),
            None => {
                tracing::warn!(term = %term, "card record truncated; mistakes default to 0");
                0
            }
        };
        records.push(CardRecord {
            term,
            definition,
            mistakes,
        });
    }

    Ok(records)
}

/// Parse a mistake count, treating anything malformed as 0.
pub fn parse_mistakes(term: &str, text: &str) -> u32 {
    match text.parse::<u32>() {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(term = %term, value = %text, error = %err, "invalid mistake count; using 0");
            0
        }
    }
}
