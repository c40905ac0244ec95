//! Per-letter output files.
//!
//! Each letter file holds one line per word, formatted as
//! `word:[id1 id2 ... idN]` with ascending file IDs.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::mapreduce::index::Postings;

/// One output line: a word and the files containing it.
#[derive(Debug, Clone, Copy)]
pub struct OutputRecord<'a> {
    pub word: &'a str,
    pub postings: &'a Postings,
}

impl fmt::Display for OutputRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:[", self.word)?;
        for (i, id) in self.postings.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{id}")?;
        }
        f.write_str("]")
    }
}

/// File name of the output for `letter`, e.g. `c.txt`.
pub fn letter_file_name(letter: char) -> String {
    format!("{letter}.txt")
}

/// Full path of the output for `letter` inside `output_dir`.
pub fn letter_file_path(output_dir: &Path, letter: char) -> PathBuf {
    output_dir.join(letter_file_name(letter))
}

/// Line written to a letter file that received no words.
pub fn empty_letter_line(letter: char) -> String {
    format!("No words begin with the letter '{letter}'.")
}

/// Contents of one letter file.
#[derive(Debug)]
pub enum LetterContent<'a> {
    Records(Vec<OutputRecord<'a>>),
    Empty,
}

/// Create or truncate the file for `letter` and write `content` to it.
///
/// Returns the number of word lines written.
pub fn write_letter_file(
    path: &Path,
    letter: char,
    content: &LetterContent<'_>,
) -> io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);

    let written = match content {
        LetterContent::Records(records) => {
            for record in records {
                writeln!(writer, "{record}")?;
            }
            records.len()
        }
        LetterContent::Empty => {
            writeln!(writer, "{}", empty_letter_line(letter))?;
            0
        }
    };

    writer.flush()?;
    Ok(written)
}
