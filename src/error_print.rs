use std::error::Error;
use std::fmt;
use std::io;
use std::iter::repeat;
use unicode_width::UnicodeWidthStr;

use crate::trie::Error as BuildError;

#[derive(Debug)]
pub enum GenError {
    IoFail(io::Error),
    BuildFail(BuildError),
}

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::IoFail(e)
    }
}
impl From<BuildError> for GenError {
    fn from(e: BuildError) -> Self {
        GenError::BuildFail(e)
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenError::IoFail(e) => {
                writeln!(formatter, "IO error")?;
                e.fmt(formatter)
            }
            GenError::BuildFail(e) => {
                writeln!(formatter, "Keyword list error")?;
                e.fmt(formatter)
            }
        }
    }
}

impl Error for GenError {
    fn description(&self) -> &str {
        match self {
            GenError::IoFail(e) => e.description(),
            GenError::BuildFail(e) => e.description(),
        }
    }
}

pub fn print_keyword_error(err: &BuildError, source: &str) {
    eprintln!("{}", err);

    let (word, occurrence) = match err {
        // point at the second occurrence, the first one is fine
        BuildError::DuplicateKeyword(word) => (word, 1),
        BuildError::NonAsciiKeyword(word) => (word, 0),
        BuildError::EmptyKeyword => return,
    };

    let line = source
        .lines()
        .filter(|l| l.trim() == word)
        .nth(occurrence)
        .or_else(|| source.lines().find(|l| l.trim() == word));

    if let Some(line) = line {
        eprintln!("\n{}", line);
        let col = line.find(word.as_str()).unwrap_or(0);
        let w = line.get(0..col).map(UnicodeWidthStr::width).unwrap_or(0);
        let underline = repeat("-").take(w).collect::<String>();
        eprintln!("{}^", underline);
    }
}
