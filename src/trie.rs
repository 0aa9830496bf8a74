use std::error;
use std::fmt;

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TrieNode {
    Leaf(String),
    Branch(Branch),
}

/// Keywords exhausted at this depth, plus children keyed by the character
/// at this depth, both in first-seen input order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Branch {
    pub(crate) leaves: Vec<String>,
    pub(crate) children: Vec<(char, TrieNode)>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    EmptyKeyword,
    DuplicateKeyword(String),
    NonAsciiKeyword(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let desc = error::Error::description(self);
        match self {
            Error::DuplicateKeyword(word) | Error::NonAsciiKeyword(word) => {
                write!(f, "{}: {}", desc, word)
            }
            _ => f.write_str(desc),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::EmptyKeyword => "Empty keyword",
            Error::DuplicateKeyword(_) => "Duplicate keyword",
            Error::NonAsciiKeyword(_) => "Non-ascii keyword",
        }
    }
}

/// Validates the keyword list and partitions it into a prefix tree, one
/// character position per level.
pub fn build(keywords: &[String]) -> Result<TrieNode, Error> {
    validate(keywords)?;

    let words: Vec<&str> = keywords.iter().map(String::as_str).collect();

    Ok(build_level(&words, 0))
}

fn validate(keywords: &[String]) -> Result<(), Error> {
    let mut seen = FxHashSet::default();

    for word in keywords {
        if word.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        if !word.is_ascii() {
            return Err(Error::NonAsciiKeyword(word.clone()));
        }
        if !seen.insert(word.as_str()) {
            return Err(Error::DuplicateKeyword(word.clone()));
        }
    }

    Ok(())
}

fn build_level(words: &[&str], level: usize) -> TrieNode {
    // a single remaining candidate needs no further discrimination; the
    // leaf check verifies the whole remaining suffix in one step
    if words.len() == 1 {
        return TrieNode::Leaf(words[0].to_string());
    }

    let mut branch = Branch::default();

    for word in words {
        match char_at(word, level) {
            None => branch.leaves.push((*word).to_string()),
            Some(c) => {
                if branch.children.iter().any(|(key, _)| *key == c) {
                    continue;
                }
                let shared: Vec<&str> = words
                    .iter()
                    .cloned()
                    .filter(|w| char_at(w, level) == Some(c))
                    .collect();
                branch.children.push((c, build_level(&shared, level + 1)));
            }
        }
    }

    TrieNode::Branch(branch)
}

// keywords are validated ascii, one byte per position
fn char_at(word: &str, level: usize) -> Option<char> {
    word.as_bytes().get(level).map(|b| *b as char)
}

impl TrieNode {
    /// Runs the decision tree directly over `token`, in the same check
    /// order as the emitted routine: leaf checks first, then the child
    /// keyed by the character at the current position. Returns the matched
    /// keyword; `None` is the sentinel case.
    pub fn classify(&self, token: &str) -> Option<&str> {
        self.classify_level(token, 0)
    }

    fn classify_level(&self, token: &str, level: usize) -> Option<&str> {
        match self {
            TrieNode::Leaf(word) => suffix_match(word, token, level),
            TrieNode::Branch(branch) => {
                for word in &branch.leaves {
                    if let Some(word) = suffix_match(word, token, level) {
                        return Some(word);
                    }
                }

                let c = *token.as_bytes().get(level)? as char;
                for (key, child) in &branch.children {
                    if *key == c {
                        return child.classify_level(token, level + 1);
                    }
                }

                None
            }
        }
    }
}

// positions before `level` matched on the way down; the token matches iff
// its remaining bytes equal the keyword's remaining bytes exactly
fn suffix_match<'a>(
    word: &'a str,
    token: &str,
    level: usize,
) -> Option<&'a str> {
    if token.as_bytes().get(level..) == Some(&word.as_bytes()[level..]) {
        Some(word)
    } else {
        None
    }
}
