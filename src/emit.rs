use std::fmt;
use std::io::{self, Write};
use std::iter;

use crate::trie::{Branch, TrieNode};

/// Writes the classification routine for `root` into `out`:
/// `Type keyword(const char *k)`, returning the uppercase tag of the
/// matched keyword, or `sentinel` when nothing matches.
pub fn generate_c<W: Write>(
    root: &TrieNode,
    sentinel: &str,
    out: W,
) -> io::Result<()> {
    let mut c = CCode { out, sentinel };
    c.emit_routine(root)
}

struct CCode<'a, W> {
    out: W,
    sentinel: &'a str,
}

impl<'a, W: Write> CCode<'a, W> {
    fn emit_routine(&mut self, root: &TrieNode) -> io::Result<()> {
        self.writeln(0, "Type keyword(const char *k) {")?;

        match root {
            TrieNode::Leaf(word) => {
                self.emit_leaf(word, 1, 0)?;
                self.sentinel_return(1)?;
            }
            TrieNode::Branch(branch) if branch.children.is_empty() => {
                self.sentinel_return(1)?;
            }
            TrieNode::Branch(branch) => {
                self.writeln(1, "switch (k[0]) {")?;
                for (c, child) in &branch.children {
                    self.writeln(
                        2,
                        format_args!("case {}:", char_literal(*c)),
                    )?;
                    self.emit_node(child, 3, 1)?;
                    self.sentinel_return(3)?;
                }
                self.writeln(2, "default:")?;
                self.sentinel_return(3)?;
                self.writeln(1, "}")?;
            }
        }

        self.writeln(0, "}")
    }

    fn emit_node(
        &mut self,
        node: &TrieNode,
        indent: usize,
        level: usize,
    ) -> io::Result<()> {
        match node {
            TrieNode::Leaf(word) => self.emit_leaf(word, indent, level),
            TrieNode::Branch(branch) => {
                self.emit_branch(branch, indent, level)
            }
        }
    }

    // leaf checks go first: a keyword exhausted here must match before any
    // sibling branch reads past its end
    fn emit_branch(
        &mut self,
        branch: &Branch,
        indent: usize,
        level: usize,
    ) -> io::Result<()> {
        for word in &branch.leaves {
            self.emit_leaf(word, indent, level)?;
        }

        for (c, child) in &branch.children {
            match child {
                TrieNode::Leaf(word) => self.emit_leaf(word, indent, level)?,
                TrieNode::Branch(_) => {
                    self.writeln(
                        indent,
                        format_args!(
                            "if (k[{}] == {}) {{",
                            level,
                            char_literal(*c)
                        ),
                    )?;
                    self.emit_node(child, indent + 1, level + 1)?;
                    self.writeln(indent, "}")?;
                }
            }
        }

        Ok(())
    }

    fn emit_leaf(
        &mut self,
        word: &str,
        indent: usize,
        level: usize,
    ) -> io::Result<()> {
        let checks: Vec<String> = word
            .bytes()
            .enumerate()
            .skip(level)
            .map(|(i, b)| format!("k[{}] == {}", i, char_literal(b as char)))
            .chain(iter::once(format!("k[{}] == '\\0'", word.len())))
            .collect();
        let tag = self.tag(word);

        self.writeln(
            indent,
            format_args!("if ({}) return {};", checks.join(" && "), tag),
        )
    }

    fn tag(&self, word: &str) -> String {
        let tag = word.to_ascii_uppercase();

        if tag == self.sentinel {
            format!("_{}", tag)
        } else {
            tag
        }
    }

    fn sentinel_return(&mut self, indent: usize) -> io::Result<()> {
        let sentinel = self.sentinel;
        self.writeln(indent, format_args!("return {};", sentinel))
    }

    fn writeln<T: fmt::Display>(
        &mut self,
        indent: usize,
        x: T,
    ) -> io::Result<()> {
        for _ in 0..indent {
            write!(&mut self.out, "  ")?;
        }
        writeln!(&mut self.out, "{}", x)
    }
}

fn char_literal(c: char) -> String {
    match c {
        '\'' => "'\\''".to_string(),
        '\\' => "'\\\\'".to_string(),
        _ => format!("'{}'", c),
    }
}
