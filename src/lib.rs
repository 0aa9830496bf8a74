mod emit;
mod error_print;
mod trie;

pub use crate::emit::generate_c;
pub use crate::error_print::{print_keyword_error, GenError};
pub use crate::trie::{build, Branch, Error as BuildError, TrieNode};
