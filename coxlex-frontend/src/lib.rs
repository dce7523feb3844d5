//! Text-format adapters: the Coxeter matrix file loader and the word-entry
//! syntax. Kept separate from `coxlex-ir`/`coxlex-opt` so the algorithmic
//! crates stay free of I/O and user-facing grammar concerns.
mod matrix_file;
mod word;

pub use matrix_file::{load_matrix_file, parse_matrix_text};
pub use word::{expand_word, expand_word_with_limits, parse_generators};
