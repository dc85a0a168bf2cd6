//! Word collaborators: the vocabulary oracle and the move parser.
//!
//! Everything here is stateless or immutable after construction; the round
//! state never lives in this module.

pub mod oracle;
pub mod parser;

pub use oracle::{Vocabulary, WordOracle};
pub use parser::extract_word;
