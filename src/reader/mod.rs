//! Reading a passage and segmenting clicked words

mod session;
mod tokens;

pub use session::{Click, ReaderSession};
pub use tokens::{Token, clean_word, tokenize};
