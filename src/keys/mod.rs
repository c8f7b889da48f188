//! Key translation
//!
//! Turn an input string into monitor key names.
//! - Tokenizer: literal characters and `<name>` escapes
//! - Key map: symbol table, escape aliases, shift rewriting

pub mod keymap;
pub mod tokenizer;

pub use keymap::{resolve, with_shift};
pub use tokenizer::tokenize;
