/*!
# Labl Language Module

This Rust module provides lexical analysis of the Labl language:
quote-aware tokenization and classification of lexemes into tokens.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::classify;
pub use lex::lex;
pub use token::Token;
pub use token::Word;
