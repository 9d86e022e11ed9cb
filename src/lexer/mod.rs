//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens,
//! one token per call. It handles:
//!
//! - Single and two-character punctuation with one byte of lookahead
//! - Keywords and identifiers
//! - Decimal integer literals
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
