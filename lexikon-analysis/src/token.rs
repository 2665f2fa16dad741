//! Tokens and tokenizers.

use std::fmt;

/// One analyzed token: the term text and its ordinal position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Term text, lowercased by the tokenizer.
    pub text: String,
    /// Zero-based position of the token in the token stream.
    pub position: usize,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// Splits raw text into a token stream.
pub trait Tokenizer: Send + Sync + fmt::Debug {
    /// Tokenize `text`. Implementations lowercase as they split so that
    /// downstream filters see a uniform stream.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Default tokenizer: splits on any non-alphanumeric character and
/// lowercases. Numeric runs are kept as tokens ("h2o" survives whole because
/// the split is per character class boundary only at non-alphanumerics).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_alphanumeric() {
                for lower in ch.to_lowercase() {
                    current.push(lower);
                }
            } else if !current.is_empty() {
                let position = tokens.len();
                tokens.push(Token::new(std::mem::take(&mut current), position));
            }
        }
        if !current.is_empty() {
            let position = tokens.len();
            tokens.push(Token::new(current, position));
        }
        tokens
    }
}
