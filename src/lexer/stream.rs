use crate::Span;

use super::tokens::{Token, TokenKind};

/// A forward-only cursor over classified tokens.
///
/// The parser never looks further ahead than [`TokenSource::current`] and
/// never steps back. Once the input is exhausted every call yields EOF.
pub trait TokenSource {
    /// The token under the cursor.
    fn current(&self) -> &Token;
    /// Consumes the current token and returns it.
    fn skip(&mut self) -> Token;
}

/// [`TokenSource`] over an already tokenized input.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let span = tokens
                .last()
                .map(|token| Span {
                    start: token.span.end.clone(),
                    end: token.span.end.clone(),
                })
                .unwrap_or_else(|| Span {
                    start: crate::Position::null(),
                    end: crate::Position::null(),
                });

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span,
            });
        }

        TokenStream { tokens, pos: 0 }
    }
}

impl TokenSource for TokenStream {
    fn current(&self) -> &Token {
        // `new` guarantees a trailing EOF, so clamping keeps us on it
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn skip(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
