use rustc_hash::FxHashMap;

use zmin_core::encode_char_literal;

use crate::error::MinifyError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::renamer::Renamer;
use crate::spacing::needs_space;

/// The driving loop: pulls tokens, consults the spacing policy, dispatches
/// on the category, and accumulates output in a buffer that is only
/// surrendered on success.
#[derive(Debug)]
pub struct Emitter {
    renamer: Renamer,
    prev: Option<TokenKind>,
    out: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            renamer: Renamer::new(),
            prev: None,
            out: String::new(),
        }
    }

    /// Runs to end of input, or fails on the first invalid token with the
    /// partial buffer discarded.
    pub fn run(mut self, source: &str) -> Result<(String, FxHashMap<String, String>), MinifyError> {
        for token in Lexer::new(source) {
            let token = token?;
            self.push(&token);
        }

        Ok((self.out, self.renamer.into_map()))
    }

    fn push(&mut self, token: &Token<'_>) {
        if needs_space(self.prev, token.kind) {
            self.out.push(' ');
        }

        match token.kind {
            TokenKind::DocComment | TokenKind::ContainerDocComment => {}
            // An identifier right after a period is a field or member name,
            // not a binding; it keeps its spelling.
            TokenKind::Ident if self.prev != Some(TokenKind::Period) => {
                let renamed = self.renamer.rename(token.text);
                self.out.push_str(renamed);
            }
            TokenKind::CharLiteral => self.out.push_str(&encode_char_literal(token.text)),
            // The newline is the line-token's own terminator; without it two
            // adjacent lines would fuse and change the string's value.
            TokenKind::MultilineStringLine => {
                self.out.push_str(token.text);
                self.out.push('\n');
            }
            _ => self.out.push_str(token.text),
        }

        self.prev = Some(token.kind);
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
