use crate::lexer::TokenKind;

/// Categories whose concatenation with another space-sensitive category
/// would re-lex as a different token sequence.
pub fn is_space_sensitive(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident | TokenKind::Builtin | TokenKind::Int | TokenKind::Float
    ) || kind.is_keyword()
}

/// Whether a single separating space must go between two adjacent tokens.
///
/// A builtin reference never needs one: its `@` sigil already separates it
/// from whatever came before. `prev == None` is the start of the stream.
pub fn needs_space(prev: Option<TokenKind>, cur: TokenKind) -> bool {
    if cur == TokenKind::Builtin {
        return false;
    }

    prev.is_some_and(is_space_sensitive) && is_space_sensitive(cur)
}
