use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// Lexical category of a Zig token.
///
/// Plain `//` comments (including `////…` runs) and whitespace are skipped
/// during scanning and never surface. Doc comments do surface as tokens
/// because the emitter must delete their text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[regex(r"//(?:[^/!\n][^\n]*)?", logos::skip)]
    #[regex(r"////[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"///(?:[^/\n][^\n]*)?")]
    DocComment,

    #[regex(r"//![^\n]*")]
    ContainerDocComment,

    // === Keywords ===
    #[token("addrspace")]
    KwAddrspace,
    #[token("align")]
    KwAlign,
    #[token("allowzero")]
    KwAllowzero,
    #[token("and")]
    KwAnd,
    #[token("anyframe")]
    KwAnyframe,
    #[token("anytype")]
    KwAnytype,
    #[token("asm")]
    KwAsm,
    #[token("async")]
    KwAsync,
    #[token("await")]
    KwAwait,
    #[token("break")]
    KwBreak,
    #[token("callconv")]
    KwCallconv,
    #[token("catch")]
    KwCatch,
    #[token("comptime")]
    KwComptime,
    #[token("const")]
    KwConst,
    #[token("continue")]
    KwContinue,
    #[token("defer")]
    KwDefer,
    #[token("else")]
    KwElse,
    #[token("enum")]
    KwEnum,
    #[token("errdefer")]
    KwErrdefer,
    #[token("error")]
    KwError,
    #[token("export")]
    KwExport,
    #[token("extern")]
    KwExtern,
    #[token("fn")]
    KwFn,
    #[token("for")]
    KwFor,
    #[token("if")]
    KwIf,
    #[token("inline")]
    KwInline,
    #[token("linksection")]
    KwLinksection,
    #[token("noalias")]
    KwNoalias,
    #[token("noinline")]
    KwNoinline,
    #[token("nosuspend")]
    KwNosuspend,
    #[token("opaque")]
    KwOpaque,
    #[token("or")]
    KwOr,
    #[token("orelse")]
    KwOrelse,
    #[token("packed")]
    KwPacked,
    #[token("pub")]
    KwPub,
    #[token("resume")]
    KwResume,
    #[token("return")]
    KwReturn,
    #[token("struct")]
    KwStruct,
    #[token("suspend")]
    KwSuspend,
    #[token("switch")]
    KwSwitch,
    #[token("test")]
    KwTest,
    #[token("threadlocal")]
    KwThreadlocal,
    #[token("try")]
    KwTry,
    #[token("union")]
    KwUnion,
    #[token("unreachable")]
    KwUnreachable,
    #[token("usingnamespace")]
    KwUsingnamespace,
    #[token("var")]
    KwVar,
    #[token("volatile")]
    KwVolatile,
    #[token("while")]
    KwWhile,

    // === Identifiers ===
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r#"@"(?:[^"\\\n]|\\.)*""#)]
    QuotedIdent,
    #[regex(r"@[A-Za-z_][A-Za-z0-9_]*")]
    Builtin,

    // === Literals ===
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0x[0-9a-fA-F_]+")]
    #[regex(r"0o[0-7_]+")]
    #[regex(r"0b[01_]+")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*(?:[eE][+-]?[0-9_]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+")]
    #[regex(r"0x[0-9a-fA-F_]+(?:\.[0-9a-fA-F_]+)?[pP][+-]?[0-9_]+")]
    Float,

    #[regex(r#"'(?:[^'\\\n]|\\(?:[nrt\\'"]|x[0-9a-fA-F]{2}|u\{[0-9a-fA-F]+\}))'"#)]
    CharLiteral,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    Str,

    #[regex(r"\\\\[^\n]*")]
    MultilineStringLine,

    // === Punctuation and operators ===
    #[token("&")]
    Amp,
    #[token("&=")]
    AmpEq,
    #[token("*")]
    Star,
    #[token("*=")]
    StarEq,
    #[token("**")]
    StarStar,
    #[token("*%")]
    StarPercent,
    #[token("*%=")]
    StarPercentEq,
    #[token("*|")]
    StarPipe,
    #[token("*|=")]
    StarPipeEq,
    #[token("^")]
    Caret,
    #[token("^=")]
    CaretEq,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("=>")]
    FatArrow,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("<<")]
    Shl,
    #[token("<<=")]
    ShlEq,
    #[token("<<|")]
    ShlPipe,
    #[token("<<|=")]
    ShlPipeEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token(">>")]
    Shr,
    #[token(">>=")]
    ShrEq,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("-")]
    Minus,
    #[token("-=")]
    MinusEq,
    #[token("->")]
    Arrow,
    #[token("-%")]
    MinusPercent,
    #[token("-%=")]
    MinusPercentEq,
    #[token("-|")]
    MinusPipe,
    #[token("-|=")]
    MinusPipeEq,
    #[token("%")]
    Percent,
    #[token("%=")]
    PercentEq,
    #[token(".")]
    Period,
    #[token(".*")]
    PeriodStar,
    #[token("..")]
    DotDot,
    #[token("...")]
    DotDotDot,
    #[token("|")]
    Pipe,
    #[token("|=")]
    PipeEq,
    #[token("||")]
    PipePipe,
    #[token("+")]
    Plus,
    #[token("+=")]
    PlusEq,
    #[token("++")]
    PlusPlus,
    #[token("+%")]
    PlusPercent,
    #[token("+%=")]
    PlusPercentEq,
    #[token("+|")]
    PlusPipe,
    #[token("+|=")]
    PlusPipeEq,
    #[token("?")]
    Question,
    #[token("/")]
    Slash,
    #[token("/=")]
    SlashEq,
    #[token("~")]
    Tilde,
}

impl TokenKind {
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::KwAddrspace
                | Self::KwAlign
                | Self::KwAllowzero
                | Self::KwAnd
                | Self::KwAnyframe
                | Self::KwAnytype
                | Self::KwAsm
                | Self::KwAsync
                | Self::KwAwait
                | Self::KwBreak
                | Self::KwCallconv
                | Self::KwCatch
                | Self::KwComptime
                | Self::KwConst
                | Self::KwContinue
                | Self::KwDefer
                | Self::KwElse
                | Self::KwEnum
                | Self::KwErrdefer
                | Self::KwError
                | Self::KwExport
                | Self::KwExtern
                | Self::KwFn
                | Self::KwFor
                | Self::KwIf
                | Self::KwInline
                | Self::KwLinksection
                | Self::KwNoalias
                | Self::KwNoinline
                | Self::KwNosuspend
                | Self::KwOpaque
                | Self::KwOr
                | Self::KwOrelse
                | Self::KwPacked
                | Self::KwPub
                | Self::KwResume
                | Self::KwReturn
                | Self::KwStruct
                | Self::KwSuspend
                | Self::KwSwitch
                | Self::KwTest
                | Self::KwThreadlocal
                | Self::KwTry
                | Self::KwUnion
                | Self::KwUnreachable
                | Self::KwUsingnamespace
                | Self::KwVar
                | Self::KwVolatile
                | Self::KwWhile
        )
    }
}

/// One classified token: a non-owning view into the caller's source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Range<usize>,
}

/// Streaming tokenizer over one source buffer.
///
/// Yields tokens in source order; an unclassifiable byte sequence yields a
/// [`LexError`] and end of input ends the iterator.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();
        let text = self.inner.slice();

        Some(match kind {
            Ok(kind) => Ok(Token { kind, text, span }),
            Err(()) => Err(LexError {
                span,
                snippet: text.to_string(),
            }),
        })
    }
}

/// Collects the whole token stream, failing on the first invalid token.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::TokenKind::*;
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn classifies_declarations() {
        assert_eq!(
            kinds("pub fn main() void {}"),
            [KwPub, KwFn, Ident, LParen, RParen, Ident, LBrace, RBrace]
        );
    }

    #[test]
    fn plain_comments_vanish_doc_comments_stay() {
        assert_eq!(
            kinds("// plain\n//// four slashes\n/// doc\n//! container\nconst"),
            [DocComment, ContainerDocComment, KwConst]
        );
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(
            kinds("1 0x1F 0o17 0b1010 1_000 3.14 1.0e9 0x1p4"),
            [Int, Int, Int, Int, Int, Float, Float, Float]
        );
    }

    #[test]
    fn char_string_and_quoted_ident() {
        assert_eq!(
            kinds(r#"'a' '\n' '\x41' "hi" @"while" @intCast"#),
            [CharLiteral, CharLiteral, CharLiteral, Str, QuotedIdent, Builtin]
        );
    }

    #[test]
    fn period_family_is_kept_apart() {
        assert_eq!(
            kinds("a.b p.* x[0..1] ..."),
            [
                Ident, Period, Ident, Ident, PeriodStar, Ident, LBracket, Int, DotDot, Int,
                RBracket, DotDotDot
            ]
        );
    }

    #[test]
    fn multiline_string_lines() {
        assert_eq!(
            kinds("\\\\hello\n\\\\world"),
            [MultilineStringLine, MultilineStringLine]
        );
    }

    #[test]
    fn spans_are_byte_offsets() {
        let tokens = tokenize("const x").unwrap();

        assert_eq!(tokens[0].span, 0..5);
        assert_eq!(tokens[1].span, 6..7);
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn rejects_unknown_bytes() {
        let err = tokenize("const $oops").unwrap_err();

        assert_eq!(err.span, 6..7);
        assert_eq!(err.snippet, "$");
    }
}
