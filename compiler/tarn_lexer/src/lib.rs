//! Lexer for Tarn using logos with string interning.
//!
//! [`Lexer`] is a lazy token iterator; [`lex`] drives it to completion.
//! Whitespace and `//` comments are skipped. Malformed input never stops
//! the scan: each problem is recorded as a [`LexError`] and lexing resumes
//! after it, so the stream always ends with exactly one `Eof` token.

mod lex_error;
mod raw_token;

use logos::Logos;
use tarn_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Lazy token stream over one source text.
pub struct Lexer<'src, 'i> {
    logos: logos::Lexer<'src, RawToken>,
    interner: &'i StringInterner,
    errors: Vec<LexError>,
    eof_emitted: bool,
}

impl<'src, 'i> Lexer<'src, 'i> {
    /// Start lexing `source`.
    ///
    /// A source too large for [`Span`] offsets is not scanned at all: the
    /// stream is a lone `Eof` and the only error is `SourceTooLarge`.
    pub fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        let mut logos = RawToken::lexer(source);
        let mut errors = Vec::new();
        if let Some(error) = source_too_large(source.len()) {
            errors.push(error);
            logos.bump(source.len());
        }
        Lexer {
            logos,
            interner,
            errors,
            eof_emitted: false,
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume the lexer, returning the errors it recorded.
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn eof_token(&self) -> Token {
        let end = u32::try_from(self.logos.source().len()).unwrap_or(0);
        Token::new(TokenKind::Eof, Span::point(end))
    }

    /// Record one `UnexpectedChar` per non-whitespace character of `slice`.
    fn report_unexpected(&mut self, slice: &str, start: usize) {
        for (offset, c) in slice.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            let begin = start + offset;
            let span = span_of(begin..begin + c.len_utf8());
            self.errors
                .push(LexError::new(LexErrorKind::UnexpectedChar(c), span));
        }
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(result) = self.logos.next() {
            let range = self.logos.span();
            let slice = self.logos.slice();

            match result {
                Ok(RawToken::UnterminatedString) => {
                    self.errors.push(LexError::new(
                        LexErrorKind::UnterminatedString,
                        span_of(range),
                    ));
                }
                Ok(raw) => {
                    if let Some(kind) = convert_token(raw, slice, self.interner) {
                        return Some(Token::new(kind, span_of(range)));
                    }
                }
                Err(()) => self.report_unexpected(slice, range.start),
            }
        }

        if self.eof_emitted {
            return None;
        }
        self.eof_emitted = true;
        Some(self.eof_token())
    }
}

/// The error for a source of `len` bytes, if it is too large to lex.
fn source_too_large(len: usize) -> Option<LexError> {
    u32::try_from(len)
        .is_err()
        .then(|| LexError::new(LexErrorKind::SourceTooLarge { len }, Span::DUMMY))
}

/// Every range the scanner produces fits, because oversized sources are
/// never scanned.
fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from(range).unwrap_or_default()
}

/// Output of lexing a whole source text.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Check if any lexical errors were found.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`, collecting errors alongside.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut lexer = Lexer::new(source, interner);
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    for token in lexer.by_ref() {
        tokens.push(token);
    }
    let errors = lexer.into_errors();
    debug!(tokens = tokens.len(), errors = errors.len(), "lexed source");
    LexOutput { tokens, errors }
}

/// Convert a raw token to a `TokenKind`, interning strings.
///
/// Returns `None` for trivia and malformed literals, which produce no token.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> Option<TokenKind> {
    let kind = match raw {
        // Literals
        RawToken::Integer(n) | RawToken::Decimal(n) => TokenKind::number(n),
        RawToken::String => {
            let content = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            TokenKind::String(interner.intern(content))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Class => TokenKind::Class,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::For => TokenKind::For,
        RawToken::Fun => TokenKind::Fun,
        RawToken::If => TokenKind::If,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::Super => TokenKind::Super,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,

        // Punctuation
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,

        // Operators
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEq => TokenKind::BangEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,

        RawToken::LineComment | RawToken::UnterminatedString => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests;
