//! Single-token lookahead over a [`TokenList`].

use tarn_diagnostic::ErrorCode;
use tarn_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};

use crate::ParseError;

/// Stands in for the current token once the stream is exhausted, so a token
/// list that lacks a trailing `Eof` still reads as ending in one.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Index of the current token. Recovery compares positions to prove it
    /// made progress.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The token under the cursor; `Eof` once the list runs out.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().discriminant_index() == kind.discriminant_index()
    }

    /// Advance to the next token, returning the one consumed.
    ///
    /// Never moves past `Eof`.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    pub fn expect(&mut self, kind: &TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let code = match kind {
            TokenKind::RParen | TokenKind::RBrace => ErrorCode::E1003,
            _ => ErrorCode::E1001,
        };
        Err(self.error_here(code, message))
    }

    /// Consume an identifier or fail with `message` at the current token.
    pub fn expect_ident(&mut self, message: &str) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(self.error_here(ErrorCode::E1004, message))
        }
    }

    /// Build an error located at the current token.
    #[cold]
    pub fn error_here(&self, code: ErrorCode, message: &str) -> ParseError {
        ParseError::new(code, message, self.error_span())
            .with_context(format!("found {}", self.describe_current()))
    }

    /// Where an error at the current token is reported.
    ///
    /// `Eof` is zero-width at the end of the source, so errors there point at
    /// the last real token and stay within the submitted text.
    fn error_span(&self) -> Span {
        if self.is_at_end() && self.pos > 0 {
            self.previous_span()
        } else {
            self.current_span()
        }
    }

    /// Describe the current token for error labels.
    pub fn describe_current(&self) -> String {
        match self.current_kind() {
            TokenKind::Ident(name) => format!("`{}`", self.interner.lookup(name)),
            TokenKind::Number(bits) => format!("`{}`", f64::from_bits(bits)),
            TokenKind::String(_) => "a string".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            kind => format!("`{}`", kind.display_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_advance_stops_at_eof() {
        let interner = StringInterner::new();
        let tokens = TokenList::from_vec(vec![
            Token::new(TokenKind::Nil, Span::new(0, 3)),
            Token::new(TokenKind::Eof, Span::point(3)),
        ]);
        let mut cursor = Cursor::new(&tokens, &interner);

        assert_eq!(cursor.advance().kind, TokenKind::Nil);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.previous_span(), Span::new(0, 3));
    }

    #[test]
    fn test_missing_eof_reads_as_end() {
        let interner = StringInterner::new();
        let tokens = TokenList::new();
        let cursor = Cursor::new(&tokens, &interner);

        assert!(cursor.is_at_end());
        assert_eq!(cursor.previous_span(), Span::DUMMY);
    }

    #[test]
    fn test_check_ignores_payload() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let tokens = TokenList::from_vec(vec![Token::new(TokenKind::Ident(x), Span::new(0, 1))]);
        let cursor = Cursor::new(&tokens, &interner);

        assert!(cursor.check(&TokenKind::Ident(Name::EMPTY)));
        assert_eq!(cursor.describe_current(), "`x`");
    }

    #[test]
    fn test_error_at_eof_points_at_last_token() {
        let interner = StringInterner::new();
        let tokens = TokenList::from_vec(vec![
            Token::new(TokenKind::Print, Span::new(0, 5)),
            Token::new(TokenKind::number(1.0), Span::new(6, 7)),
            Token::new(TokenKind::Eof, Span::point(7)),
        ]);
        let mut cursor = Cursor::new(&tokens, &interner);
        cursor.advance();
        cursor.advance();

        let err = cursor.error_here(ErrorCode::E1001, "expected `;` after value");
        assert_eq!(err.span, Span::new(6, 7));
        assert_eq!(err.context.as_deref(), Some("found end of file"));
    }

    #[test]
    fn test_expect_reports_found_token() {
        let interner = StringInterner::new();
        let tokens = TokenList::from_vec(vec![
            Token::new(TokenKind::RBrace, Span::new(4, 5)),
            Token::new(TokenKind::Eof, Span::point(5)),
        ]);
        let mut cursor = Cursor::new(&tokens, &interner);

        let Err(err) = cursor.expect(&TokenKind::Semicolon, "expected `;` after value") else {
            panic!("expected an error");
        };
        assert_eq!(err.code, ErrorCode::E1001);
        assert_eq!(err.message, "expected `;` after value");
        assert_eq!(err.span, Span::new(4, 5));
        assert_eq!(err.context.as_deref(), Some("found `}`"));
        assert_eq!(cursor.position(), 0);
    }
}
